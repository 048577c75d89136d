//! Auto-rotating preview carousel for the hero section.

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::state::carousel::{CarouselAction, CarouselState, ROTATE_PERIOD_MS};

/// Two fixed groups of app screenshots, rotated side by side.
const PREVIEW_GROUPS: [&[&str]; 2] = [
    &["/assets/prev1.png", "/assets/1.png", "/assets/2.png"],
    &["/assets/3.png", "/assets/4.png", "/assets/5.png"],
];

#[function_component(HeroCarousel)]
pub fn hero_carousel() -> Html {
    let carousel = use_reducer(|| {
        let lengths: Vec<usize> = PREVIEW_GROUPS.iter().map(|group| group.len()).collect();
        CarouselState::new(&lengths)
    });

    // Rotate all groups on a fixed cadence for as long as we are mounted.
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(ROTATE_PERIOD_MS, move || {
                    dispatcher.dispatch(CarouselAction::Advance);
                });
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <div class="carousel-duo">
            { for PREVIEW_GROUPS.iter().enumerate().map(|(group_idx, group)| {
                let active = carousel.active(group_idx);
                html! {
                    <div class="carousel-card">
                        <div class="carousel-main">
                            <div class="carousel-media">
                                <img
                                    src={group[active]}
                                    alt="App preview"
                                    class="carousel-media-img"
                                />
                            </div>
                            <div class="carousel-dots">
                                { for (0..group.len()).map(|index| {
                                    let onclick = {
                                        let carousel = carousel.clone();
                                        Callback::from(move |_: MouseEvent| {
                                            carousel.dispatch(CarouselAction::Select {
                                                group: group_idx,
                                                index,
                                            });
                                        })
                                    };
                                    html! {
                                        <span
                                            class={classes!("dot", (index == active).then(|| "active"))}
                                            onclick={onclick}
                                        />
                                    }
                                })}
                            </div>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
