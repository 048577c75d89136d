use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

mod config;
mod state {
    pub mod carousel;
    pub mod contact;
    pub mod nav;
}
mod components {
    pub mod carousel;
    pub mod contact;
    pub mod sections;
}
mod pages {
    pub mod home;
}

use pages::home::Home;
use state::nav::{NavAction, NavState};

#[function_component(Nav)]
pub fn nav() -> Html {
    let nav = use_reducer(NavState::default);

    // Collapse the mobile menu whenever the viewport grows past the
    // breakpoint, e.g. a rotation while the menu is open.
    {
        let dispatcher = nav.dispatcher();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_inner = window.clone();
                let resize_callback = Closure::wrap(Box::new(move || {
                    if let Some(width) = window_inner.inner_width().ok().and_then(|w| w.as_f64()) {
                        dispatcher.dispatch(NavAction::ViewportWidth(width));
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback("resize", resize_callback.as_ref().unchecked_ref())
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback("resize", resize_callback.as_ref().unchecked_ref())
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_nav = {
        let nav = nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            nav.dispatch(NavAction::Toggle);
        })
    };

    // Selecting a link collapses an open mobile menu; the anchor jump itself
    // must still go through, so no prevent_default here.
    let close_nav = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::Close))
    };

    html! {
        <header class={classes!("topbar", nav.open.then(|| "nav-open"))}>
            <style>
                {r#"
                .topbar {
                    position: sticky;
                    top: 0;
                    z-index: 10;
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    padding: 0.9rem clamp(1rem, 5vw, 4rem);
                    background: rgba(247, 248, 251, 0.92);
                    backdrop-filter: blur(8px);
                    border-bottom: 1px solid #dde2ec;
                }
                .brand {
                    font-weight: 800;
                    letter-spacing: 0.02em;
                    color: #1d2433;
                    margin-right: auto;
                }
                .top-nav {
                    display: flex;
                    gap: 1.25rem;
                }
                .top-nav a {
                    color: #49536a;
                    text-decoration: none;
                    font-weight: 500;
                }
                .top-nav a:hover {
                    color: #3558c0;
                }
                .top-cta {
                    background: #3558c0;
                    color: #fff;
                    padding: 0.55rem 1.1rem;
                    border-radius: 9px;
                    text-decoration: none;
                    font-weight: 600;
                }
                .menu-toggle {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    padding: 0.4rem;
                    cursor: pointer;
                }
                .menu-line {
                    width: 22px;
                    height: 2px;
                    background: #1d2433;
                }
                @media (max-width: 900px) {
                    .menu-toggle {
                        display: flex;
                    }
                    .top-cta {
                        display: none;
                    }
                    .top-nav {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1rem clamp(1rem, 5vw, 4rem) 1.25rem;
                        background: #f7f8fb;
                        border-bottom: 1px solid #dde2ec;
                    }
                    .top-nav.open {
                        display: flex;
                    }
                }
                "#}
            </style>
            <div class="brand">{"SERP Vidya"}</div>
            <button
                type="button"
                class="menu-toggle"
                aria-label="Toggle navigation"
                aria-expanded={nav.open.to_string()}
                onclick={toggle_nav}
            >
                <span class="menu-line" />
                <span class="menu-line" />
                <span class="menu-line" />
            </button>
            <nav class={classes!("top-nav", nav.open.then(|| "open"))}>
                <a href="#about" onclick={close_nav.clone()}>{"About"}</a>
                <a href="#features" onclick={close_nav.clone()}>{"Features"}</a>
                <a href="#support" onclick={close_nav.clone()}>{"Support"}</a>
                <a href="#contact" onclick={close_nav}>{"Contact"}</a>
            </nav>
            <a class="top-cta" href="#contact">{"Contact Us"}</a>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <div class="page">
            <Nav />
            <Home />
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting SERP Vidya site");
    yew::Renderer::<App>::new().render();
}
