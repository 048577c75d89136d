//! Active-slide bookkeeping for the hero carousel.

use std::rc::Rc;

use yew::Reducible;

/// Period of the automatic slide rotation.
pub const ROTATE_PERIOD_MS: u32 = 4_000;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum CarouselAction {
    /// Timer tick: every group moves forward one slide, wrapping.
    Advance,
    /// Indicator click: jump one group to a specific slide.
    Select { group: usize, index: usize },
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CarouselState {
    lengths: Vec<usize>,
    active: Vec<usize>,
}

impl CarouselState {
    pub fn new(lengths: &[usize]) -> Self {
        Self {
            lengths: lengths.to_vec(),
            active: vec![0; lengths.len()],
        }
    }

    pub fn active(&self, group: usize) -> usize {
        self.active.get(group).copied().unwrap_or(0)
    }

    pub fn apply(&mut self, action: CarouselAction) {
        match action {
            CarouselAction::Advance => {
                for (index, len) in self.active.iter_mut().zip(&self.lengths) {
                    if *len > 0 {
                        *index = (*index + 1) % len;
                    }
                }
            }
            CarouselAction::Select { group, index } => {
                if self.lengths.get(group).is_some_and(|len| index < *len) {
                    self.active[group] = index;
                }
            }
        }
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: CarouselAction) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_the_first_slide_of_every_group() {
        let state = CarouselState::new(&[3, 3]);
        assert_eq!(state.active(0), 0);
        assert_eq!(state.active(1), 0);
    }

    #[test]
    fn advance_wraps_each_group_modulo_its_length() {
        let mut state = CarouselState::new(&[3, 3]);
        for tick in 1..=10 {
            state.apply(CarouselAction::Advance);
            assert_eq!(state.active(0), tick % 3);
            assert_eq!(state.active(1), tick % 3);
        }
    }

    #[test]
    fn groups_of_different_lengths_advance_independently() {
        let mut state = CarouselState::new(&[3, 5]);
        for _ in 0..4 {
            state.apply(CarouselAction::Advance);
        }
        assert_eq!(state.active(0), 1);
        assert_eq!(state.active(1), 4);
    }

    #[test]
    fn select_jumps_one_group_and_leaves_the_other() {
        let mut state = CarouselState::new(&[3, 3]);
        state.apply(CarouselAction::Select { group: 0, index: 2 });
        assert_eq!(state.active(0), 2);
        assert_eq!(state.active(1), 0);
    }

    #[test]
    fn select_then_advance_continues_from_the_new_slide() {
        let mut state = CarouselState::new(&[3, 3]);
        state.apply(CarouselAction::Select { group: 0, index: 2 });
        state.apply(CarouselAction::Advance);
        assert_eq!(state.active(0), 0);
        assert_eq!(state.active(1), 1);
    }

    #[test]
    fn out_of_range_selects_are_ignored() {
        let mut state = CarouselState::new(&[3, 3]);
        let snapshot = state.clone();
        state.apply(CarouselAction::Select { group: 0, index: 3 });
        state.apply(CarouselAction::Select { group: 9, index: 0 });
        assert_eq!(state, snapshot);
    }

    #[test]
    fn indices_stay_in_bounds_under_any_action_mix() {
        let mut state = CarouselState::new(&[3, 5]);
        let actions = [
            CarouselAction::Advance,
            CarouselAction::Select { group: 1, index: 4 },
            CarouselAction::Advance,
            CarouselAction::Advance,
            CarouselAction::Select { group: 0, index: 1 },
            CarouselAction::Advance,
        ];
        for action in actions {
            state.apply(action);
            assert!(state.active(0) < 3);
            assert!(state.active(1) < 5);
        }
    }
}
