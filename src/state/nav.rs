//! Mobile navigation menu state.

use std::rc::Rc;

use yew::Reducible;

/// Viewport width above which the mobile menu is never shown.
pub const NAV_BREAKPOINT_PX: f64 = 900.0;

#[derive(Clone, PartialEq, Debug)]
pub enum NavAction {
    Toggle,
    Close,
    /// Reported on every window resize; only ever closes the menu.
    ViewportWidth(f64),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NavState {
    pub open: bool,
}

impl NavState {
    pub fn apply(&mut self, action: NavAction) {
        match action {
            NavAction::Toggle => self.open = !self.open,
            NavAction::Close => self.open = false,
            NavAction::ViewportWidth(width) => {
                if width > NAV_BREAKPOINT_PX {
                    self.open = false;
                }
            }
        }
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: NavAction) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_back_and_forth() {
        let mut nav = NavState::default();
        assert!(!nav.open);
        nav.apply(NavAction::Toggle);
        assert!(nav.open);
        nav.apply(NavAction::Toggle);
        assert!(!nav.open);
    }

    #[test]
    fn close_is_idempotent() {
        let mut nav = NavState::default();
        nav.apply(NavAction::Toggle);
        nav.apply(NavAction::Close);
        assert!(!nav.open);
        nav.apply(NavAction::Close);
        assert!(!nav.open);
    }

    #[test]
    fn wide_viewport_forces_the_menu_shut() {
        let mut nav = NavState::default();
        nav.apply(NavAction::Toggle);
        nav.apply(NavAction::ViewportWidth(901.0));
        assert!(!nav.open);
    }

    #[test]
    fn narrow_viewport_never_changes_the_menu() {
        let mut nav = NavState::default();
        nav.apply(NavAction::ViewportWidth(480.0));
        assert!(!nav.open);

        nav.apply(NavAction::Toggle);
        nav.apply(NavAction::ViewportWidth(900.0));
        assert!(nav.open);
    }
}
