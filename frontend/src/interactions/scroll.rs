//! Navigation bar state driven by the window scroll offset.

/// Offset (px) past which the navigation counts as scrolled.
pub const SCROLL_THRESHOLD: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavMode {
    /// Hide the bar while scrolling down past the threshold, show it again on the way up.
    HideOnScrollDown,
    /// Only toggle the `scrolled` class at the threshold.
    ScrolledClass,
}

/// What the navigation should render after a scroll sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavView {
    pub scrolled: bool,
    pub hidden: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavState {
    mode: NavMode,
    last_scroll_y: f64,
    is_hidden: bool,
    is_scrolled: bool,
}

impl NavState {
    pub fn new(mode: NavMode, initial_scroll_y: f64) -> Self {
        Self {
            mode,
            last_scroll_y: initial_scroll_y,
            is_hidden: false,
            is_scrolled: initial_scroll_y > SCROLL_THRESHOLD,
        }
    }

    /// Records a new scroll offset and returns the resulting view.
    pub fn sample(&mut self, scroll_y: f64) -> NavView {
        self.is_scrolled = scroll_y > SCROLL_THRESHOLD;
        self.is_hidden = match self.mode {
            NavMode::HideOnScrollDown => {
                scroll_y > self.last_scroll_y && scroll_y > SCROLL_THRESHOLD
            }
            NavMode::ScrolledClass => false,
        };
        self.last_scroll_y = scroll_y;
        self.view()
    }

    pub fn view(&self) -> NavView {
        NavView {
            scrolled: self.is_scrolled,
            hidden: self.is_hidden,
        }
    }

    #[cfg(test)]
    pub fn last_scroll_y(&self) -> f64 {
        self.last_scroll_y
    }
}

/// Coalesces a burst of scroll events into a single animation-frame update.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns true if the caller should request a frame. Further calls return
    /// false until [`FrameGate::release`] runs from the frame callback.
    pub fn try_schedule(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn release(&mut self) {
        self.pending = false;
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Open/closed state of the mobile navigation overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }

    /// Value for the hamburger button's `aria-expanded`.
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    /// Value for the overlay's `aria-hidden`.
    pub fn aria_hidden(&self) -> &'static str {
        if self.open {
            "false"
        } else {
            "true"
        }
    }

    /// Body `overflow` while the overlay is showing.
    pub fn body_overflow(&self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn hides_only_when_scrolling_down_past_threshold() {
        let mut nav = NavState::new(NavMode::HideOnScrollDown, 0.0);
        assert!(!nav.sample(80.0).hidden);
        assert!(nav.sample(150.0).hidden);
        assert!(nav.sample(400.0).hidden);
        let up = nav.sample(350.0);
        assert!(!up.hidden);
        assert!(up.scrolled);
    }

    #[test]
    fn scrolled_class_mode_never_hides() {
        let mut nav = NavState::new(NavMode::ScrolledClass, 0.0);
        let view = nav.sample(5_000.0);
        assert!(view.scrolled);
        assert!(!view.hidden);
        assert_eq!(nav.last_scroll_y(), 5_000.0);
    }

    #[test]
    fn reload_mid_page_starts_scrolled() {
        let view = NavState::new(NavMode::HideOnScrollDown, 640.0).view();
        assert!(view.scrolled);
        assert!(!view.hidden);
        assert!(!NavState::new(NavMode::ScrolledClass, 0.0).view().scrolled);
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut nav = NavState::new(NavMode::ScrolledClass, 0.0);
        assert!(!nav.sample(100.0).scrolled);
        assert!(nav.sample(100.5).scrolled);
    }

    #[test]
    fn gate_allows_one_frame_per_burst() {
        let mut gate = FrameGate::default();
        assert!(gate.try_schedule());
        assert!(!gate.try_schedule());
        assert!(!gate.try_schedule());
        assert!(gate.is_pending());
        gate.release();
        assert!(gate.try_schedule());
    }

    #[test]
    fn mobile_menu_aria_follows_state() {
        let menu = MobileMenu::default();
        assert_eq!(menu.aria_expanded(), "false");
        assert_eq!(menu.aria_hidden(), "true");
        let open = menu.toggled();
        assert!(open.is_open());
        assert_eq!(open.aria_expanded(), "true");
        assert_eq!(open.aria_hidden(), "false");
        assert_eq!(open.body_overflow(), "hidden");
        assert!(!open.closed().is_open());
        assert!(!open.toggled().is_open());
    }

    fn any_mode() -> impl Strategy<Value = NavMode> {
        prop_oneof![Just(NavMode::HideOnScrollDown), Just(NavMode::ScrolledClass)]
    }

    proptest! {
        #[test]
        fn scrolled_matches_threshold(
            mode in any_mode(),
            offsets in prop::collection::vec(0.0f64..5_000.0, 1..40),
        ) {
            let mut nav = NavState::new(mode, 0.0);
            for y in offsets {
                let view = nav.sample(y);
                prop_assert_eq!(view.scrolled, y > SCROLL_THRESHOLD);
                if y <= SCROLL_THRESHOLD {
                    prop_assert!(!view.hidden);
                }
            }
        }
    }
}
