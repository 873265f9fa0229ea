pub const TOUCH_CLASS: &str = "touch-device";
pub const REDUCED_MOTION_CLASS: &str = "reduced-motion";

/// Turns off every transition and animation once the body carries the reduced-motion class.
pub const REDUCED_MOTION_STYLE: &str = "\
body.reduced-motion *, body.reduced-motion *::before, body.reduced-motion *::after {
    transition: none !important;
    animation: none !important;
    scroll-behavior: auto !important;
}";

/// Browser capabilities read once at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Environment {
    pub touch: bool,
    pub prefers_reduced_motion: bool,
    /// `navigator.connection.effectiveType`, when the browser exposes it.
    pub effective_connection: Option<String>,
    pub intersection_observer: bool,
}

impl Environment {
    pub fn is_slow_connection(&self) -> bool {
        matches!(
            self.effective_connection.as_deref(),
            Some("2g") | Some("slow-2g")
        )
    }

    pub fn reduce_motion(&self) -> bool {
        self.prefers_reduced_motion || self.is_slow_connection()
    }

    /// Sections fade in only when they can be observed and motion is welcome.
    pub fn animate_reveals(&self) -> bool {
        self.intersection_observer && !self.reduce_motion()
    }

    /// Classes added to `<body>` for styling hooks.
    pub fn body_classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        if self.touch {
            classes.push(TOUCH_CLASS);
        }
        if self.reduce_motion() {
            classes.push(REDUCED_MOTION_CLASS);
        }
        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slow_connections_reduce_motion() {
        let env = Environment {
            effective_connection: Some("slow-2g".to_string()),
            intersection_observer: true,
            ..Default::default()
        };
        assert!(env.is_slow_connection());
        assert!(!env.animate_reveals());
        assert_eq!(env.body_classes(), vec!["reduced-motion"]);
    }

    #[test]
    fn fast_pointer_device_animates() {
        let env = Environment {
            effective_connection: Some("4g".to_string()),
            intersection_observer: true,
            ..Default::default()
        };
        assert!(env.animate_reveals());
        assert!(env.body_classes().is_empty());
    }

    #[test]
    fn reduced_motion_class_has_a_stylesheet() {
        let env = Environment {
            prefers_reduced_motion: true,
            ..Default::default()
        };
        let selector = format!("body.{} *", REDUCED_MOTION_CLASS);
        assert!(env.body_classes().contains(&REDUCED_MOTION_CLASS));
        assert!(REDUCED_MOTION_STYLE.starts_with(&selector));
        assert!(REDUCED_MOTION_STYLE.contains("transition: none !important"));
    }

    #[test]
    fn no_observer_means_no_fade() {
        let env = Environment {
            touch: true,
            ..Default::default()
        };
        assert!(!env.animate_reveals());
        assert_eq!(env.body_classes(), vec!["touch-device"]);
    }
}
