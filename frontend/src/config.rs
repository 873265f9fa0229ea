use crate::interactions::{accordion::AccordionMode, scroll::NavMode};

const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/YOUR_FORMSPREE_ID";

pub const FALLBACK_EMAIL: &str = "nairobistonks@gmail.com";

/// Contact form endpoint, overridable at build time with `EVA_FORM_ENDPOINT`.
pub fn get_form_endpoint() -> &'static str {
    option_env!("EVA_FORM_ENDPOINT").unwrap_or(DEFAULT_FORM_ENDPOINT)
}

/// Behavioural variants of the page scripts.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub nav_mode: NavMode,
    pub accordion_mode: AccordionMode,
    /// Visibility ratio that starts the metrics counters.
    pub metrics_threshold: f64,
    pub metrics_root_margin: &'static str,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            nav_mode: NavMode::HideOnScrollDown,
            accordion_mode: AccordionMode::Independent,
            metrics_threshold: 0.1,
            metrics_root_margin: "0px 0px -50px 0px",
        }
    }
}

impl SiteConfig {
    /// The first release: `scrolled` class on the nav, one FAQ entry open at a time.
    pub fn classic() -> Self {
        Self {
            nav_mode: NavMode::ScrolledClass,
            accordion_mode: AccordionMode::Exclusive,
            metrics_threshold: 0.5,
            metrics_root_margin: "0px",
        }
    }
}

#[cfg(debug_assertions)]
pub fn get_site_config() -> SiteConfig {
    match option_env!("EVA_SITE_VARIANT") {
        Some("classic") => SiteConfig::classic(),
        _ => SiteConfig::default(),
    }
}

#[cfg(not(debug_assertions))]
pub fn get_site_config() -> SiteConfig {
    SiteConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_differ_in_every_behaviour() {
        let current = SiteConfig::default();
        let classic = SiteConfig::classic();
        assert_eq!(current.nav_mode, NavMode::HideOnScrollDown);
        assert_eq!(classic.nav_mode, NavMode::ScrolledClass);
        assert_eq!(current.accordion_mode, AccordionMode::Independent);
        assert_eq!(classic.accordion_mode, AccordionMode::Exclusive);
        assert!(classic.metrics_threshold > current.metrics_threshold);
    }
}
