//! In-page anchor navigation.

/// Breathing room left above a section after scrolling to it.
pub const ANCHOR_GAP: f64 = 20.0;

/// Geometry of an anchor target that exists on the current page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetGeometry {
    /// `getBoundingClientRect().top` of the target.
    pub rect_top: f64,
    pub page_y_offset: f64,
    pub nav_height: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AnchorAction {
    /// Not an in-page link; let the browser follow it.
    Ignore,
    ScrollTo(f64),
    /// Target lives on the home page; navigate there with the fragment.
    Redirect(String),
    /// Missing target on the home page itself.
    Stay,
}

/// `"#contact"` yields `Some("contact")`; bare `"#"` and other hrefs yield `None`.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn is_subpage(path: &str) -> bool {
    path != "/" && !path.ends_with("index.html")
}

pub fn home_with_fragment(href: &str) -> String {
    format!("/{href}")
}

pub fn scroll_target(geometry: TargetGeometry) -> f64 {
    geometry.rect_top + geometry.page_y_offset - geometry.nav_height - ANCHOR_GAP
}

pub fn plan(href: &str, target: Option<TargetGeometry>, path: &str) -> AnchorAction {
    if fragment_id(href).is_none() {
        return AnchorAction::Ignore;
    }
    match target {
        Some(geometry) => AnchorAction::ScrollTo(scroll_target(geometry)),
        None if is_subpage(path) => AnchorAction::Redirect(home_with_fragment(href)),
        None => AnchorAction::Stay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GEOMETRY: TargetGeometry = TargetGeometry {
        rect_top: 640.0,
        page_y_offset: 1_200.0,
        nav_height: 72.0,
    };

    #[test]
    fn scrolls_below_navigation() {
        assert_eq!(
            plan("#faq", Some(GEOMETRY), "/"),
            AnchorAction::ScrollTo(1_748.0)
        );
    }

    #[test]
    fn subpage_redirects_home_with_fragment() {
        assert_eq!(
            plan("#contact", None, "/privacy"),
            AnchorAction::Redirect("/#contact".to_string())
        );
        assert_eq!(plan("#contact", None, "/"), AnchorAction::Stay);
        assert_eq!(plan("#contact", None, "/index.html"), AnchorAction::Stay);
    }

    #[test]
    fn non_fragment_links_are_left_alone() {
        assert_eq!(plan("/privacy", None, "/"), AnchorAction::Ignore);
        assert_eq!(plan("#", Some(GEOMETRY), "/"), AnchorAction::Ignore);
        assert_eq!(fragment_id("#tools"), Some("tools"));
    }
}
