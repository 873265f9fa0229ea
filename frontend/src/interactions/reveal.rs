/// Visibility ratio a section must reach before fading in.
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

const HIDDEN_STYLE: &str =
    "opacity: 0; transform: translateY(20px); transition: opacity 0.6s ease, transform 0.6s ease;";
const SHOWN_STYLE: &str =
    "opacity: 1; transform: translateY(0); transition: opacity 0.6s ease, transform 0.6s ease;";

/// One-way fade-in latch for a page section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
    animated: bool,
    revealed: bool,
}

impl Reveal {
    /// Sections that are not animated start revealed and carry no inline style.
    pub fn new(animated: bool) -> Self {
        Self {
            animated,
            revealed: !animated,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Returns true only on the sample that reveals the section.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.revealed || !is_intersecting {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn style(&self) -> &'static str {
        match (self.animated, self.revealed) {
            (false, _) => "",
            (true, false) => HIDDEN_STYLE,
            (true, true) => SHOWN_STYLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_and_never_reverses() {
        let mut reveal = Reveal::new(true);
        assert!(reveal.style().starts_with("opacity: 0"));
        assert!(!reveal.observe(false));
        assert!(reveal.observe(true));
        assert!(!reveal.observe(false));
        assert!(!reveal.observe(true));
        assert!(reveal.is_revealed());
        assert!(reveal.style().starts_with("opacity: 1"));
    }

    #[test]
    fn unanimated_sections_start_visible() {
        let reveal = Reveal::new(false);
        assert!(reveal.is_revealed());
        assert_eq!(reveal.style(), "");
    }
}
