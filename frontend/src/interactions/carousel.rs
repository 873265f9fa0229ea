//! Auto-advancing tools carousel.

/// 120px minimum item width plus the 2rem (32px) gap.
pub const TOOL_ITEM_WIDTH: f64 = 152.0;

pub const POINTER_INTERVAL_MS: u32 = 1000;
/// Touch devices tick slower to spare battery.
pub const TOUCH_INTERVAL_MS: u32 = 1500;
pub const HOVER_SPEEDUP_MS: u32 = 500;
pub const MIN_INTERVAL_MS: u32 = 300;

/// Number of whole items that fit in `container_width`.
pub fn visible_items(container_width: f64, item_width: f64) -> usize {
    if item_width <= 0.0 || !container_width.is_finite() || container_width <= 0.0 {
        return 0;
    }
    (container_width / item_width).floor() as usize
}

/// Auto-advance period. Hovering speeds the carousel up instead of pausing it.
pub fn tick_interval_ms(is_touch: bool, is_hovering: bool) -> u32 {
    let base = if is_touch {
        TOUCH_INTERVAL_MS
    } else {
        POINTER_INTERVAL_MS
    };
    if is_hovering {
        base.saturating_sub(HOVER_SPEEDUP_MS).max(MIN_INTERVAL_MS)
    } else {
        base
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    index: usize,
    item_width: f64,
    visible_count: usize,
    total_items: usize,
    is_hovering: bool,
}

impl CarouselState {
    pub fn new(total_items: usize, item_width: f64, container_width: f64) -> Self {
        Self {
            index: 0,
            item_width,
            visible_count: visible_items(container_width, item_width),
            total_items,
            is_hovering: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn is_hovering(&self) -> bool {
        self.is_hovering
    }

    pub fn max_index(&self) -> usize {
        self.total_items.saturating_sub(self.visible_count)
    }

    /// Moves one item forward, wrapping to the start after the last full window.
    pub fn advance(&mut self) {
        if self.index < self.max_index() {
            self.index += 1;
        } else {
            self.index = 0;
        }
    }

    /// Recomputes the visible window for a new container width and clamps the index.
    pub fn resize(&mut self, container_width: f64) {
        self.visible_count = visible_items(container_width, self.item_width);
        self.index = self.index.min(self.max_index());
    }

    /// Returns true if the hover state changed.
    pub fn set_hovering(&mut self, hovering: bool) -> bool {
        let changed = self.is_hovering != hovering;
        self.is_hovering = hovering;
        changed
    }

    /// Horizontal translation of the track, negative to move left.
    pub fn offset_px(&self) -> f64 {
        -(self.index as f64 * self.item_width)
    }

    pub fn transform(&self) -> String {
        let offset = self.offset_px();
        // Index 0 yields -0.0, which would print as "-0px".
        if offset == 0.0 {
            return "translateX(0px)".to_string();
        }
        format!("translateX({}px)", offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn six_items_three_visible_wraps_after_three() {
        let mut carousel = CarouselState::new(6, TOOL_ITEM_WIDTH, 3.0 * TOOL_ITEM_WIDTH);
        assert_eq!(carousel.visible_count(), 3);
        for expected in 1..=3 {
            carousel.advance();
            assert_eq!(carousel.index(), expected);
        }
        carousel.advance();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn offset_follows_index() {
        let mut carousel = CarouselState::new(6, TOOL_ITEM_WIDTH, 300.0);
        assert_eq!(carousel.transform(), "translateX(0px)");
        carousel.advance();
        carousel.advance();
        assert_eq!(carousel.offset_px(), -304.0);
        assert_eq!(carousel.transform(), "translateX(-304px)");
    }

    #[test]
    fn wrapping_back_to_start_resets_transform() {
        let mut carousel = CarouselState::new(4, TOOL_ITEM_WIDTH, 3.0 * TOOL_ITEM_WIDTH);
        carousel.advance();
        assert_eq!(carousel.transform(), "translateX(-152px)");
        carousel.advance();
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.offset_px(), 0.0);
        assert_eq!(carousel.transform(), "translateX(0px)");
    }

    #[test]
    fn widening_clamps_index() {
        let mut carousel = CarouselState::new(6, TOOL_ITEM_WIDTH, 152.0);
        for _ in 0..5 {
            carousel.advance();
        }
        assert_eq!(carousel.index(), 5);
        carousel.resize(4.0 * TOOL_ITEM_WIDTH + 10.0);
        assert_eq!(carousel.visible_count(), 4);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn everything_visible_stays_put() {
        let mut carousel = CarouselState::new(4, TOOL_ITEM_WIDTH, 2_000.0);
        carousel.advance();
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.max_index(), 0);
    }

    #[test]
    fn degenerate_widths_show_nothing() {
        assert_eq!(visible_items(0.0, TOOL_ITEM_WIDTH), 0);
        assert_eq!(visible_items(f64::NAN, TOOL_ITEM_WIDTH), 0);
        assert_eq!(visible_items(500.0, 0.0), 0);
    }

    #[test]
    fn hover_speeds_up_with_floor() {
        assert_eq!(tick_interval_ms(false, false), 1000);
        assert_eq!(tick_interval_ms(false, true), 500);
        assert_eq!(tick_interval_ms(true, false), 1500);
        assert_eq!(tick_interval_ms(true, true), 1000);
        let mut carousel = CarouselState::new(3, TOOL_ITEM_WIDTH, 152.0);
        assert!(carousel.set_hovering(true));
        assert!(!carousel.set_hovering(true));
        assert!(carousel.is_hovering());
    }

    #[test]
    fn hover_flag_picks_the_timer_period() {
        let mut carousel = CarouselState::new(6, TOOL_ITEM_WIDTH, 304.0);
        let resting = tick_interval_ms(false, carousel.is_hovering());
        carousel.set_hovering(true);
        let hovered = tick_interval_ms(false, carousel.is_hovering());
        assert_eq!((resting, hovered), (1000, 500));
        carousel.set_hovering(false);
        assert_eq!(tick_interval_ms(false, carousel.is_hovering()), resting);
    }

    #[derive(Clone, Debug)]
    enum Op {
        Advance,
        Resize(f64),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => Just(Op::Advance),
            1 => (0.0f64..3_000.0).prop_map(Op::Resize),
        ]
    }

    proptest! {
        #[test]
        fn index_stays_in_window(
            total in 0usize..20,
            width in 0.0f64..3_000.0,
            ops in prop::collection::vec(op(), 0..80),
        ) {
            let mut carousel = CarouselState::new(total, TOOL_ITEM_WIDTH, width);
            for op in ops {
                match op {
                    Op::Advance => carousel.advance(),
                    Op::Resize(width) => carousel.resize(width),
                }
                prop_assert!(carousel.index() <= total.saturating_sub(carousel.visible_count()));
            }
        }
    }
}
