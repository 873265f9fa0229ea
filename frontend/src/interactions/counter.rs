//! Count-up animation for the metrics panel.

pub const COUNTER_DURATION_MS: f64 = 2000.0;
/// Assumed refresh cadence (~60 fps) used to size each increment.
pub const FRAME_INTERVAL_MS: f64 = 16.0;

/// Parses a `data-target` attribute. Absent or non-numeric targets skip the animation.
pub fn parse_target(raw: Option<&str>) -> Option<u64> {
    raw?.trim().parse().ok()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: u64,
    pub done: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            increment: target as f64 / (COUNTER_DURATION_MS / FRAME_INTERVAL_MS),
            current: 0.0,
            done: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advances one frame. The last frame always lands exactly on the target.
    pub fn step(&mut self) -> CounterFrame {
        if !self.done {
            self.current += self.increment;
            if self.current < self.target as f64 {
                return CounterFrame {
                    value: (self.current.floor() as u64).min(self.target),
                    done: false,
                };
            }
            self.done = true;
        }
        CounterFrame {
            value: self.target,
            done: true,
        }
    }
}

/// One-shot gate: the metrics animation starts the first time the panel is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MetricsLatch {
    has_run: bool,
}

impl MetricsLatch {
    /// Returns true exactly once, on the first visible sample.
    pub fn fire(&mut self, is_visible: bool) -> bool {
        if !is_visible || self.has_run {
            return false;
        }
        self.has_run = true;
        true
    }

    pub fn has_run(&self) -> bool {
        self.has_run
    }
}
