//! One-shot entrance animations.
//!
//! Every animated section owns a [`RevealLatch`]. Visibility samples from an
//! intersection observer are fed into it and the first sample at or above the
//! section's threshold flips it to revealed for good.

/// Visible fraction needed before most sections animate in.
pub const SECTION_THRESHOLD: f64 = 0.3;
/// Long sections (projects, the blog list) start earlier.
pub const LIST_THRESHOLD: f64 = 0.2;

// observers report the ratio at the crossing, which can land a hair under it
const RATIO_SLACK: f64 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum RevealState {
    #[default]
    Pending,
    Revealed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    state: RevealState,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            state: RevealState::Pending,
        }
    }

    /// A latch that has already fired, for sections that remount after
    /// being shown once.
    pub fn revealed(threshold: f64) -> Self {
        Self {
            state: RevealState::Revealed,
            ..Self::new(threshold)
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Feeds one visibility sample. Returns `true` only for the sample that
    /// flips the latch; everything after that is ignored.
    pub fn observe(&mut self, visible_ratio: f64, intersecting: bool) -> bool {
        if self.is_revealed() || !intersecting {
            return false;
        }
        if visible_ratio + RATIO_SLACK < self.threshold {
            return false;
        }
        self.state = RevealState::Revealed;
        true
    }
}

/// Where an element starts before sliding into place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Entrance {
    #[default]
    Rise,
    FromLeft,
    FromRight,
    Grow,
}

impl Entrance {
    fn hidden_class(self) -> &'static str {
        match self {
            Entrance::Rise => "reveal-rise",
            Entrance::FromLeft => "reveal-left",
            Entrance::FromRight => "reveal-right",
            Entrance::Grow => "reveal-grow",
        }
    }
}

/// Class list for an animated element. `extra` is appended as-is.
pub fn reveal_class(extra: &str, entrance: Entrance, shown: bool) -> String {
    let state = if shown {
        "revealed"
    } else {
        entrance.hidden_class()
    };
    if extra.is_empty() {
        format!("reveal {state}")
    } else {
        format!("reveal {state} {extra}")
    }
}

/// Inline style delaying a transition by `seconds`.
pub fn delay_style(seconds: f64) -> String {
    format!("transition-delay: {:.2}s", seconds.max(0.0))
}

/// Delay of the `index`th item in a staggered group.
pub fn stagger(base: f64, index: usize, step: f64) -> f64 {
    base + index as f64 * step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_fires_once() {
        let mut latch = RevealLatch::new(SECTION_THRESHOLD);
        assert!(!latch.observe(0.1, true));
        assert!(!latch.is_revealed());

        // scrolled in
        assert!(latch.observe(0.45, true));
        assert!(latch.is_revealed());

        // scrolled out and back in again
        assert!(!latch.observe(0.0, false));
        assert!(!latch.observe(0.6, true));
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_latch_ignores_non_intersecting_samples() {
        let mut latch = RevealLatch::new(LIST_THRESHOLD);
        assert!(!latch.observe(0.9, false));
        assert!(!latch.is_revealed());
    }

    #[test]
    fn test_latch_accepts_ratio_at_crossing() {
        let mut latch = RevealLatch::new(0.3);
        assert!(latch.observe(0.2999, true));
    }

    #[test]
    fn test_threshold_clamped() {
        assert_eq!(RevealLatch::new(1.7).threshold(), 1.0);
        assert_eq!(RevealLatch::new(-0.5).threshold(), 0.0);
        let mut latch = RevealLatch::new(-0.5);
        assert!(latch.observe(0.0, true));
    }

    #[test]
    fn test_prefired_latch_never_fires() {
        let mut latch = RevealLatch::revealed(LIST_THRESHOLD);
        assert!(latch.is_revealed());
        assert!(!latch.observe(1.0, true));
    }

    #[test]
    fn test_reveal_class() {
        assert_eq!(
            reveal_class("", Entrance::Rise, false),
            "reveal reveal-rise"
        );
        assert_eq!(
            reveal_class("mb-4", Entrance::FromLeft, false),
            "reveal reveal-left mb-4"
        );
        assert_eq!(
            reveal_class("mb-4", Entrance::FromLeft, true),
            "reveal revealed mb-4"
        );
    }

    #[test]
    fn test_stagger_delays() {
        // second category, third skill
        let delay = stagger(stagger(0.0, 1, 0.2), 2, 0.1);
        assert_eq!(delay_style(delay), "transition-delay: 0.40s");
        assert_eq!(delay_style(-1.0), "transition-delay: 0.00s");
    }
}
