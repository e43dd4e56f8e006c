/// Milliseconds between two [`Typewriter::tick`]s.
pub const TICK_MS: u64 = 60;
/// Ticks a finished phrase stays on screen before it is deleted (~2s).
pub const HOLD_TICKS: u32 = 33;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding(u32),
    Deleting,
}

/// Types a list of phrases one character per tick, holds each one, deletes
/// it again and moves on to the next, wrapping around forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    hold_ticks: u32,
    current: usize,
    visible: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(phrases: &'static [&'static str]) -> Self {
        Self {
            phrases,
            hold_ticks: HOLD_TICKS,
            current: 0,
            visible: 0,
            phase: Phase::Typing,
        }
    }

    pub fn with_hold(mut self, ticks: u32) -> Self {
        self.hold_ticks = ticks;
        self
    }

    pub fn tick(&mut self) {
        let Some(phrase) = self.phrases.get(self.current) else {
            return;
        };
        let len = phrase.chars().count();
        self.phase = match self.phase {
            Phase::Typing => {
                self.visible = (self.visible + 1).min(len);
                if self.visible == len {
                    Phase::Holding(self.hold_ticks)
                } else {
                    Phase::Typing
                }
            }
            Phase::Holding(0) => Phase::Deleting,
            Phase::Holding(n) => Phase::Holding(n - 1),
            Phase::Deleting => {
                self.visible = self.visible.saturating_sub(1);
                if self.visible == 0 {
                    self.current = (self.current + 1) % self.phrases.len();
                    Phase::Typing
                } else {
                    Phase::Deleting
                }
            }
        };
    }

    /// The part of the current phrase on screen right now.
    pub fn text(&self) -> &'static str {
        let Some(phrase) = self.phrases.get(self.current) else {
            return "";
        };
        let end = phrase
            .char_indices()
            .nth(self.visible)
            .map(|(i, _)| i)
            .unwrap_or(phrase.len());
        &phrase[..end]
    }

    /// The whole phrase currently being typed or deleted.
    pub fn phrase(&self) -> &'static str {
        self.phrases.get(self.current).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROLES: &[&str] = &["ab", "xyz"];

    fn run(t: &mut Typewriter, ticks: usize) {
        for _ in 0..ticks {
            t.tick();
        }
    }

    #[test]
    fn test_types_holds_and_deletes() {
        let mut t = Typewriter::new(ROLES).with_hold(2);
        assert_eq!(t.text(), "");
        t.tick();
        assert_eq!(t.text(), "a");
        t.tick();
        assert_eq!(t.text(), "ab");

        // held for the hold ticks plus the tick that starts deleting
        run(&mut t, 3);
        assert_eq!(t.text(), "ab");
        t.tick();
        assert_eq!(t.text(), "a");
        t.tick();
        assert_eq!(t.text(), "");
        assert_eq!(t.phrase(), "xyz");
    }

    #[test]
    fn test_wraps_to_first_phrase() {
        let mut t = Typewriter::new(ROLES).with_hold(0);
        // "ab": 2 typed, 1 hold, 2 deleted
        run(&mut t, 5);
        assert_eq!(t.phrase(), "xyz");
        // "xyz": 3 typed, 1 hold, 3 deleted
        run(&mut t, 7);
        assert_eq!(t.phrase(), "ab");
        t.tick();
        assert_eq!(t.text(), "a");
    }

    #[test]
    fn test_multibyte_phrases() {
        const WAVE: &[&str] = &["hé👋"];
        let mut t = Typewriter::new(WAVE);
        run(&mut t, 2);
        assert_eq!(t.text(), "hé");
        t.tick();
        assert_eq!(t.text(), "hé👋");
    }

    #[test]
    fn test_no_phrases() {
        let mut t = Typewriter::new(&[]);
        t.tick();
        assert_eq!(t.text(), "");
    }
}
