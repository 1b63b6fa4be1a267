/// Turns animation-frame timestamps into whole fixed-rate ticks.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameClock {
    step_ms: f64,
    max_catch_up: u32,
    last_ms: Option<f64>,
    carry_ms: f64,
}

pub const TICK_MS: f64 = 1000.0 / 60.0;
pub const MAX_CATCH_UP: u32 = 4;

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(TICK_MS, MAX_CATCH_UP)
    }
}

impl FrameClock {
    pub fn new(step_ms: f64, max_catch_up: u32) -> Self {
        Self { step_ms, max_catch_up, last_ms: None, carry_ms: 0.0 }
    }

    /// Number of ticks owed at `now_ms`. The first call only primes the clock.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let Some(last) = self.last_ms.replace(now_ms) else {
            return 0;
        };
        self.carry_ms += (now_ms - last).max(0.0);
        let owed = (self.carry_ms / self.step_ms).floor() as u32;
        if owed > self.max_catch_up {
            // drop the backlog (tab was hidden)
            self.carry_ms = 0.0;
            return self.max_catch_up;
        }
        self.carry_ms -= owed as f64 * self.step_ms;
        owed
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
        self.carry_ms = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_only_primes() {
        let mut c = FrameClock::new(10.0, 4);
        assert_eq!(c.advance(1234.0), 0);
        assert_eq!(c.advance(1244.0), 1);
    }

    #[test]
    fn remainder_carries_over() {
        let mut c = FrameClock::new(10.0, 4);
        c.advance(0.0);
        assert_eq!(c.advance(6.0), 0);
        assert_eq!(c.advance(12.0), 1);
        assert_eq!(c.advance(25.0), 1);
        assert_eq!(c.advance(30.0), 1);
    }

    #[test]
    fn long_gap_is_capped() {
        let mut c = FrameClock::new(10.0, 4);
        c.advance(0.0);
        assert_eq!(c.advance(5000.0), 4);
        assert_eq!(c.advance(5010.0), 1);
    }

    #[test]
    fn backwards_time_owes_nothing() {
        let mut c = FrameClock::default();
        c.advance(100.0);
        assert_eq!(c.advance(50.0), 0);
    }

    #[test]
    fn reset_primes_again() {
        let mut c = FrameClock::new(10.0, 4);
        c.advance(0.0);
        c.reset();
        assert_eq!(c.advance(100.0), 0);
    }
}
