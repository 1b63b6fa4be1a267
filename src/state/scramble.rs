// Scrambled-text effects: hover decrypt and the rotating location line.

use crate::rng::RandomSource;

pub const CHARSET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!@#$%^&*()_+0123456789";
pub const FRAME_MS: u32 = 50;
pub const HOLD_MS: u32 = 2500;
/// Full-scramble frames between erase and reveal.
pub const SCRAMBLE_FRAMES: u32 = 9;

/// Replaces every non-space character with a random glyph from `CHARSET`.
pub fn scramble_text(text: &str, rng: &mut impl RandomSource) -> String {
    let glyphs: Vec<char> = CHARSET.chars().collect();
    text.chars()
        .map(|c| if c == ' ' { ' ' } else { glyphs[rng.index(glyphs.len())] })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationPhase {
    /// Waiting before the next transition.
    Hold,
    Erase { pos: usize },
    Scramble { count: u32 },
    Reveal { pos: usize },
}

/// Cycles through a list of strings with an erase / scramble / reveal transition.
#[derive(Clone, Debug, PartialEq)]
pub struct LocationRotator {
    items: Vec<String>,
    pub index: usize,
    pub phase: RotationPhase,
}

impl LocationRotator {
    pub fn new(items: Vec<String>) -> Self {
        Self { items, index: 0, phase: RotationPhase::Hold }
    }

    pub fn current(&self) -> &str {
        self.items.get(self.index).map(String::as_str).unwrap_or("")
    }

    fn next_index(&self) -> usize {
        (self.index + 1) % self.items.len().max(1)
    }

    fn next(&self) -> &str {
        self.items.get(self.next_index()).map(String::as_str).unwrap_or("")
    }

    /// Delay before the next `step`.
    pub fn delay_ms(&self) -> u32 {
        match self.phase {
            RotationPhase::Hold => HOLD_MS,
            _ => FRAME_MS,
        }
    }

    /// Advances one frame and returns the text to show.
    pub fn step(&mut self, rng: &mut impl RandomSource) -> String {
        let current: Vec<char> = self.current().chars().collect();
        let next: Vec<char> = self.next().chars().collect();
        match self.phase {
            RotationPhase::Hold => {
                if self.items.len() < 2 {
                    return self.current().to_string();
                }
                self.phase = RotationPhase::Erase { pos: current.len() };
                self.step(rng)
            }
            RotationPhase::Erase { pos } => {
                let pos = pos.saturating_sub(1);
                let visible: String = current[..pos].iter().collect();
                let tail: String = current[pos..].iter().collect();
                self.phase = if pos == 0 {
                    RotationPhase::Scramble { count: 0 }
                } else {
                    RotationPhase::Erase { pos }
                };
                visible + &scramble_text(&tail, rng)
            }
            RotationPhase::Scramble { count } => {
                let width = current.len().max(next.len());
                let padded: String = next.iter().copied().chain(std::iter::repeat(' ')).take(width).collect();
                let text = scramble_text(&padded, rng).trim().to_string();
                let count = count + 1;
                self.phase = if count >= SCRAMBLE_FRAMES {
                    RotationPhase::Reveal { pos: 0 }
                } else {
                    RotationPhase::Scramble { count }
                };
                text
            }
            RotationPhase::Reveal { pos } => {
                let pos = (pos + 1).min(next.len());
                if pos >= next.len() {
                    self.index = self.next_index();
                    self.phase = RotationPhase::Hold;
                    return next.iter().collect();
                }
                self.phase = RotationPhase::Reveal { pos };
                let revealed: String = next[..pos].iter().collect();
                let tail: String = next[pos..].iter().collect();
                revealed + &scramble_text(&tail, rng)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SeededRng;

    #[test]
    fn scramble_keeps_spaces_and_length() {
        let mut rng = SeededRng::new(5);
        let out = scramble_text("New York, NY", &mut rng);
        assert_eq!(out.chars().count(), 12);
        assert_eq!(out.chars().nth(3), Some(' '));
        assert_eq!(out.chars().nth(9), Some(' '));
        assert!(out.chars().filter(|c| *c != ' ').all(|c| CHARSET.contains(c)));
    }

    #[test]
    fn rotation_walks_every_phase() {
        let mut rng = SeededRng::new(9);
        let mut r = LocationRotator::new(vec!["Oslo".into(), "Lima".into()]);
        assert_eq!(r.delay_ms(), HOLD_MS);

        // erase: 4 frames, the first triggered from Hold
        let first = r.step(&mut rng);
        assert!(first.starts_with("Osl"));
        assert_eq!(r.phase, RotationPhase::Erase { pos: 3 });
        for _ in 0..3 {
            r.step(&mut rng);
        }
        assert_eq!(r.phase, RotationPhase::Scramble { count: 0 });
        assert_eq!(r.delay_ms(), FRAME_MS);

        for _ in 0..SCRAMBLE_FRAMES {
            let s = r.step(&mut rng);
            assert_eq!(s.chars().count(), 4);
        }
        assert_eq!(r.phase, RotationPhase::Reveal { pos: 0 });

        assert!(r.step(&mut rng).starts_with('L'));
        assert!(r.step(&mut rng).starts_with("Li"));
        assert!(r.step(&mut rng).starts_with("Lim"));
        assert_eq!(r.step(&mut rng), "Lima");
        assert_eq!(r.phase, RotationPhase::Hold);
        assert_eq!(r.index, 1);
        assert_eq!(r.current(), "Lima");
    }

    #[test]
    fn rotation_wraps_around() {
        let mut rng = SeededRng::new(1);
        let mut r = LocationRotator::new(vec!["A".into(), "B".into()]);
        for _ in 0..2 {
            while {
                r.step(&mut rng);
                r.phase != RotationPhase::Hold
            } {}
        }
        assert_eq!(r.index, 0);
        assert_eq!(r.current(), "A");
    }

    #[test]
    fn single_location_never_moves() {
        let mut rng = SeededRng::new(1);
        let mut r = LocationRotator::new(vec!["Home".into()]);
        assert_eq!(r.step(&mut rng), "Home");
        assert_eq!(r.phase, RotationPhase::Hold);
    }
}
