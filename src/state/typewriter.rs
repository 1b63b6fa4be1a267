// Delete-then-type text transition used by the name link.

pub const DELETE_INTERVAL_MS: u32 = 60;
pub const TYPE_INTERVAL_MS: u32 = 80;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypewriterPhase {
    Deleting,
    Typing,
    Done,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    from: Vec<char>,
    to: Vec<char>,
    pos: usize,
    pub phase: TypewriterPhase,
}

impl Typewriter {
    pub fn new(from: &str, to: &str) -> Self {
        let from: Vec<char> = from.chars().collect();
        let phase = if from.is_empty() { TypewriterPhase::Typing } else { TypewriterPhase::Deleting };
        Self { pos: from.len(), from, to: to.chars().collect(), phase }
    }

    /// Delay before the next `step`.
    pub fn interval_ms(&self) -> u32 {
        match self.phase {
            TypewriterPhase::Deleting => DELETE_INTERVAL_MS,
            _ => TYPE_INTERVAL_MS,
        }
    }

    pub fn is_done(&self) -> bool {
        self.phase == TypewriterPhase::Done
    }

    /// Advances one character and returns the text to show.
    pub fn step(&mut self) -> String {
        match self.phase {
            TypewriterPhase::Deleting => {
                self.pos = self.pos.saturating_sub(1);
                let text = self.from[..self.pos].iter().collect();
                if self.pos == 0 {
                    self.phase = TypewriterPhase::Typing;
                }
                text
            }
            TypewriterPhase::Typing => {
                self.pos = (self.pos + 1).min(self.to.len());
                if self.pos == self.to.len() {
                    self.phase = TypewriterPhase::Done;
                }
                self.to[..self.pos].iter().collect()
            }
            TypewriterPhase::Done => self.to.iter().collect(),
        }
    }
}

/// Which of the two texts the link settled on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shown {
    Original,
    Alias,
}

/// Hover-driven swap between a name and its alias. A transition that is
/// already running refuses new starts.
#[derive(Clone, Debug, PartialEq)]
pub struct NameSwap {
    pub original: String,
    pub alias: String,
    pub shown: Shown,
    active: Option<(Typewriter, Shown)>,
}

impl NameSwap {
    pub fn new(original: &str, alias: &str) -> Self {
        Self { original: original.to_string(), alias: alias.to_string(), shown: Shown::Original, active: None }
    }

    #[cfg(test)]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Delay before the first frame of the running transition.
    pub fn next_delay_ms(&self) -> Option<u32> {
        self.active.as_ref().map(|(writer, _)| writer.interval_ms())
    }

    /// Pointer entered; returns true if a transition started.
    pub fn hover_start(&mut self) -> bool {
        self.begin(Shown::Original, Shown::Alias)
    }

    /// Pointer left; returns true if a transition started.
    pub fn hover_end(&mut self) -> bool {
        self.begin(Shown::Alias, Shown::Original)
    }

    fn begin(&mut self, from: Shown, to: Shown) -> bool {
        if self.active.is_some() || self.shown != from {
            return false;
        }
        let writer = match to {
            Shown::Alias => Typewriter::new(&self.original, &self.alias),
            Shown::Original => Typewriter::new(&self.alias, &self.original),
        };
        self.active = Some((writer, to));
        true
    }

    /// Next frame of the running transition, with the delay until the one after.
    pub fn step(&mut self) -> Option<(String, Option<u32>)> {
        let (writer, target) = self.active.as_mut()?;
        let text = writer.step();
        if writer.is_done() {
            self.shown = *target;
            self.active = None;
            return Some((text, None));
        }
        Some((text, Some(writer.interval_ms())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(mut w: Typewriter) -> Vec<String> {
        let mut frames = Vec::new();
        while !w.is_done() {
            frames.push(w.step());
        }
        frames
    }

    #[test]
    fn deletes_then_types() {
        let frames = run(Typewriter::new("krish", "goat"));
        assert_eq!(frames, ["kris", "kri", "kr", "k", "", "g", "go", "goa", "goat"]);
    }

    #[test]
    fn intervals_follow_the_phase() {
        let mut w = Typewriter::new("ab", "c");
        assert_eq!(w.interval_ms(), DELETE_INTERVAL_MS);
        w.step();
        w.step();
        assert_eq!(w.phase, TypewriterPhase::Typing);
        assert_eq!(w.interval_ms(), TYPE_INTERVAL_MS);
    }

    #[test]
    fn empty_source_goes_straight_to_typing() {
        assert_eq!(run(Typewriter::new("", "hi")), ["h", "hi"]);
    }

    #[test]
    fn swap_refuses_restart_while_busy() {
        let mut swap = NameSwap::new("krish", "goat");
        assert!(swap.hover_start());
        assert!(!swap.hover_start());
        // leaving mid-transition is dropped
        assert!(!swap.hover_end());
        let mut last = String::new();
        while let Some((text, _)) = swap.step() {
            last = text;
        }
        assert_eq!(last, "goat");
        assert_eq!(swap.shown, Shown::Alias);
        assert!(!swap.is_animating());
        assert!(!swap.hover_start());
        assert!(swap.hover_end());
    }

    #[test]
    fn swap_reports_delays_until_the_last_frame() {
        let mut swap = NameSwap::new("ab", "c");
        swap.hover_start();
        assert_eq!(swap.step(), Some(("a".to_string(), Some(DELETE_INTERVAL_MS))));
        assert_eq!(swap.step(), Some((String::new(), Some(TYPE_INTERVAL_MS))));
        assert_eq!(swap.step(), Some(("c".to_string(), None)));
        assert_eq!(swap.step(), None);
    }
}
