// Phrase typewriter state machine for the hero section.
//
// Pure and host-testable: `step` performs exactly one state transition and
// reports the full replacement text plus the delay to wait before the next
// step. Scheduling belongs to the caller (a one-shot timer that re-arms
// itself from within its own callback).

/// Delays, in milliseconds, between typewriter steps.
#[derive(Clone, Copy, Debug)]
pub struct TyperTiming {
    pub type_ms: u32,
    pub delete_ms: u32,
    pub pause_ms: u32,
}

impl Default for TyperTiming {
    fn default() -> Self {
        Self {
            type_ms: 50,
            delete_ms: 30,
            pause_ms: 1500,
        }
    }
}

/// Output of one step: the text the sink should now display (a full
/// replacement, not an append) and the delay before the next step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TyperStep {
    pub text: String,
    pub delay_ms: u32,
}

/// Cycles through a fixed list of phrases forever, revealing and then
/// deleting each one character at a time, pausing on the fully typed phrase.
pub struct PhraseTyper {
    phrases: Vec<String>,
    timing: TyperTiming,
    phrase_index: usize,
    char_count: usize,
    deleting: bool,
}

impl PhraseTyper {
    pub fn new(phrases: Vec<String>, timing: TyperTiming) -> Self {
        assert!(
            !phrases.is_empty(),
            "PhraseTyper requires at least one phrase"
        );
        Self {
            phrases,
            timing,
            phrase_index: 0,
            char_count: 0,
            deleting: false,
        }
    }

    /// Advance the animation by one character in the current direction.
    ///
    /// Direction flips only at the two boundaries: reaching the full phrase
    /// length while typing (which also swaps the delay for the long pause),
    /// and reaching zero while deleting (which advances to the next phrase
    /// with no extra pause). Counts are in characters, not bytes.
    pub fn step(&mut self) -> TyperStep {
        let phrase = &self.phrases[self.phrase_index];
        let len = phrase.chars().count();

        if self.deleting {
            self.char_count = self.char_count.saturating_sub(1);
        } else {
            self.char_count = (self.char_count + 1).min(len);
        }
        let text: String = phrase.chars().take(self.char_count).collect();

        let mut delay_ms = if self.deleting {
            self.timing.delete_ms
        } else {
            self.timing.type_ms
        };

        if !self.deleting && self.char_count == len {
            delay_ms = self.timing.pause_ms;
            self.deleting = true;
        } else if self.deleting && self.char_count == 0 {
            self.deleting = false;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
        }

        TyperStep { text, delay_ms }
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.phrase_index]
    }
}
