use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

/// Shown in slots that have not been revealed since the word count changed.
pub const PLACEHOLDER: &str = "❓❓❓";

pub const WORD_COUNT_OPTIONS: [usize; 5] = [1, 2, 3, 4, 5];

pub const MIN_WORD_COUNT: usize = WORD_COUNT_OPTIONS[0];
pub const MAX_WORD_COUNT: usize = WORD_COUNT_OPTIONS[WORD_COUNT_OPTIONS.len() - 1];

pub fn is_valid_word_count(count: usize) -> bool {
    WORD_COUNT_OPTIONS.contains(&count)
}

/// Steps the word count by `delta`, staying inside the offered range.
pub fn step_word_count(current: usize, delta: isize) -> usize {
    let stepped = current.saturating_add_signed(delta);
    stepped.clamp(MIN_WORD_COUNT, MAX_WORD_COUNT)
}

/// True for an actual word, false for blanks and the placeholder glyphs.
pub fn is_real_word(word: &str) -> bool {
    let trimmed = word.trim();
    !trimmed.is_empty() && !trimmed.contains('❓')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordType {
    #[default]
    Any,
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl WordType {
    pub const ALL: [WordType; 5] =
        [WordType::Any, WordType::Noun, WordType::Verb, WordType::Adjective, WordType::Adverb];

    pub fn label(&self) -> &'static str {
        match self {
            WordType::Any => "Any",
            WordType::Noun => "Noun",
            WordType::Verb => "Verb",
            WordType::Adjective => "Adjective",
            WordType::Adverb => "Adverb",
        }
    }
}

impl fmt::Display for WordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether slots should animate, and for which generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Epoch {
    #[default]
    NoAnimation,
    Animating(u64),
}

impl Epoch {
    pub fn id(&self) -> Option<u64> {
        match self {
            Epoch::NoAnimation => None,
            Epoch::Animating(id) => Some(*id),
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self, Epoch::Animating(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SlotPhase {
    #[default]
    Idle,
    Spinning,
    Settled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotState {
    pub index: usize,
    pub target_word: String,
    pub displayed_word: String,
    pub phase: SlotPhase,
}

impl SlotState {
    pub fn placeholder(index: usize) -> Self {
        Self {
            index,
            target_word: PLACEHOLDER.to_string(),
            displayed_word: PLACEHOLDER.to_string(),
            phase: SlotPhase::Idle,
        }
    }

    pub fn is_clickable(&self) -> bool {
        self.phase == SlotPhase::Settled && is_real_word(&self.target_word)
    }
}
