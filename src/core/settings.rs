use std::time::Duration;

use serde::{
    Deserialize,
    Serialize,
};

use super::{
    models::{
        is_valid_word_count,
        WordType,
        MIN_WORD_COUNT,
    },
    slot::RevealTiming,
};
use crate::{
    dictionary::DictionarySettings,
    persistence::load_json_or_default,
};

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingSettings {
    pub tick_ms: u64,
    pub base_delay_ms: u64,
    pub stagger_ms: u64,
    pub debounce_ms: u64,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self { tick_ms: 75, base_delay_ms: 1000, stagger_ms: 150, debounce_ms: 100 }
    }
}

impl TimingSettings {
    pub fn reveal_timing(&self) -> RevealTiming {
        RevealTiming {
            // A zero period would make the tick interval panic.
            tick: Duration::from_millis(self.tick_ms.max(1)),
            base_delay: Duration::from_millis(self.base_delay_ms),
            stagger: Duration::from_millis(self.stagger_ms),
            debounce: Duration::from_millis(self.debounce_ms),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardSettings {
    pub timing: TimingSettings,
    pub dictionary: DictionarySettings,
    pub initial_word_count: usize,
    pub initial_word_type: WordType,
}

impl Default for WizardSettings {
    fn default() -> Self {
        Self {
            timing: TimingSettings::default(),
            dictionary: DictionarySettings::default(),
            initial_word_count: MIN_WORD_COUNT,
            initial_word_type: WordType::Any,
        }
    }
}

impl WizardSettings {
    pub fn load() -> Self {
        load_json_or_default::<WizardSettings>(SETTINGS_FILE).sanitized()
    }

    pub fn sanitized(mut self) -> Self {
        if !is_valid_word_count(self.initial_word_count) {
            log::warn!(
                "Ignoring initial_word_count {}; using {}",
                self.initial_word_count,
                MIN_WORD_COUNT
            );
            self.initial_word_count = MIN_WORD_COUNT;
        }
        self
    }
}
