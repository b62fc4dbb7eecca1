use rand::Rng;

use super::{
    models::{
        is_valid_word_count,
        Epoch,
        WordType,
        MIN_WORD_COUNT,
    },
    slot::{
        RevealPlan,
        RevealTiming,
        SlotReveal,
    },
    word_pool::WordPool,
    WizardError,
};

/// Identifies one `generate()` request while its debounce timer runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GenerationTicket(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingGeneration {
    pub ticket: GenerationTicket,
    pub word_type: WordType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationStatus {
    #[default]
    Idle,
    Generating(PendingGeneration),
}

#[derive(Debug, Clone)]
pub struct GenerationController {
    word_count: usize,
    word_type: WordType,
    slots: Vec<SlotReveal>,
    epoch: Epoch,
    epochs_issued: u64,
    tickets_issued: u64,
    status: GenerationStatus,
}

impl GenerationController {
    pub fn new(word_count: usize, word_type: WordType) -> Result<Self, WizardError> {
        if !is_valid_word_count(word_count) {
            return Err(WizardError::InvalidWordCount(word_count));
        }

        Ok(Self {
            word_count,
            word_type,
            slots: placeholder_slots(word_count),
            epoch: Epoch::NoAnimation,
            epochs_issued: 0,
            tickets_issued: 0,
            status: GenerationStatus::Idle,
        })
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn word_type(&self) -> WordType {
        self.word_type
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    pub fn status(&self) -> GenerationStatus {
        self.status
    }

    pub fn is_generating(&self) -> bool {
        matches!(self.status, GenerationStatus::Generating(_))
    }

    pub fn slots(&self) -> &[SlotReveal] {
        &self.slots
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut SlotReveal> {
        self.slots.get_mut(index)
    }

    pub fn is_animating(&self) -> bool {
        self.slots.iter().any(SlotReveal::is_spinning)
    }

    /// Rebuilds the slots as placeholders and drops any pending generation.
    pub fn set_word_count(&mut self, word_count: usize) -> Result<(), WizardError> {
        if !is_valid_word_count(word_count) {
            return Err(WizardError::InvalidWordCount(word_count));
        }

        self.word_count = word_count;
        self.epoch = Epoch::NoAnimation;
        self.status = GenerationStatus::Idle;
        self.slots = placeholder_slots(word_count);
        Ok(())
    }

    pub fn set_word_type(&mut self, word_type: WordType) {
        self.word_type = word_type;
    }

    /// Blanks every slot and hands out a ticket for the debounce timer.
    /// Returns `None` while another generation is still pending.
    pub fn begin(&mut self) -> Option<PendingGeneration> {
        if self.is_generating() {
            return None;
        }

        for slot in &mut self.slots {
            slot.blank();
        }

        self.tickets_issued += 1;
        let pending = PendingGeneration {
            ticket: GenerationTicket(self.tickets_issued),
            word_type: self.word_type,
        };
        self.status = GenerationStatus::Generating(pending);
        Some(pending)
    }

    /// Samples the new batch for a pending ticket and starts a new epoch.
    /// Tickets that are no longer pending produce no plans.
    pub fn complete<R: Rng + ?Sized>(
        &mut self,
        ticket: GenerationTicket,
        pool: &WordPool,
        timing: &RevealTiming,
        rng: &mut R,
    ) -> Vec<RevealPlan> {
        let pending = match self.status {
            GenerationStatus::Generating(pending) if pending.ticket == ticket => pending,
            _ => return Vec::new(),
        };

        let words = pool.sample(pending.word_type, self.word_count, rng);

        self.epochs_issued += 1;
        self.epoch = Epoch::Animating(self.epochs_issued);
        self.status = GenerationStatus::Idle;

        let epoch = self.epoch;
        self.slots
            .iter_mut()
            .zip(words)
            .filter_map(|(slot, word)| slot.assign(epoch, word, timing))
            .collect()
    }
}

impl Default for GenerationController {
    fn default() -> Self {
        Self {
            word_count: MIN_WORD_COUNT,
            word_type: WordType::default(),
            slots: placeholder_slots(MIN_WORD_COUNT),
            epoch: Epoch::NoAnimation,
            epochs_issued: 0,
            tickets_issued: 0,
            status: GenerationStatus::Idle,
        }
    }
}

fn placeholder_slots(count: usize) -> Vec<SlotReveal> {
    (0..count).map(SlotReveal::new).collect()
}
