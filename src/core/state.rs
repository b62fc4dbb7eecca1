use rand::{
    rngs::StdRng,
    SeedableRng,
};

use super::{
    generation::GenerationController,
    models::{
        Epoch,
        WordType,
    },
    settings::WizardSettings,
    slot::{
        RevealTiming,
        SlotReveal,
    },
    tasks::{
        Effect,
        TaskResult,
    },
    word_pool::WordPool,
    WizardError,
};
use crate::dictionary::{
    DefinitionLookup,
    DefinitionState,
    SelectOutcome,
};

/// All UI state in one place. Handlers mutate it and return the effects the
/// `TaskManager` has to carry out; none of them perform I/O.
#[derive(Debug)]
pub struct WizardState {
    controller: GenerationController,
    lookup: DefinitionLookup,
    pool: WordPool,
    timing: RevealTiming,
    rng: StdRng,
}

impl WizardState {
    pub fn new(settings: &WizardSettings) -> Result<Self, WizardError> {
        Self::with_parts(
            WordPool::builtin(),
            settings.timing.reveal_timing(),
            settings.initial_word_count,
            settings.initial_word_type,
            StdRng::from_os_rng(),
        )
    }

    pub fn with_parts(
        pool: WordPool,
        timing: RevealTiming,
        word_count: usize,
        word_type: WordType,
        rng: StdRng,
    ) -> Result<Self, WizardError> {
        Ok(Self {
            controller: GenerationController::new(word_count, word_type)?,
            lookup: DefinitionLookup::new(),
            pool,
            timing,
            rng,
        })
    }

    pub fn seeded(pool: WordPool, timing: RevealTiming, seed: u64) -> Self {
        Self {
            controller: GenerationController::default(),
            lookup: DefinitionLookup::new(),
            pool,
            timing,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn slots(&self) -> &[SlotReveal] {
        self.controller.slots()
    }

    pub fn epoch(&self) -> Epoch {
        self.controller.epoch()
    }

    pub fn word_count(&self) -> usize {
        self.controller.word_count()
    }

    pub fn word_type(&self) -> WordType {
        self.controller.word_type()
    }

    pub fn is_generating(&self) -> bool {
        self.controller.is_generating()
    }

    pub fn is_animating(&self) -> bool {
        self.controller.is_animating()
    }

    pub fn controller(&self) -> &GenerationController {
        &self.controller
    }

    pub fn lookup(&self) -> &DefinitionLookup {
        &self.lookup
    }

    pub fn definition(&self) -> Option<&DefinitionState> {
        self.lookup.state()
    }

    pub fn pool(&self) -> &WordPool {
        &self.pool
    }

    pub fn timing(&self) -> &RevealTiming {
        &self.timing
    }

    pub fn set_word_count(&mut self, word_count: usize) -> Result<Vec<Effect>, WizardError> {
        self.controller.set_word_count(word_count)?;
        self.lookup.close();
        log::debug!("Word count set to {}", word_count);
        Ok(vec![Effect::CancelReveals])
    }

    pub fn set_word_type(&mut self, word_type: WordType) {
        self.controller.set_word_type(word_type);
    }

    pub fn generate(&mut self) -> Vec<Effect> {
        let Some(pending) = self.controller.begin() else {
            log::debug!("Generate ignored: a generation is already pending");
            return Vec::new();
        };

        self.lookup.close();
        vec![
            Effect::CancelReveals,
            Effect::ScheduleGeneration { ticket: pending.ticket, delay: self.timing.debounce },
        ]
    }

    /// Opens, replaces or toggles the definition for a settled slot.
    pub fn click_slot(&mut self, index: usize) -> Vec<Effect> {
        let Some(slot) = self.controller.slots().get(index) else {
            return Vec::new();
        };
        if !slot.is_clickable() {
            return Vec::new();
        }

        let word = slot.state().target_word.clone();
        match self.lookup.select(&word) {
            SelectOutcome::Fetch(ticket) => vec![Effect::FetchDefinition(ticket)],
            SelectOutcome::Closed => Vec::new(),
        }
    }

    pub fn close_definition(&mut self) {
        self.lookup.close();
    }

    pub fn handle_task_result(&mut self, result: TaskResult) -> Vec<Effect> {
        match result {
            TaskResult::GenerationDue(ticket) => {
                let plans =
                    self.controller.complete(ticket, &self.pool, &self.timing, &mut self.rng);
                if plans.is_empty() {
                    log::trace!("Dropping stale generation {:?}", ticket);
                    return Vec::new();
                }
                log::info!(
                    "Generated {} {} word(s) for {:?}",
                    plans.len(),
                    self.controller.word_type(),
                    self.controller.epoch()
                );
                vec![Effect::StartReveals(plans)]
            }
            TaskResult::RevealTick { epoch_id, index } => {
                let decoy = self.pool.decoy(&mut self.rng);
                if let Some(slot) = self.controller.slot_mut(index) {
                    slot.tick(epoch_id, decoy);
                }
                Vec::new()
            }
            TaskResult::RevealSettled { epoch_id, index } => {
                if let Some(slot) = self.controller.slot_mut(index) {
                    if slot.settle(epoch_id) {
                        log::trace!("Slot {} settled on \"{}\"", index, slot.state().target_word);
                    }
                }
                Vec::new()
            }
            TaskResult::DefinitionFetched { ticket, result } => {
                self.lookup.apply(&ticket, result);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::models::{
            SlotPhase,
            PLACEHOLDER,
        },
        dictionary::{
            DefinitionStatus,
            DictionaryEntry,
        },
    };

    fn state() -> WizardState {
        WizardState::seeded(WordPool::builtin(), RevealTiming::default(), 17)
    }

    fn due_ticket(effects: &[Effect]) -> TaskResult {
        effects
            .iter()
            .find_map(|effect| match effect {
                Effect::ScheduleGeneration { ticket, .. } => Some(TaskResult::GenerationDue(*ticket)),
                _ => None,
            })
            .expect("generation scheduled")
    }

    /// Generates and settles every slot without timers.
    fn generate_and_settle(state: &mut WizardState) {
        let effects = state.generate();
        let effects = state.handle_task_result(due_ticket(&effects));
        let Some(Effect::StartReveals(plans)) = effects.into_iter().next() else {
            panic!("expected reveal plans");
        };
        for plan in plans {
            state.handle_task_result(TaskResult::RevealSettled {
                epoch_id: plan.epoch_id,
                index: plan.index,
            });
        }
    }

    #[test]
    fn generate_closes_definition_and_schedules_debounce() {
        let mut state = state();
        generate_and_settle(&mut state);
        state.click_slot(0);
        assert!(state.lookup().is_open());

        let effects = state.generate();
        assert!(!state.lookup().is_open());
        assert_eq!(effects[0], Effect::CancelReveals);
        assert!(matches!(
            effects[1],
            Effect::ScheduleGeneration { delay, .. } if delay == RevealTiming::default().debounce
        ));
    }

    #[test]
    fn generate_while_pending_changes_nothing() {
        let mut state = state();
        state.set_word_count(3).unwrap();
        let first = state.generate();
        let slots_before: Vec<_> = state.slots().iter().map(|s| s.state().clone()).collect();
        let epoch_before = state.epoch();

        assert!(state.generate().is_empty());
        let slots_after: Vec<_> = state.slots().iter().map(|s| s.state().clone()).collect();
        assert_eq!(slots_before, slots_after);
        assert_eq!(state.epoch(), epoch_before);

        assert!(!state.handle_task_result(due_ticket(&first)).is_empty());
    }

    #[test]
    fn ticks_show_decoys_from_the_pool() {
        let mut state = state();
        let effects = state.generate();
        state.handle_task_result(due_ticket(&effects));
        let epoch_id = state.epoch().id().unwrap();

        state.handle_task_result(TaskResult::RevealTick { epoch_id, index: 0 });
        let shown = &state.slots()[0].state().displayed_word;
        assert!(state.pool().words(WordType::Any).contains(shown));
        assert_eq!(state.slots()[0].state().phase, SlotPhase::Spinning);
    }

    #[test]
    fn clicking_requires_a_settled_real_word() {
        let mut state = state();
        assert!(state.click_slot(0).is_empty());

        let effects = state.generate();
        state.handle_task_result(due_ticket(&effects));
        assert!(state.click_slot(0).is_empty());
        assert!(state.click_slot(9).is_empty());
    }

    #[test]
    fn click_round_trip_through_lookup() {
        let mut state = state();
        generate_and_settle(&mut state);
        let word = state.slots()[0].state().target_word.clone();

        let effects = state.click_slot(0);
        let Some(Effect::FetchDefinition(ticket)) = effects.into_iter().next() else {
            panic!("expected a fetch");
        };
        assert_eq!(ticket.word, word);
        assert_eq!(state.lookup().status(), &DefinitionStatus::Loading);

        let entry = DictionaryEntry { word: word.clone(), phonetics: vec![], meanings: vec![] };
        state.handle_task_result(TaskResult::DefinitionFetched {
            ticket,
            result: Ok(vec![entry.clone()]),
        });
        assert_eq!(state.lookup().status(), &DefinitionStatus::Loaded(vec![entry]));

        assert!(state.click_slot(0).is_empty());
        assert!(!state.lookup().is_open());
    }

    #[test]
    fn word_count_change_mid_animation_resets_everything() {
        let mut state = state();
        state.set_word_count(3).unwrap();
        let effects = state.generate();
        state.handle_task_result(due_ticket(&effects));
        let epoch_id = state.epoch().id().unwrap();

        let effects = state.set_word_count(5).unwrap();
        assert_eq!(effects, vec![Effect::CancelReveals]);
        assert_eq!(state.epoch(), Epoch::NoAnimation);
        assert_eq!(state.slots().len(), 5);

        state.handle_task_result(TaskResult::RevealSettled { epoch_id, index: 1 });
        state.handle_task_result(TaskResult::RevealTick { epoch_id, index: 2 });
        for slot in state.slots() {
            assert_eq!(slot.state().displayed_word, PLACEHOLDER);
            assert_eq!(slot.state().phase, SlotPhase::Idle);
        }
    }
}
