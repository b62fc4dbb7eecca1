use std::time::Duration;

use crate::{
    core::{
        generation::GenerationTicket,
        slot::RevealPlan,
    },
    dictionary::{
        DictionaryEntry,
        LookupTicket,
    },
};

/// Work requested by a state transition, carried out by the `TaskManager`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Tear down the debounce timer and every running slot animation.
    CancelReveals,
    ScheduleGeneration { ticket: GenerationTicket, delay: Duration },
    StartReveals(Vec<RevealPlan>),
    FetchDefinition(LookupTicket),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskResult {
    GenerationDue(GenerationTicket),
    RevealTick { epoch_id: u64, index: usize },
    RevealSettled { epoch_id: u64, index: usize },
    DefinitionFetched { ticket: LookupTicket, result: Result<Vec<DictionaryEntry>, String> },
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::GenerationDue(_) => "generation_due",
            TaskResult::RevealTick { .. } => "reveal_tick",
            TaskResult::RevealSettled { .. } => "reveal_settled",
            TaskResult::DefinitionFetched { .. } => "definition_fetched",
        }
    }
}
