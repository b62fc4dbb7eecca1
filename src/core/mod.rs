pub mod errors;
pub mod generation;
pub mod models;
pub mod settings;
pub mod slot;
pub mod state;
pub mod tasks;
pub mod utils;
pub mod word_pool;

pub use errors::WizardError;
pub use generation::{
    GenerationController,
    GenerationStatus,
    GenerationTicket,
};
pub use models::{
    Epoch,
    SlotPhase,
    SlotState,
    WordType,
    PLACEHOLDER,
    WORD_COUNT_OPTIONS,
};
pub use settings::WizardSettings;
pub use slot::{
    RevealPlan,
    RevealTiming,
    SlotReveal,
};
pub use state::WizardState;
pub use word_pool::WordPool;
