pub mod core;
pub mod dictionary;
pub mod gui;
pub mod persistence;

pub use crate::core::{
    WizardError,
    WizardSettings,
    WizardState,
};
