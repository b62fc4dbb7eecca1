pub mod app;
pub mod definition_panel;
pub mod theme;
pub mod word_card;

pub use app::WizardApp;
