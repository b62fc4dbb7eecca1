use eframe::egui;
use word_wizard::{
    core::utils::init_logging,
    gui::WizardApp,
    WizardSettings,
};

fn main() -> eframe::Result {
    init_logging();

    let settings = WizardSettings::load();
    log::info!("Starting with {:?}", settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Word Wizard")
            .with_inner_size([960.0, 760.0])
            .with_min_inner_size([520.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Word Wizard",
        options,
        Box::new(|cc| Ok(Box::new(WizardApp::new(cc, settings)?))),
    )
}
