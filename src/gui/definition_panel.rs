use eframe::egui::{
    self,
    RichText,
    Ui,
};

use super::theme::Theme;
use crate::dictionary::{
    fallback_links,
    DefinitionState,
    DefinitionStatus,
    DictionaryEntry,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Close,
}

pub fn definition_panel(ui: &mut Ui, state: &DefinitionState, theme: &Theme) -> Option<PanelAction> {
    let mut action = None;

    egui::Frame::new()
        .fill(theme.panel_fill())
        .stroke(egui::Stroke::new(1.0, theme.card_stroke()))
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::same(20))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                if ui.button("✖").on_hover_text("Close definition").clicked() {
                    action = Some(PanelAction::Close);
                }
            });

            match &state.status {
                DefinitionStatus::Idle | DefinitionStatus::Loading => loading(ui, &state.word, theme),
                DefinitionStatus::Failed(message) => not_found(ui, &state.word, message, theme),
                DefinitionStatus::Loaded(_) => match state.first_entry() {
                    Some(entry) => entry_view(ui, entry, theme),
                    None => {
                        ui.add_space(120.0);
                    }
                },
            }
        });

    action
}

fn loading(ui: &mut Ui, word: &str, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.add(egui::Spinner::new().size(28.0).color(theme.purple()));
        ui.add_space(12.0);
        ui.label(theme.muted(&format!("Looking up \"{}\"...", word)));
        ui.add_space(40.0);
    });
}

fn not_found(ui: &mut Ui, word: &str, message: &str, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(RichText::new("Definition Not Found").size(22.0).strong().color(theme.yellow()));
        ui.add_space(6.0);
        ui.label(message);
        ui.add_space(12.0);
        ui.label(theme.muted("You can try looking it up elsewhere:"));
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            for link in fallback_links(word) {
                ui.hyperlink_to(link.label, link.url);
            }
        });
        ui.add_space(24.0);
    });
}

fn entry_view(ui: &mut Ui, entry: &DictionaryEntry, theme: &Theme) {
    ui.label(RichText::new(&entry.word).size(28.0).strong().color(theme.purple()));
    if let Some(phonetic) = entry.phonetic_text() {
        ui.label(theme.muted(phonetic));
    }
    ui.add_space(10.0);

    egui::ScrollArea::vertical().max_height(360.0).auto_shrink([false, true]).show(ui, |ui| {
        for meaning in &entry.meanings {
            ui.label(
                RichText::new(capitalize(&meaning.part_of_speech))
                    .italics()
                    .strong()
                    .color(theme.cyan()),
            );

            for definition in &meaning.definitions {
                ui.horizontal_wrapped(|ui| {
                    ui.label("•");
                    ui.label(&definition.definition);
                });
                if let Some(example) = &definition.example {
                    ui.indent(("example", &definition.definition), |ui| {
                        ui.label(theme.muted(&format!("e.g., \"{}\"", example)).italics().small());
                    });
                }
            }
            ui.add_space(8.0);
        }
    });
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
