use std::sync::Arc;

use eframe::egui::{
    self,
    Key,
    RichText,
};

use super::{
    definition_panel::{
        definition_panel,
        PanelAction,
    },
    theme::{
        set_theme,
        Theme,
    },
    word_card::word_card,
};
use crate::{
    core::{
        models::step_word_count,
        tasks::{
            Effect,
            TaskManager,
        },
        WizardError,
        WizardSettings,
        WizardState,
        WordType,
        WORD_COUNT_OPTIONS,
    },
    dictionary::DictionaryClient,
};

pub struct WizardApp {
    state: WizardState,
    task_manager: TaskManager,
    theme: Theme,
}

impl WizardApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: WizardSettings,
    ) -> Result<Self, WizardError> {
        let client = DictionaryClient::new(&settings.dictionary)?;
        let mut task_manager = TaskManager::new(Arc::new(client))?;

        let ctx = cc.egui_ctx.clone();
        task_manager.set_waker(move || ctx.request_repaint());

        let app = Self { state: WizardState::new(&settings)?, task_manager, theme: Theme::slate() };

        set_theme(&cc.egui_ctx, &app.theme);
        cc.egui_ctx.set_zoom_factor(cc.egui_ctx.zoom_factor() + 0.2);

        Ok(app)
    }

    fn dispatch(&mut self, effects: Vec<Effect>) {
        if !effects.is_empty() {
            self.task_manager.run(effects);
        }
    }

    fn handle_task_results(&mut self) {
        for result in self.task_manager.poll_results() {
            log::trace!("Task result: {}", result.task_type());
            let effects = self.state.handle_task_result(result);
            self.dispatch(effects);
        }
    }

    fn set_word_count(&mut self, word_count: usize) {
        match self.state.set_word_count(word_count) {
            Ok(effects) => self.dispatch(effects),
            Err(e) => log::warn!("{}", e),
        }
    }

    fn generate(&mut self) {
        let effects = self.state.generate();
        self.dispatch(effects);
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Leave typing keys alone while a text field has focus.
        if ctx.wants_keyboard_input() {
            return;
        }

        let widget_focused = ctx.memory(|m| m.focused().is_some());
        let shortcuts = ctx.input(|i| Shortcuts::from_input(i, widget_focused));

        if let Some(count) = shortcuts.word_count {
            self.set_word_count(count);
        } else if shortcuts.step != 0 {
            let stepped = step_word_count(self.state.word_count(), shortcuts.step);
            if stepped != self.state.word_count() {
                self.set_word_count(stepped);
            }
        }
        if shortcuts.close {
            self.state.close_definition();
        }
        if shortcuts.generate {
            self.generate();
        }
    }

    fn header(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(self.theme.title("Word Wizard").size(40.0));
            ui.label(self.theme.muted("Summon words from the ether!").size(16.0));
            ui.add_space(20.0);
        });
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        let mut count_clicked = None;
        let mut type_clicked = None;
        let mut generate_clicked = false;

        let generating = self.state.is_generating();
        let current_count = self.state.word_count();
        let current_type = self.state.word_type();

        egui::Frame::new()
            .fill(self.theme.card_fill())
            .corner_radius(egui::CornerRadius::same(12))
            .inner_margin(egui::Margin::same(20))
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(self.theme.heading("How many words?"));
                    for count in WORD_COUNT_OPTIONS {
                        let button = egui::Button::new(RichText::new(count.to_string()).strong())
                            .selected(count == current_count)
                            .min_size(egui::vec2(40.0, 40.0));
                        if ui.add(button).clicked() {
                            count_clicked = Some(count);
                        }
                    }

                    ui.separator();

                    let label = if generating { "Summoning..." } else { "✨ Generate" };
                    let button = egui::Button::new(RichText::new(label).strong())
                        .fill(self.theme.pink())
                        .min_size(egui::vec2(150.0, 40.0));
                    if ui.add_enabled(!generating, button).clicked() {
                        generate_clicked = true;
                    }
                    if generating {
                        ui.spinner();
                    }
                });

                ui.separator();

                ui.horizontal_wrapped(|ui| {
                    ui.label(self.theme.heading("What type of word?"));
                    for word_type in WordType::ALL {
                        let button = egui::Button::new(word_type.label())
                            .selected(word_type == current_type)
                            .min_size(egui::vec2(90.0, 32.0));
                        if ui.add(button).clicked() {
                            type_clicked = Some(word_type);
                        }
                    }
                });
            });

        if let Some(count) = count_clicked {
            self.set_word_count(count);
        }
        if let Some(word_type) = type_clicked {
            self.state.set_word_type(word_type);
        }
        if generate_clicked {
            self.generate();
        }
    }

    fn cards(&mut self, ui: &mut egui::Ui) {
        let mut clicked = None;
        let animated = self.state.epoch().is_animating();

        ui.add_space(24.0);
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(16.0, 16.0);
            for (index, slot) in self.state.slots().iter().enumerate() {
                if word_card(ui, slot.state(), animated, &self.theme).clicked() {
                    clicked = Some(index);
                }
            }
        });
        ui.add_space(24.0);

        if let Some(index) = clicked {
            let effects = self.state.click_slot(index);
            self.dispatch(effects);
        }
    }

    fn definition(&mut self, ui: &mut egui::Ui) {
        let action = self
            .state
            .definition()
            .and_then(|definition| definition_panel(ui, definition, &self.theme));

        if action == Some(PanelAction::Close) {
            self.state.close_definition();
        }
    }
}

/// Keys pressed this frame, mapped to app actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Shortcuts {
    generate: bool,
    close: bool,
    word_count: Option<usize>,
    step: isize,
}

impl Shortcuts {
    const NUMBER_KEYS: [Key; 5] = [Key::Num1, Key::Num2, Key::Num3, Key::Num4, Key::Num5];

    /// Enter and Space already activate a focused widget, so they only mean
    /// "generate" when nothing has focus.
    fn from_input(input: &egui::InputState, widget_focused: bool) -> Self {
        let word_count = Self::NUMBER_KEYS
            .iter()
            .zip(WORD_COUNT_OPTIONS)
            .find(|(key, _)| input.key_pressed(**key))
            .map(|(_, count)| count);

        let step = if input.key_pressed(Key::Plus) || input.key_pressed(Key::Equals) {
            1
        } else if input.key_pressed(Key::Minus) {
            -1
        } else {
            0
        };

        Self {
            generate: !widget_focused
                && (input.key_pressed(Key::Enter) || input.key_pressed(Key::Space)),
            close: input.key_pressed(Key::Escape),
            word_count,
            step,
        }
    }
}

impl eframe::App for WizardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_task_results();
        self.handle_shortcuts(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(900.0);
                    self.header(ui);
                    self.controls(ui);
                    self.cards(ui);
                    self.definition(ui);
                });
            });
        });
    }
}
