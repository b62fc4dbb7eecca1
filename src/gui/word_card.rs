use eframe::egui::{
    self,
    Align2,
    CornerRadius,
    CursorIcon,
    FontId,
    Response,
    Sense,
    Stroke,
    StrokeKind,
    Ui,
};

use super::theme::{
    blend_colors,
    Theme,
};
use crate::core::{
    SlotPhase,
    SlotState,
};

const CARD_SIZE: egui::Vec2 = egui::vec2(170.0, 96.0);

/// Draws one slot. Only settled real words sense clicks.
pub fn word_card(ui: &mut Ui, slot: &SlotState, animated_epoch: bool, theme: &Theme) -> Response {
    let clickable = slot.is_clickable();
    let sense = if clickable { Sense::click() } else { Sense::hover() };
    let (rect, response) = ui.allocate_exact_size(CARD_SIZE, sense);

    if ui.is_rect_visible(rect) {
        let (fill, stroke, text) = match slot.phase {
            SlotPhase::Spinning => (
                theme.card_fill(),
                theme.card_stroke(),
                blend_colors(theme.comment(), theme.card_fill(), 0.3),
            ),
            SlotPhase::Settled if animated_epoch => {
                (theme.card_fill_settled(), theme.purple().linear_multiply(0.5), theme.foreground())
            }
            SlotPhase::Settled | SlotPhase::Idle => (
                theme.card_fill(),
                theme.card_stroke(),
                theme.foreground().linear_multiply(0.6),
            ),
        };

        let stroke = if clickable && response.hovered() { theme.purple() } else { stroke };

        let painter = ui.painter();
        painter.rect(
            rect,
            CornerRadius::same(8),
            fill,
            Stroke::new(1.0, stroke),
            StrokeKind::Inside,
        );
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            &slot.displayed_word,
            FontId::proportional(20.0),
            text,
        );
    }

    if clickable {
        response.on_hover_cursor(CursorIcon::PointingHand)
    } else {
        response
    }
}
