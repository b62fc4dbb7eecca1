use eframe::egui::{
    self,
    RichText,
};
use egui::{
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

#[derive(Clone)]
pub struct Theme {
    details: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::slate()
    }
}

impl Theme {
    pub fn slate() -> Self {
        Theme { details: ThemeDetails::slate_night() }
    }

    pub fn title(&self, content: &str) -> RichText {
        RichText::new(content).color(self.details.purple).strong()
    }

    pub fn heading(&self, content: &str) -> RichText {
        RichText::new(content).color(self.details.foreground).strong()
    }

    pub fn muted(&self, content: &str) -> RichText {
        RichText::new(content).color(self.details.comment)
    }

    pub fn foreground(&self) -> Color32 {
        self.details.foreground
    }

    pub fn comment(&self) -> Color32 {
        self.details.comment
    }

    pub fn purple(&self) -> Color32 {
        self.details.purple
    }

    pub fn pink(&self) -> Color32 {
        self.details.pink
    }

    pub fn cyan(&self) -> Color32 {
        self.details.cyan
    }

    pub fn yellow(&self) -> Color32 {
        self.details.yellow
    }

    pub fn card_fill(&self) -> Color32 {
        self.details.background_light
    }

    pub fn card_fill_settled(&self) -> Color32 {
        self.details.background_lighter
    }

    pub fn card_stroke(&self) -> Color32 {
        self.details.selection
    }

    pub fn panel_fill(&self) -> Color32 {
        self.details.background_dark
    }
}

#[derive(Clone)]
struct ThemeDetails {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    comment: Color32,
    red: Color32,
    orange: Color32,
    yellow: Color32,
    purple: Color32,
    cyan: Color32,
    pink: Color32,
    background_darker: Color32,
    background_dark: Color32,
    background_light: Color32,
    background_lighter: Color32,
}

impl ThemeDetails {
    // Tailwind slate with purple/pink/cyan accents.
    fn slate_night() -> Self {
        Self {
            background: Color32::from_rgb(15, 23, 42),
            foreground: Color32::from_rgb(226, 232, 240),
            selection: Color32::from_rgb(51, 65, 85),
            comment: Color32::from_rgb(148, 163, 184),
            red: Color32::from_rgb(248, 113, 113),
            orange: Color32::from_rgb(251, 146, 60),
            yellow: Color32::from_rgb(250, 204, 21),
            purple: Color32::from_rgb(192, 132, 252),
            cyan: Color32::from_rgb(103, 232, 249),
            pink: Color32::from_rgb(219, 39, 119),
            background_darker: Color32::from_rgb(2, 6, 23),
            background_dark: Color32::from_rgb(15, 23, 42),
            background_light: Color32::from_rgb(30, 41, 59),
            background_lighter: Color32::from_rgb(51, 65, 85),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    let theme = &theme.details;
    let default = Visuals::dark();

    ctx.set_visuals_of(
        egui::Theme::Dark,
        Visuals {
            dark_mode: true,
            widgets: Widgets {
                noninteractive: WidgetVisuals {
                    bg_fill: theme.background,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke {
                        color: theme.background_light,
                        ..default.widgets.noninteractive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.noninteractive.fg_stroke
                    },
                    ..default.widgets.noninteractive
                },
                inactive: WidgetVisuals {
                    bg_fill: theme.background_light,
                    weak_bg_fill: theme.background_light,
                    bg_stroke: Stroke {
                        color: theme.selection,
                        ..default.widgets.inactive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.inactive.fg_stroke
                    },
                    ..default.widgets.inactive
                },
                hovered: WidgetVisuals {
                    bg_fill: theme.selection,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke { color: theme.purple, ..default.widgets.hovered.bg_stroke },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.hovered.fg_stroke
                    },
                    ..default.widgets.hovered
                },
                active: WidgetVisuals {
                    bg_fill: theme.selection,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke { color: theme.pink, ..default.widgets.active.bg_stroke },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.active.fg_stroke
                    },
                    ..default.widgets.active
                },
                open: WidgetVisuals {
                    bg_fill: theme.background_dark,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke { color: theme.purple, ..default.widgets.open.bg_stroke },
                    fg_stroke: Stroke { color: theme.foreground, ..default.widgets.open.fg_stroke },
                    ..default.widgets.open
                },
            },
            selection: Selection {
                bg_fill: theme.purple.linear_multiply(0.6),
                stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
            },
            hyperlink_color: theme.cyan,
            faint_bg_color: theme.background_darker,
            extreme_bg_color: theme.background_darker,
            code_bg_color: theme.background_dark,
            error_fg_color: theme.red,
            warn_fg_color: theme.orange,
            window_shadow: Shadow { color: theme.background_darker, ..default.window_shadow },
            window_fill: theme.background,
            window_stroke: Stroke { color: theme.background_light, ..default.window_stroke },
            panel_fill: theme.background,
            popup_shadow: Shadow { color: theme.background_dark, ..default.popup_shadow },
            ..default
        },
    );

    ctx.set_theme(egui::Theme::Dark);
}

pub fn blend_colors(color_a: Color32, color_b: Color32, t: f32) -> Color32 {
    let blend_channel = |a: u8, b: u8| ((1.0 - t) * (a as f32) + t * (b as f32)).round() as u8;
    Color32::from_rgba_unmultiplied(
        blend_channel(color_a.r(), color_b.r()),
        blend_channel(color_a.g(), color_b.g()),
        blend_channel(color_a.b(), color_b.b()),
        blend_channel(color_a.a(), color_b.a()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints() {
        let a = Color32::from_rgb(0, 0, 0);
        let b = Color32::from_rgb(200, 100, 50);
        assert_eq!(blend_colors(a, b, 0.0), a);
        assert_eq!(blend_colors(a, b, 1.0), b);
        assert_eq!(blend_colors(a, b, 0.5), Color32::from_rgb(100, 50, 25));
    }
}
