use eframe::egui::{
    Button, Color32, CornerRadius, InnerResponse, Response, RichText, Stroke, Ui, Vec2,
};

use crate::ui::{UI_CONFIG, UiPalette};

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>, palette: &UiPalette);

    /// Bordered card with a tinted header strip.
    fn card<R>(
        &mut self,
        palette: &UiPalette,
        border: Color32,
        title: RichText,
        header_extra: impl FnOnce(&mut Ui),
        content: impl FnOnce(&mut Ui) -> R,
    ) -> InnerResponse<R>;

    /// Big number, label, and a small note, on a tinted tile.
    fn stat_tile(&mut self, value: &str, label: &str, note: &str, color: Color32, bg: Color32, palette: &UiPalette);

    /// Solid coloured button with white text.
    fn filled_button(&mut self, text: &str, fill: Color32, enabled: bool) -> Response;
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>, palette: &UiPalette) {
        self.label(RichText::new(text).small().color(palette.subdued));
    }

    fn card<R>(
        &mut self,
        palette: &UiPalette,
        border: Color32,
        title: RichText,
        header_extra: impl FnOnce(&mut Ui),
        content: impl FnOnce(&mut Ui) -> R,
    ) -> InnerResponse<R> {
        UI_CONFIG.card_frame(palette, border).show(self, |ui| {
            ui.set_width(ui.available_width());
            UI_CONFIG
                .callout_frame(palette.card_header, palette.card_header)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(title);
                    header_extra(ui);
                });
            ui.add_space(8.0);
            content(ui)
        })
    }

    fn stat_tile(&mut self, value: &str, label: &str, note: &str, color: Color32, bg: Color32, palette: &UiPalette) {
        UI_CONFIG.callout_frame(bg, color.linear_multiply(0.4)).show(self, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(value).size(22.0).strong().color(color));
            ui.label(RichText::new(label).small().color(color));
            ui.label_subdued(note, palette);
        });
    }

    fn filled_button(&mut self, text: &str, fill: Color32, enabled: bool) -> Response {
        let button = Button::new(RichText::new(text).strong().color(Color32::WHITE))
            .fill(fill)
            .stroke(Stroke::NONE)
            .corner_radius(CornerRadius::same(6))
            .min_size(Vec2::new(0.0, 32.0));
        self.add_enabled(enabled, button)
    }
}
