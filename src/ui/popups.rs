use eframe::egui::{
    Align, Align2, Area, Color32, Context, CornerRadius, Frame, Id, LayerId, Layout, Margin,
    Order, ProgressBar, RichText, Shadow, Stroke, Vec2, Window,
};

use crate::app::UiEvent;
use crate::models::{BreachProgress, PopupSet};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_text::{ICON_BOOM, ICON_LOCK_OPEN, ICON_WARNING};
use crate::ui::utils::format_usd;
use crate::ui::{UI_CONFIG, UI_TEXT, UiPalette};

const POPUP_MARGIN: f32 = 16.0;
const MODAL_DIM: Color32 = Color32::from_black_alpha(128);

fn popup_frame(fill: Color32, border: Color32) -> Frame {
    Frame {
        fill,
        stroke: Stroke::new(1.0, border),
        inner_margin: Margin::same(14),
        corner_radius: CornerRadius::same(UI_CONFIG.card_radius),
        shadow: Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_black_alpha(40),
        },
        ..Default::default()
    }
}

/// Everything the breach simulation floats over the dashboard.
pub fn render_popups(ctx: &Context, popups: &PopupSet, palette: &UiPalette, events: &mut Vec<UiEvent>) {
    if let Some(progress) = popups.breach_progress {
        render_breach_progress(ctx, progress, palette);
    }
    if popups.insufficient_funds {
        render_insufficient_funds(ctx, palette);
    }
    if popups.drained_modal {
        render_drained_modal(ctx, palette, events);
    }
}

fn render_breach_progress(ctx: &Context, progress: BreachProgress, palette: &UiPalette) {
    Area::new(Id::new("breach_progress"))
        .order(Order::Foreground)
        .anchor(Align2::CENTER_TOP, Vec2::new(0.0, POPUP_MARGIN))
        .interactable(false)
        .show(ctx, |ui| {
            popup_frame(palette.danger_bg, palette.danger).show(ui, |ui| {
                ui.set_width(UI_CONFIG.popup_width);
                ui.horizontal_top(|ui| {
                    ui.label(RichText::new(ICON_LOCK_OPEN).color(palette.danger));
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&UI_TEXT.pop_breach_title).strong().color(palette.danger));
                        ui.label(RichText::new(&UI_TEXT.pop_breach_body).small().color(palette.danger));
                        ui.add_space(6.0);
                        ui.add(
                            ProgressBar::new(progress.fraction())
                                .desired_height(8.0)
                                .fill(palette.danger)
                                .corner_radius(CornerRadius::same(4)),
                        );
                        ui.label(
                            RichText::new(format!(
                                "{} {} {}",
                                UI_TEXT.pop_breach_draining,
                                format_usd(progress.stolen),
                                UI_TEXT.pop_breach_stolen
                            ))
                            .small()
                            .color(palette.danger),
                        );
                    });
                });
            });
        });
}

fn render_insufficient_funds(ctx: &Context, palette: &UiPalette) {
    Area::new(Id::new("insufficient_funds"))
        .order(Order::Foreground)
        .anchor(Align2::RIGHT_TOP, Vec2::new(-POPUP_MARGIN, POPUP_MARGIN))
        .interactable(false)
        .show(ctx, |ui| {
            popup_frame(palette.caution_bg, palette.caution).show(ui, |ui| {
                ui.set_width(UI_CONFIG.notice_width);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(ICON_WARNING).color(palette.caution));
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&UI_TEXT.pop_funds_title).strong().color(palette.caution));
                        ui.label(RichText::new(&UI_TEXT.pop_funds_body).small().color(palette.caution));
                    });
                });
            });
        });
}

fn render_drained_modal(ctx: &Context, palette: &UiPalette, events: &mut Vec<UiEvent>) {
    let screen = ctx.screen_rect();
    ctx.layer_painter(LayerId::new(Order::Middle, Id::new("drained_modal_dim")))
        .rect_filled(screen, CornerRadius::ZERO, MODAL_DIM);

    Window::new("drained_modal")
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .order(Order::Foreground)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .min_width(UI_CONFIG.modal_width)
        .max_width(UI_CONFIG.modal_width)
        .frame(popup_frame(palette.card, palette.danger))
        .show(ctx, |ui| {
            ui.with_layout(Layout::top_down(Align::Center), |ui| {
                ui.label(RichText::new(ICON_BOOM).size(36.0));
                ui.add_space(6.0);
                ui.label(RichText::new(&UI_TEXT.modal_title).size(20.0).strong().color(palette.danger));
                ui.add_space(4.0);
                ui.label(RichText::new(&UI_TEXT.modal_body).color(palette.label));
            });
            ui.add_space(10.0);
            UI_CONFIG
                .callout_frame(palette.warning_bg, palette.warning_text.linear_multiply(0.3))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(&UI_TEXT.modal_lesson).small().color(palette.warning_text));
                });
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                let restart_width = 140.0;
                let try_width = (ui.available_width() - restart_width - ui.spacing().item_spacing.x).max(80.0);
                if ui
                    .add_sized([try_width, 32.0], |ui: &mut eframe::egui::Ui| {
                        ui.filled_button(&UI_TEXT.modal_try_again, palette.info, true)
                    })
                    .clicked()
                {
                    events.push(UiEvent::TryAgain);
                }
                if ui.filled_button(&UI_TEXT.modal_restart_tour, palette.accent, true).clicked() {
                    events.push(UiEvent::StartTour);
                }
            });
        });
}
