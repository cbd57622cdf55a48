use std::collections::HashMap;

use eframe::egui::{
    Align, Align2, Color32, Context, CornerRadius, Frame, Id, LayerId, Layout, Margin, Order, Pos2, Rect,
    RichText, Stroke, StrokeKind, Ui, Vec2, Window,
};

use crate::app::UiEvent;
use crate::config::TOUR;
use crate::tour::{Emphasis, Placement, TOUR_LOCALE, TourAction, TourAnchor, TourController, Walkthrough};

const OVERLAY_COLOR: Color32 = Color32::from_rgba_premultiplied(71, 22, 46, 77);
const TOOLTIP_FILL: Color32 = Color32::from_rgb(0xec, 0x48, 0x99);
const SPOTLIGHT_PAD: f32 = 6.0;
const TOOLTIP_GAP: f32 = 12.0;
/// Rough tooltip height for choosing above/below before it has been laid out.
const TOOLTIP_EST_HEIGHT: f32 = 300.0;

/// Screen rects of the tour targets, refreshed every frame by the panels.
#[derive(Debug, Default)]
pub struct AnchorRects {
    rects: HashMap<TourAnchor, Rect>,
}

impl AnchorRects {
    pub fn register(&mut self, anchor: TourAnchor, rect: Rect) {
        self.rects.insert(anchor, rect);
    }

    pub fn get(&self, anchor: TourAnchor) -> Option<Rect> {
        self.rects.get(&anchor).copied()
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

/// Below the target if it fits, else above, else beside it. Always kept on screen.
pub fn tooltip_pos(target: Rect, screen: Rect, width: f32) -> Pos2 {
    let min_x = screen.left() + TOOLTIP_GAP;
    let x = (target.center().x - width / 2.0).clamp(min_x, (screen.right() - width - TOOLTIP_GAP).max(min_x));

    if target.bottom() + TOOLTIP_GAP + TOOLTIP_EST_HEIGHT <= screen.bottom() {
        Pos2::new(x, target.bottom() + TOOLTIP_GAP)
    } else if target.top() - TOOLTIP_GAP - TOOLTIP_EST_HEIGHT >= screen.top() {
        Pos2::new(x, target.top() - TOOLTIP_GAP - TOOLTIP_EST_HEIGHT)
    } else {
        let side_x = if target.left() - TOOLTIP_GAP - width >= screen.left() {
            target.left() - TOOLTIP_GAP - width
        } else {
            (target.right() + TOOLTIP_GAP).min(screen.right() - width)
        };
        let min_y = screen.top() + TOOLTIP_GAP;
        let y = target.top().clamp(min_y, (screen.bottom() - TOOLTIP_EST_HEIGHT).max(min_y));
        Pos2::new(side_x, y)
    }
}

/// Draws the active step. Button presses come back as `TourStatusChanged`
/// events once the walkthrough reaches a terminal status.
pub fn render_tour_overlay(
    ctx: &Context,
    tour: &TourController,
    walkthrough: &mut Walkthrough,
    anchors: &AnchorRects,
    events: &mut Vec<UiEvent>,
) {
    if !tour.is_running() {
        return;
    }
    walkthrough.sync(tour.instance_key());

    let steps = tour.steps();
    let Some(step) = steps.get(walkthrough.index()) else {
        return;
    };
    let screen = ctx.screen_rect();
    let target = match step.placement {
        Placement::Center => None,
        Placement::Auto => anchors.get(step.target),
    };

    paint_overlay(ctx, screen, target.map(|r| r.expand(SPOTLIGHT_PAD)), step.disable_beacon);

    let window = Window::new("tour_step")
        .id(Id::new(("tour_step", tour.instance_key(), walkthrough.index())))
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .order(Order::Tooltip)
        .min_width(TOUR.width)
        .max_width(TOUR.width)
        .frame(Frame {
            fill: TOOLTIP_FILL,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(16),
            corner_radius: CornerRadius::same(8),
            ..Default::default()
        });
    let window = match target {
        Some(rect) => window.fixed_pos(tooltip_pos(rect.expand(SPOTLIGHT_PAD), screen, TOUR.width)),
        None => window.anchor(Align2::CENTER_CENTER, Vec2::ZERO),
    };

    let mut action = None;
    window.show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(step.title).strong().size(16.0).color(Color32::WHITE));
            ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                if ui.small_button(RichText::new(TOUR_LOCALE.close).color(Color32::WHITE)).clicked() {
                    action = Some(TourAction::Close);
                }
            });
        });
        ui.add_space(6.0);
        ui.label(RichText::new(step.body).color(Color32::WHITE));

        if !step.points.is_empty() {
            ui.add_space(6.0);
            for (icon, label, text) in step.points {
                render_point(ui, icon, label, text);
            }
        }

        if let Some((footer, emphasis)) = step.footer {
            ui.add_space(6.0);
            Frame {
                fill: Color32::from_white_alpha(40),
                inner_margin: Margin::same(8),
                corner_radius: CornerRadius::same(6),
                ..Default::default()
            }
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(footer).small().strong().color(emphasis_color(emphasis)));
            });
        }

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if TOUR.show_skip_button && ui.button(TOUR_LOCALE.skip).clicked() {
                action = Some(TourAction::Skip);
            }
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let primary = walkthrough.primary_label(steps.len(), TOUR.show_progress);
                if ui.button(RichText::new(primary).strong()).clicked() {
                    action = Some(TourAction::Next);
                }
                if walkthrough.index() > 0 && ui.button(TOUR_LOCALE.back).clicked() {
                    action = Some(TourAction::Back);
                }
            });
        });
    });

    if let Some(action) = action {
        if let Some(status) = walkthrough.apply(action, steps.len()) {
            events.push(UiEvent::TourStatusChanged { status });
        }
    }
}

fn render_point(ui: &mut Ui, icon: &str, label: &str, text: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new(icon).color(Color32::WHITE));
        if label.is_empty() {
            ui.label(RichText::new(text).small().color(Color32::WHITE));
        } else {
            ui.label(RichText::new(format!("{}:", label)).small().strong().color(Color32::WHITE));
            ui.label(RichText::new(text).small().color(Color32::WHITE));
        }
    });
}

/// Footers sit on the pink tooltip, so they use the light tints.
fn emphasis_color(emphasis: Emphasis) -> Color32 {
    match emphasis {
        Emphasis::Info => Color32::WHITE,
        Emphasis::Caution => Color32::from_rgb(0xfe, 0xf0, 0x8a),
        Emphasis::Danger => Color32::from_rgb(0xfe, 0xe2, 0xe2),
        Emphasis::Success => Color32::from_rgb(0xbb, 0xf7, 0xd0),
    }
}

/// Tinted backdrop with a clear cut-out and pink border around the target.
fn paint_overlay(ctx: &Context, screen: Rect, spotlight: Option<Rect>, disable_beacon: bool) {
    let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("tour_overlay")));
    let Some(hole) = spotlight.map(|r| r.intersect(screen)) else {
        painter.rect_filled(screen, CornerRadius::ZERO, OVERLAY_COLOR);
        return;
    };

    let bands = [
        Rect::from_min_max(screen.min, Pos2::new(screen.max.x, hole.top())),
        Rect::from_min_max(Pos2::new(screen.min.x, hole.bottom()), screen.max),
        Rect::from_min_max(Pos2::new(screen.min.x, hole.top()), Pos2::new(hole.left(), hole.bottom())),
        Rect::from_min_max(Pos2::new(hole.right(), hole.top()), Pos2::new(screen.max.x, hole.bottom())),
    ];
    for band in bands.into_iter().filter(|b| b.is_positive()) {
        painter.rect_filled(band, CornerRadius::ZERO, OVERLAY_COLOR);
    }
    painter.rect(
        hole,
        CornerRadius::same(6),
        Color32::TRANSPARENT,
        Stroke::new(2.0, TOOLTIP_FILL),
        StrokeKind::Outside,
    );

    if !disable_beacon {
        painter.circle_filled(hole.right_top(), 5.0, TOOLTIP_FILL);
        painter.circle_stroke(hole.right_top(), 9.0, Stroke::new(1.5, TOOLTIP_FILL.gamma_multiply(0.5)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::new(1400.0, 900.0))
    }

    #[test]
    fn prefers_below_the_target() {
        let target = Rect::from_min_size(Pos2::new(600.0, 100.0), Vec2::new(200.0, 80.0));
        let pos = tooltip_pos(target, screen(), 380.0);
        assert_eq!(pos.y, 180.0 + TOOLTIP_GAP);
        assert_eq!(pos.x, 700.0 - 190.0);
    }

    #[test]
    fn flips_above_near_the_bottom() {
        let target = Rect::from_min_size(Pos2::new(600.0, 700.0), Vec2::new(200.0, 80.0));
        let pos = tooltip_pos(target, screen(), 380.0);
        assert_eq!(pos.y, 700.0 - TOOLTIP_GAP - TOOLTIP_EST_HEIGHT);
    }

    #[test]
    fn stays_on_screen_horizontally() {
        let target = Rect::from_min_size(Pos2::new(1350.0, 100.0), Vec2::new(40.0, 30.0));
        let pos = tooltip_pos(target, screen(), 380.0);
        assert!(pos.x + 380.0 <= 1400.0);

        let target = Rect::from_min_size(Pos2::new(0.0, 100.0), Vec2::new(40.0, 30.0));
        let pos = tooltip_pos(target, screen(), 380.0);
        assert!(pos.x >= 0.0);
    }

    #[test]
    fn tall_targets_go_beside() {
        let target = Rect::from_min_size(Pos2::new(900.0, 50.0), Vec2::new(400.0, 800.0));
        let pos = tooltip_pos(target, screen(), 380.0);
        assert_eq!(pos.x, 900.0 - TOOLTIP_GAP - 380.0);
    }

    #[test]
    fn anchors_keep_the_latest_rect() {
        let mut anchors = AnchorRects::default();
        assert!(anchors.is_empty());
        let a = Rect::from_min_size(Pos2::ZERO, Vec2::splat(10.0));
        let b = Rect::from_min_size(Pos2::new(5.0, 5.0), Vec2::splat(10.0));
        anchors.register(TourAnchor::Balance, a);
        anchors.register(TourAnchor::Balance, b);
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors.get(TourAnchor::Balance), Some(b));
        assert_eq!(anchors.get(TourAnchor::RecentOrders), None);
    }
}
