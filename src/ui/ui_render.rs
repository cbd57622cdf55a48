use eframe::egui::{
    Align, CentralPanel, Color32, Layout, RichText, ScrollArea, TextEdit, TopBottomPanel, Ui,
};
use strum::IntoEnumIterator;

use crate::app::{App, UiEvent};
use crate::config::{MARKET, SIMULATION};
use crate::domain::{Order, OrderKind, OrderSide};
use crate::tour::TourAnchor;
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_plot_view::render_price_chart;
use crate::ui::utils::{format_price, format_quantity, format_usd};
use crate::ui::{AnchorRects, UI_CONFIG, UI_TEXT, UiPalette};
use crate::utils::TimeUtils;

impl App {
    pub(crate) fn render_header(&self, ctx: &eframe::egui::Context, events: &mut Vec<UiEvent>, anchors: &mut AnchorRects) {
        let palette = UI_CONFIG.palette(self.theme.is_dark());
        TopBottomPanel::top("header")
            .frame(UI_CONFIG.page_frame(palette))
            .show(ctx, |ui| {
                let card = UI_CONFIG
                    .callout_frame(palette.card_header, palette.card_border)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            let intro = ui.vertical(|ui| {
                                ui.label(RichText::new(&UI_TEXT.app_title).size(24.0).strong().color(palette.heading));
                                ui.label(RichText::new(&UI_TEXT.app_subtitle).color(palette.label));
                                ui.add_space(4.0);
                                ui.horizontal(|ui| {
                                    ui.label(RichText::new(&UI_TEXT.header_simulation).small().strong().color(palette.danger));
                                    ui.label(RichText::new(&UI_TEXT.header_simulation_body).small().color(palette.danger));
                                });
                                ui.label_subdued(&UI_TEXT.header_disclaimer, palette);
                            });
                            anchors.register(TourAnchor::EducationalPurpose, intro.response.rect);

                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                let balance = UI_CONFIG
                                    .callout_frame(palette.card, palette.card_border)
                                    .show(ui, |ui| {
                                        ui.with_layout(Layout::top_down(Align::Max), |ui| {
                                            ui.label(RichText::new(&UI_TEXT.balance_label).small().color(palette.label));
                                            ui.label(
                                                RichText::new(format_usd(self.engine.state().balance))
                                                    .size(20.0)
                                                    .strong()
                                                    .color(palette.heading),
                                            );
                                            ui.label_subdued(&UI_TEXT.balance_custody, palette);
                                        });
                                    });
                                anchors.register(TourAnchor::Balance, balance.response.rect);

                                let help = ui.filled_button(&UI_TEXT.btn_start_tour, palette.accent, true);
                                anchors.register(TourAnchor::HelpButton, help.rect);
                                if help.clicked() {
                                    events.push(UiEvent::StartTour);
                                }

                                let theme_label = if self.theme.is_dark() {
                                    &UI_TEXT.btn_theme_light
                                } else {
                                    &UI_TEXT.btn_theme_dark
                                };
                                if ui.button(theme_label.as_str()).clicked() {
                                    events.push(UiEvent::ToggleTheme);
                                }
                            });
                        });
                    });
                anchors.register(TourAnchor::Welcome, card.response.rect);
            });
    }

    pub(crate) fn render_body(&mut self, ctx: &eframe::egui::Context, events: &mut Vec<UiEvent>, anchors: &mut AnchorRects) {
        let dark = self.theme.is_dark();
        let palette = UI_CONFIG.palette(dark);
        CentralPanel::default()
            .frame(UI_CONFIG.page_frame(palette))
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    ui.horizontal_top(|ui| {
                        let left_width = (ui.available_width() - UI_CONFIG.trading_panel_width - 16.0).max(240.0);
                        ui.vertical(|ui| {
                            ui.set_width(left_width);
                            self.render_chart_card(ui, palette, anchors);
                            ui.add_space(16.0);
                            self.render_security_card(ui, palette, anchors);
                        });
                        ui.add_space(16.0);
                        ui.vertical(|ui| {
                            ui.set_width(UI_CONFIG.trading_panel_width);
                            self.render_trading_panel(ui, palette, events, anchors);
                            ui.add_space(16.0);
                            self.render_recent_orders(ui, palette, anchors);
                        });
                    });
                });
            });
    }

    fn render_chart_card(&self, ui: &mut Ui, palette: &UiPalette, anchors: &mut AnchorRects) {
        let title = RichText::new(&UI_TEXT.chart_pair).size(18.0).strong().color(palette.heading);
        let card = ui.card(
            palette,
            palette.card_border,
            title,
            |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(format_price(MARKET.quoted_price)).size(22.0).strong().color(palette.buy));
                    ui.label(RichText::new(format!("{:+.2}%", MARKET.change_24h_pct)).small().color(palette.buy));
                });
                ui.label_subdued(&UI_TEXT.chart_feed_note, palette);
            },
            |ui| {
                render_price_chart(ui, &self.candles, palette);
            },
        );
        anchors.register(TourAnchor::PriceChart, card.response.rect);
    }

    fn render_security_card(&self, ui: &mut Ui, palette: &UiPalette, anchors: &mut AnchorRects) {
        let title = RichText::new(&UI_TEXT.sec_title).strong().color(palette.heading);
        let border = palette.danger.linear_multiply(0.4);
        let card = ui.card(palette, border, title, |_| {}, |ui| {
            UI_CONFIG
                .callout_frame(palette.warning_bg, palette.warning_text.linear_multiply(0.3))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(&UI_TEXT.sec_alert_title).strong().color(palette.warning_text));
                    ui.label(RichText::new(&UI_TEXT.sec_alert_body).small().color(palette.warning_text));
                    ui.add_space(4.0);
                    ui.label(RichText::new(&UI_TEXT.sec_alert_purpose).small().strong().color(palette.caution));
                });
            ui.add_space(8.0);
            ui.columns(2, |cols| {
                cols[0].stat_tile(
                    &format_usd(SIMULATION.starting_balance),
                    &UI_TEXT.sec_at_risk,
                    &UI_TEXT.sec_at_risk_note,
                    palette.danger,
                    palette.danger_bg,
                    palette,
                );
                cols[1].stat_tile(
                    &UI_TEXT.sec_drain_speed,
                    &UI_TEXT.sec_drain_speed_label,
                    &UI_TEXT.sec_drain_speed_note,
                    palette.caution,
                    palette.caution_bg,
                    palette,
                );
            });
        });
        anchors.register(TourAnchor::SecurityWarning, card.response.rect);
    }

    fn render_trading_panel(&mut self, ui: &mut Ui, palette: &UiPalette, events: &mut Vec<UiEvent>, anchors: &mut AnchorRects) {
        let title = RichText::new(&UI_TEXT.tp_title).strong().color(palette.heading);
        let form = &mut self.form;
        ui.card(
            palette,
            palette.card_border,
            title,
            |ui| {
                ui.label(RichText::new(&UI_TEXT.tp_warning).small().color(palette.danger));
            },
            |ui| {
                let tabs = ui.horizontal(|ui| {
                    for kind in OrderKind::iter() {
                        let label = match kind {
                            OrderKind::Market => &UI_TEXT.tp_tab_market,
                            OrderKind::Limit => &UI_TEXT.tp_tab_limit,
                        };
                        let selected = form.active_tab == kind;
                        let text = if selected {
                            RichText::new(label).strong().color(palette.accent)
                        } else {
                            RichText::new(label).color(palette.subdued)
                        };
                        if ui.selectable_label(selected, text).clicked() {
                            form.active_tab = kind;
                        }
                    }
                });
                anchors.register(TourAnchor::TradingTabs, tabs.response.rect);
                ui.add_space(8.0);

                if form.active_tab == OrderKind::Limit {
                    ui.label(RichText::new(&UI_TEXT.tp_price_label).small().strong().color(palette.label));
                    ui.add(
                        TextEdit::singleline(&mut form.limit_price)
                            .hint_text(UI_TEXT.tp_price_hint.as_str())
                            .desired_width(f32::INFINITY),
                    );
                    ui.add_space(6.0);
                }

                let quantity = ui.vertical(|ui| {
                    ui.label(RichText::new(&UI_TEXT.tp_quantity_label).small().strong().color(palette.label));
                    ui.add(
                        TextEdit::singleline(&mut form.quantity)
                            .hint_text(UI_TEXT.tp_quantity_hint.as_str())
                            .desired_width(f32::INFINITY),
                    );
                    if form.active_tab == OrderKind::Market {
                        ui.label(RichText::new(&UI_TEXT.tp_quantity_note).small().color(palette.caution));
                    }
                });
                anchors.register(TourAnchor::QuantityInput, quantity.response.rect);
                ui.add_space(8.0);

                let enabled = form.can_submit();
                let buttons = ui.columns(2, |cols| {
                    let sides = [(OrderSide::Buy, palette.buy), (OrderSide::Sell, palette.sell)];
                    let mut rect = cols[0].min_rect();
                    for (col, (side, fill)) in cols.iter_mut().zip(sides) {
                        let response = col.filled_button(&UI_TEXT.tp_trigger, fill, enabled);
                        rect = rect.union(response.rect);
                        if response.clicked() {
                            events.push(UiEvent::SubmitOrder { side });
                        }
                    }
                    rect
                });
                anchors.register(TourAnchor::TradeButtons, buttons);
            },
        );
    }

    fn render_recent_orders(&self, ui: &mut Ui, palette: &UiPalette, anchors: &mut AnchorRects) {
        let title = RichText::new(&UI_TEXT.ro_title).small().strong().color(palette.heading);
        let card = ui.card(palette, palette.card_border, title, |_| {}, |ui| {
            let history = self.engine.history();
            if history.is_empty() {
                ui.label(RichText::new(&UI_TEXT.ro_empty).small().color(palette.subdued));
                return;
            }
            ScrollArea::vertical()
                .id_salt("recent_orders")
                .max_height(160.0)
                .show(ui, |ui| {
                    for order in history.iter() {
                        render_order_row(ui, order, palette);
                        ui.add_space(4.0);
                    }
                });
        });
        anchors.register(TourAnchor::RecentOrders, card.response.rect);
    }
}

fn render_order_row(ui: &mut Ui, order: &Order, palette: &UiPalette) {
    let side_color = match order.side {
        OrderSide::Buy => palette.buy,
        OrderSide::Sell => palette.sell,
    };
    let row_bg = if palette.card == Color32::WHITE {
        Color32::from_gray(248)
    } else {
        palette.card_header
    };
    UI_CONFIG
        .callout_frame(row_bg, palette.danger.linear_multiply(0.6))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(order.headline()).small().strong().color(side_color));
                ui.label(
                    RichText::new(order.created_at.format(TimeUtils::ORDER_TIME_FORMAT).to_string())
                        .small()
                        .color(palette.subdued),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("{} {}", format_quantity(order.quantity), MARKET.base_asset))
                            .small()
                            .color(palette.label),
                    );
                });
            });
            if let Some(price) = order.price {
                ui.label(RichText::new(format!("@ {}", format_price(price))).small().color(palette.label));
            }
            ui.label(RichText::new(&UI_TEXT.ro_triggered).small().color(palette.danger));
        });
}
