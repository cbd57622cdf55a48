use std::sync::LazyLock;

use crate::config::{MARKET, SIMULATION};
use crate::utils::format_delay;

pub const ICON_LOCK_OPEN: &str = "🔓";
pub const ICON_WARNING: &str = "⚠️";
pub const ICON_SOS: &str = "🆘";
pub const ICON_BANK: &str = "🏦";
pub const ICON_CHART: &str = "📊";
pub const ICON_LOCK: &str = "🔒";
pub const ICON_SIREN: &str = "🚨";
pub const ICON_GRAD_CAP: &str = "🎓";
pub const ICON_BULB: &str = "💡";
pub const ICON_BOLT: &str = "⚡";
pub const ICON_BOOM: &str = "💥";
pub const ICON_MOON: &str = "🌙";
pub const ICON_SUN: &str = "☀";

pub struct UiText {
    // --- Header ---
    pub app_title: String,
    pub app_subtitle: String,
    pub header_simulation: String,
    pub header_simulation_body: String,
    pub header_disclaimer: String,
    pub btn_start_tour: String,
    pub btn_theme_dark: String,
    pub btn_theme_light: String,
    pub balance_label: String,
    pub balance_custody: String,

    // --- Chart card ---
    pub chart_pair: String,
    pub chart_feed_note: String,

    // --- Security card ---
    pub sec_title: String,
    pub sec_alert_title: String,
    pub sec_alert_body: String,
    pub sec_alert_purpose: String,
    pub sec_at_risk: String,
    pub sec_at_risk_note: String,
    pub sec_drain_speed: String,
    pub sec_drain_speed_label: String,
    pub sec_drain_speed_note: String,

    // --- Trading panel ---
    pub tp_title: String,
    pub tp_warning: String,
    pub tp_tab_market: String,
    pub tp_tab_limit: String,
    pub tp_price_label: String,
    pub tp_price_hint: String,
    pub tp_quantity_label: String,
    pub tp_quantity_hint: String,
    pub tp_quantity_note: String,
    pub tp_trigger: String,

    // --- Recent orders ---
    pub ro_title: String,
    pub ro_empty: String,
    pub ro_triggered: String,

    // --- Popups ---
    pub pop_breach_title: String,
    pub pop_breach_body: String,
    pub pop_breach_draining: String,
    pub pop_breach_stolen: String,
    pub pop_funds_title: String,
    pub pop_funds_body: String,
    pub modal_title: String,
    pub modal_body: String,
    pub modal_lesson: String,
    pub modal_try_again: String,
    pub modal_restart_tour: String,
}

// THE SINGLETON
pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "CryptoExchange Pro".to_string(),
    app_subtitle: "Professional Trading Platform".to_string(),
    header_simulation: format!("{} Security Simulation:", ICON_WARNING),
    header_simulation_body: "Experience CEX vulnerability".to_string(),
    header_disclaimer: "Educational demonstration of exchange security risks".to_string(),
    btn_start_tour: format!("{} Start Tour", ICON_SOS),
    btn_theme_dark: format!("{} Dark", ICON_MOON),
    btn_theme_light: format!("{} Light", ICON_SUN),
    balance_label: "Total Balance".to_string(),
    balance_custody: format!("{} Held by Exchange", ICON_BANK),

    chart_pair: MARKET.pair.to_string(),
    chart_feed_note: format!(
        "{} Live from exchange servers • {} Seemingly secure...",
        ICON_CHART, ICON_LOCK
    ),

    sec_title: format!("{} Security Risk Simulation", ICON_SIREN),
    sec_alert_title: "Educational Demo Alert".to_string(),
    sec_alert_body: "This simulation demonstrates how centralized exchanges can be compromised. \
        Any trading action will trigger a security breach scenario showing fund drainage."
        .to_string(),
    sec_alert_purpose: format!(
        "{} Purpose: Learn about CEX risks • {} Takeaway: Self-custody importance",
        ICON_GRAD_CAP, ICON_BULB
    ),
    sec_at_risk: "At Risk".to_string(),
    sec_at_risk_note: "Your exchange balance".to_string(),
    sec_drain_speed: format_delay(SIMULATION.drain_period),
    sec_drain_speed_label: "Drain Speed".to_string(),
    sec_drain_speed_note: format!(
        "${}K every half second",
        SIMULATION.drain_step / 1000
    ),

    tp_title: "Trading Panel".to_string(),
    tp_warning: format!("{} Any order triggers security breach simulation", ICON_WARNING),
    tp_tab_market: "Market".to_string(),
    tp_tab_limit: "Limit".to_string(),
    tp_price_label: format!("Price ({})", MARKET.quote_asset),
    tp_price_hint: "85.00".to_string(),
    tp_quantity_label: format!("Quantity ({})", MARKET.base_asset),
    tp_quantity_hint: "Enter amount (e.g., 10)".to_string(),
    tp_quantity_note: format!(
        "{} Entering any amount will trigger the breach simulation",
        ICON_BOLT
    ),
    tp_trigger: format!("{} Trigger Breach", ICON_LOCK_OPEN),

    ro_title: "Recent Orders".to_string(),
    ro_empty: "No recent orders".to_string(),
    ro_triggered: format!("{} Triggered security breach", ICON_WARNING),

    pop_breach_title: "Security Breach Detected".to_string(),
    pop_breach_body: "Unauthorized access detected...".to_string(),
    pop_breach_draining: "Funds draining:".to_string(),
    pop_breach_stolen: "stolen".to_string(),
    pop_funds_title: "All Funds Drained".to_string(),
    pop_funds_body: "Exchange completely compromised".to_string(),
    modal_title: "Exchange Hacked!".to_string(),
    modal_body: "Your exchange has been compromised. All $50,000 has been drained. \
        This demonstrates why self-custody is crucial."
        .to_string(),
    modal_lesson: format!(
        "{} Learning Moment: This simulation shows real CEX risks. \
        Always use hardware wallets for large amounts!",
        ICON_GRAD_CAP
    ),
    modal_try_again: "Try Again".to_string(),
    modal_restart_tour: format!("{} Restart Tour", ICON_SOS),
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn security_card_numbers_follow_the_simulation_config() {
        assert_eq!(UI_TEXT.sec_drain_speed, "0.5s");
        assert_eq!(UI_TEXT.sec_drain_speed_note, "$10K every half second");
        assert_eq!(UI_TEXT.tp_quantity_label, "Quantity (SOL)");
    }
}
