//! Breach simulation constants.
use std::time::Duration;

/// Timing and money knobs for one simulated session.
pub struct SimulationConfig {
    /// Balance shown when the page first loads.
    pub starting_balance: i64,
    /// Amount removed on every drain tick.
    pub drain_step: i64,
    /// Wall-clock period between drain ticks.
    pub drain_period: Duration,
    /// Pause between balance hitting zero and the final modal.
    pub settle_delay: Duration,
    /// How long the insufficient-funds notice stays up.
    pub notice_duration: Duration,
    /// Most recent orders kept in the history panel.
    pub history_capacity: usize,
    /// Divisor used by the breach progress bar (`100 - balance / divisor`).
    /// Tied to a 50_000 starting balance.
    pub progress_divisor: f64,
}

/// The instrument the fake exchange pretends to quote.
pub struct MarketConfig {
    pub pair: &'static str,
    pub base_asset: &'static str,
    pub quote_asset: &'static str,
    pub quoted_price: f64,
    pub change_24h_pct: f64,
}

pub const SIMULATION: SimulationConfig = SimulationConfig {
    starting_balance: 50_000,
    drain_step: 10_000,
    drain_period: Duration::from_millis(500),
    settle_delay: Duration::from_millis(1000),
    notice_duration: Duration::from_millis(3000),
    history_capacity: 5,
    progress_divisor: 500.0,
};

pub const MARKET: MarketConfig = MarketConfig {
    pair: "SOL/USDT",
    base_asset: "SOL",
    quote_asset: "USDT",
    quoted_price: 85.42,
    change_24h_pct: 2.45,
};
