//! Debugging feature flags.

pub struct LogFlags {
    /// Breach state transitions (idle -> draining -> settling -> drained).
    pub log_simulation_events: bool,

    /// Every timer schedule / fire / cancel.
    pub log_timers: bool,

    /// Orders recorded and submissions rejected.
    pub log_orders: bool,

    pub log_tour: bool,

    pub log_theme: bool,

    /// Warn when a frame takes longer than the threshold below.
    pub log_performance: bool,
    pub slow_frame_micros: u128,
}

pub const DF: LogFlags = LogFlags {
    log_simulation_events: true,
    log_orders: true,
    log_tour: true,

    log_timers: false,
    log_theme: false,
    log_performance: false,

    slow_frame_micros: 50_000,
};
