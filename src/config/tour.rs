//! Guided tour behaviour.
use std::time::Duration;

pub struct TourConfig {
    /// Gap between stopping a running tour and mounting the fresh instance.
    pub restart_delay: Duration,
    /// Overlay width in points.
    pub width: f32,
    pub show_progress: bool,
    pub show_skip_button: bool,
}

pub const TOUR: TourConfig = TourConfig {
    restart_delay: Duration::from_millis(100),
    width: 380.0,
    show_progress: true,
    show_skip_button: true,
};
