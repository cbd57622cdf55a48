use std::time::Duration;

use strum_macros::{Display, EnumString};

use crate::config::{DF, TOUR};
use crate::engine::TimerTable;
use crate::tour::steps::{TOUR_STEPS, TourStep};

/// Status the overlay reports back, named the way tour widgets name them.
///
/// `Idle` and `Paused` are never produced by our own walkthrough. They are
/// part of the string vocabulary `on_status_str` accepts and leave the run alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum TourStatus {
    Idle,
    Running,
    Paused,
    Finished,
    Skipped,
}

impl TourStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished | Self::Skipped)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourTimer {
    Mount,
}

/// Run flag plus an instance key for the tour overlay.
///
/// Bumping the key tells the overlay to throw away its position and start
/// from the first step, even if the previous run already finished.
pub struct TourController {
    steps: &'static [TourStep],
    running: bool,
    instance_key: u64,
    timers: TimerTable<TourTimer>,
}

impl Default for TourController {
    fn default() -> Self {
        Self::new(TOUR_STEPS)
    }
}

impl TourController {
    pub fn new(steps: &'static [TourStep]) -> Self {
        Self {
            steps,
            running: false,
            instance_key: 0,
            timers: TimerTable::new(),
        }
    }

    pub fn steps(&self) -> &'static [TourStep] {
        self.steps
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn instance_key(&self) -> u64 {
        self.instance_key
    }

    pub fn is_restart_pending(&self) -> bool {
        self.timers.is_scheduled(TourTimer::Mount)
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Stops whatever is showing now and mounts a fresh run after the
    /// restart delay. Pressing it twice inside the delay mounts once.
    pub fn restart(&mut self, now: Duration) {
        self.running = false;
        self.timers.cancel_kind(TourTimer::Mount);
        self.timers
            .schedule_once(TourTimer::Mount, now, TOUR.restart_delay);
        if DF.log_tour {
            log::info!("Tour restart requested (current instance {})", self.instance_key);
        }
    }

    /// Returns true when a new instance was mounted.
    pub fn advance(&mut self, now: Duration) -> bool {
        let mut mounted = false;
        while let Some(fired) = self.timers.pop_due(now) {
            match fired.kind {
                TourTimer::Mount => {
                    self.instance_key += 1;
                    self.running = true;
                    mounted = true;
                    if DF.log_tour {
                        log::info!("Tour instance {} running", self.instance_key);
                    }
                }
            }
        }
        mounted
    }

    /// Overlay callback.
    pub fn on_status(&mut self, status: TourStatus) {
        if status.is_terminal() {
            self.running = false;
            if DF.log_tour {
                log::info!("Tour instance {} {}", self.instance_key, status);
            }
        }
    }

    /// Same as `on_status` for widgets that report plain strings.
    /// Unknown strings are ignored.
    pub fn on_status_str(&mut self, status: &str) {
        match status.parse::<TourStatus>() {
            Ok(status) => self.on_status(status),
            Err(_) => log::debug!("Ignoring unknown tour status '{}'", status),
        }
    }

    pub fn teardown(&mut self) {
        self.timers.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn starts_stopped() {
        let tour = TourController::default();
        assert!(!tour.is_running());
        assert_eq!(tour.instance_key(), 0);
        assert_eq!(tour.steps().len(), 10);
    }

    #[test]
    fn restart_mounts_after_the_delay() {
        let mut tour = TourController::default();
        tour.restart(ms(0));
        assert!(!tour.is_running());
        assert!(!tour.advance(ms(99)));
        assert!(tour.advance(ms(100)));
        assert!(tour.is_running());
        assert_eq!(tour.instance_key(), 1);
    }

    #[test]
    fn restart_while_running_stops_first_then_remounts_fresh() {
        let mut tour = TourController::default();
        tour.restart(ms(0));
        tour.advance(ms(100));
        assert!(tour.is_running());

        tour.restart(ms(5000));
        assert!(!tour.is_running());
        assert_eq!(tour.instance_key(), 1);
        tour.advance(ms(5100));
        assert!(tour.is_running());
        assert_eq!(tour.instance_key(), 2);
    }

    #[test]
    fn restart_after_completion_still_gets_a_new_instance() {
        let mut tour = TourController::default();
        tour.restart(ms(0));
        tour.advance(ms(100));
        tour.on_status(TourStatus::Finished);
        assert!(!tour.is_running());

        tour.restart(ms(200));
        tour.advance(ms(300));
        assert!(tour.is_running());
        assert_eq!(tour.instance_key(), 2);
    }

    #[test]
    fn double_press_mounts_once() {
        let mut tour = TourController::default();
        tour.restart(ms(0));
        tour.restart(ms(50));
        assert!(!tour.advance(ms(100)));
        assert!(tour.advance(ms(150)));
        assert_eq!(tour.instance_key(), 1);
    }

    #[test]
    fn only_finished_or_skipped_stop_the_run() {
        let mut tour = TourController::default();
        tour.restart(ms(0));
        tour.advance(ms(100));

        tour.on_status_str("idle");
        tour.on_status_str("running");
        tour.on_status_str("paused");
        tour.on_status_str("bogus");
        assert!(tour.is_running());

        tour.on_status_str("skipped");
        assert!(!tour.is_running());
    }

    #[test]
    fn teardown_cancels_a_pending_mount() {
        let mut tour = TourController::default();
        tour.restart(ms(0));
        tour.teardown();
        assert!(!tour.advance(ms(1000)));
        assert!(!tour.is_running());
    }
}
