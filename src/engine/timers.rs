//! Deadline table for the simulation's wall-clock timers.
//!
//! Time is a `Duration` since the session started, so callers decide what
//! "now" is. The app feeds it from a monotonic clock; tests just pass numbers.

use std::fmt::Debug;
use std::time::Duration;

use crate::config::DF;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
struct TimerEntry<K> {
    handle: TimerHandle,
    kind: K,
    deadline: Duration,
    period: Option<Duration>,
}

/// A timer that has come due. `at` is the deadline it was scheduled for,
/// which may be earlier than the `now` that collected it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired<K> {
    pub handle: TimerHandle,
    pub kind: K,
    pub at: Duration,
}

#[derive(Debug, Clone)]
pub struct TimerTable<K> {
    next_id: u64,
    entries: Vec<TimerEntry<K>>,
}

impl<K> Default for TimerTable<K> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<K: Copy + PartialEq + Debug> TimerTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule_once(&mut self, kind: K, now: Duration, delay: Duration) -> TimerHandle {
        self.insert(kind, now + delay, None)
    }

    /// First fire is one `period` after `now`.
    pub fn schedule_repeating(&mut self, kind: K, now: Duration, period: Duration) -> TimerHandle {
        self.insert(kind, now + period, Some(period))
    }

    fn insert(&mut self, kind: K, deadline: Duration, period: Option<Duration>) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        if DF.log_timers {
            log::info!(
                "⏱ schedule {:?} #{} at {}ms (period {:?})",
                kind,
                handle.0,
                deadline.as_millis(),
                period
            );
        }
        self.entries.push(TimerEntry {
            handle,
            kind,
            deadline,
            period,
        });
        handle
    }

    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        let removed = self.entries.len() != before;
        if removed && DF.log_timers {
            log::info!("⏱ cancel #{}", handle.0);
        }
        removed
    }

    /// Cancels every timer of `kind`. Returns how many were dropped.
    pub fn cancel_kind(&mut self, kind: K) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.kind != kind);
        before - self.entries.len()
    }

    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.entries.len();
        self.entries.clear();
        if dropped > 0 && DF.log_timers {
            log::info!("⏱ cancelled all ({} pending)", dropped);
        }
        dropped
    }

    pub fn is_scheduled(&self, kind: K) -> bool {
        self.entries.iter().any(|e| e.kind == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    /// Takes the earliest timer whose deadline is `<= now`.
    ///
    /// One-shots are removed; repeating timers are re-armed one period past
    /// the deadline they fired for, so a late frame replays the missed ticks
    /// in order instead of skipping them. Ties go to the older handle.
    pub fn pop_due(&mut self, now: Duration) -> Option<Fired<K>> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.deadline <= now)
            .min_by_key(|(_, e)| (e.deadline, e.handle.0))
            .map(|(i, _)| i)?;

        let entry = &mut self.entries[idx];
        let fired = Fired {
            handle: entry.handle,
            kind: entry.kind,
            at: entry.deadline,
        };
        if let Some(period) = entry.period {
            entry.deadline += period;
        } else {
            self.entries.swap_remove(idx);
        }
        if DF.log_timers {
            log::info!("⏱ fire {:?} #{} at {}ms", fired.kind, fired.handle.0, fired.at.as_millis());
        }
        Some(fired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Kind {
        Tick,
        Once,
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn one_shot_fires_once_at_its_deadline() {
        let mut timers = TimerTable::new();
        timers.schedule_once(Kind::Once, ms(0), ms(1000));
        assert!(timers.pop_due(ms(999)).is_none());
        let fired = timers.pop_due(ms(1000)).unwrap();
        assert_eq!(fired.kind, Kind::Once);
        assert_eq!(fired.at, ms(1000));
        assert!(timers.pop_due(ms(5000)).is_none());
        assert!(timers.is_empty());
    }

    #[test]
    fn repeating_timer_replays_missed_periods_in_order() {
        let mut timers = TimerTable::new();
        timers.schedule_repeating(Kind::Tick, ms(0), ms(500));
        let mut fired_at = Vec::new();
        while let Some(f) = timers.pop_due(ms(1600)) {
            fired_at.push(f.at.as_millis());
        }
        assert_eq!(fired_at, vec![500, 1000, 1500]);
        assert_eq!(timers.next_deadline(), Some(ms(2000)));
    }

    #[test]
    fn earliest_deadline_wins_across_kinds() {
        let mut timers = TimerTable::new();
        timers.schedule_once(Kind::Once, ms(0), ms(700));
        timers.schedule_repeating(Kind::Tick, ms(0), ms(500));
        let order: Vec<Kind> = std::iter::from_fn(|| timers.pop_due(ms(1000)))
            .map(|f| f.kind)
            .collect();
        assert_eq!(order, vec![Kind::Tick, Kind::Once, Kind::Tick]);
    }

    #[test]
    fn cancelled_timers_never_fire() {
        let mut timers = TimerTable::new();
        let once = timers.schedule_once(Kind::Once, ms(0), ms(10));
        timers.schedule_repeating(Kind::Tick, ms(0), ms(10));
        assert!(timers.cancel(once));
        assert!(!timers.cancel(once));
        assert_eq!(timers.cancel_kind(Kind::Tick), 1);
        assert!(timers.pop_due(ms(100)).is_none());

        timers.schedule_once(Kind::Once, ms(0), ms(10));
        timers.schedule_once(Kind::Once, ms(0), ms(20));
        assert_eq!(timers.cancel_all(), 2);
        assert_eq!(timers.next_deadline(), None);
    }
}
