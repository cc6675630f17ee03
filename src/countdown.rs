//! Countdown toward a deadline that survives page reloads.
//!
//! The deadline is fixed the first time a client loads the page: `now` plus a
//! fixed duration, written once to the [`KvStore`] as decimal milliseconds
//! since the epoch. Every later load reuses it verbatim. Remaining time is a
//! pure function of that deadline and the clock, so ticking never writes.

use std::cell::Cell;
use std::fmt;

use log::{info, warn};

use crate::scheduler::{Scheduler, Subscription};
use crate::storage::{KvStore, PersistError};

/// Milliseconds since the Unix epoch.
pub type Millis = i64;

pub fn now_millis() -> Millis {
    chrono::Utc::now().timestamp_millis()
}

/// Remaining time split for display. `hours` is unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hms {
    pub hours: u64,
    pub minutes: u8,
    pub seconds: u8,
}

impl Hms {
    pub fn total_seconds(&self) -> u64 {
        self.hours * 3_600 + u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }

    pub fn hours_padded(&self) -> String {
        format!("{:02}", self.hours)
    }

    pub fn minutes_padded(&self) -> String {
        format!("{:02}", self.minutes)
    }

    pub fn seconds_padded(&self) -> String {
        format!("{:02}", self.seconds)
    }
}

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Reads the stored deadline. A missing key and a stored `0` both mean "not set".
pub fn read_target(store: &dyn KvStore, key: &str) -> Result<Option<Millis>, PersistError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    let target: Millis = raw
        .trim()
        .parse()
        .map_err(|_| PersistError::Corrupt(raw.clone()))?;
    Ok((target != 0).then_some(target))
}

/// Returns the persisted deadline, or fixes and persists a new one at
/// `now + duration_secs`. Unreadable storage counts as empty. A failed write
/// still returns the fresh deadline so the current page view keeps counting.
pub fn initialize(store: &dyn KvStore, key: &str, duration_secs: u32, now: Millis) -> Millis {
    match read_target(store, key) {
        Ok(Some(target)) => return target,
        Ok(None) => {}
        Err(err) => warn!("countdown target unreadable ({}), starting over", err),
    }

    let target = now.saturating_add(i64::from(duration_secs) * 1_000);
    if let Err(err) = store.set(key, &target.to_string()) {
        warn!("could not persist countdown target: {}", err);
    }
    info!("countdown target fixed at {}", target);
    target
}

/// Whole seconds left until `target`, floored at zero.
pub fn tick(target: Millis, now: Millis) -> u64 {
    let diff = target.saturating_sub(now);
    if diff <= 0 {
        0
    } else {
        (diff / 1_000) as u64
    }
}

pub fn format(remaining: u64) -> Hms {
    Hms {
        hours: remaining / 3_600,
        minutes: ((remaining % 3_600) / 60) as u8,
        seconds: (remaining % 60) as u8,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    target: Millis,
}

impl Countdown {
    pub fn load(store: &dyn KvStore, key: &str, duration_secs: u32, now: Millis) -> Self {
        Self::with_target(initialize(store, key, duration_secs, now))
    }

    pub fn with_target(target: Millis) -> Self {
        Self { target }
    }

    pub fn target(&self) -> Millis {
        self.target
    }

    pub fn remaining_at(&self, now: Millis) -> u64 {
        tick(self.target, now)
    }

    pub fn is_finished_at(&self, now: Millis) -> bool {
        self.remaining_at(now) == 0
    }

    /// Reports the remaining seconds right away and then on every scheduler
    /// tick until the subscription is dropped. Reaching zero is logged once and
    /// does not unsubscribe; the value simply stays at zero.
    pub fn start<C, F>(
        self,
        scheduler: &dyn Scheduler,
        period_ms: u32,
        clock: C,
        on_tick: F,
    ) -> Subscription
    where
        C: Fn() -> Millis + 'static,
        F: Fn(u64) + 'static,
    {
        let announced = Cell::new(false);
        let report = move || {
            let now = clock();
            if self.is_finished_at(now) && !announced.replace(true) {
                info!("countdown reached zero");
            }
            on_tick(self.remaining_at(now));
        };
        report();
        scheduler.every(period_ms, Box::new(report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;
    use crate::storage::MemoryStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    const KEY: &str = "countdown_test";
    const FIFTY_FIVE_HOURS: u32 = 198_000;

    struct BrokenStore;

    impl KvStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, PersistError> {
            Err(PersistError::Unavailable)
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), PersistError> {
            Err(PersistError::WriteFailed(key.to_string()))
        }
    }

    #[test]
    fn first_load_fixes_and_persists_the_deadline() {
        let store = MemoryStore::new();
        let target = initialize(&store, KEY, FIFTY_FIVE_HOURS, 1_000_000);
        assert_eq!(target, 199_000_000);
        assert_eq!(store.get(KEY).unwrap().as_deref(), Some("199000000"));
        assert_eq!(tick(target, 1_000_000), 198_000);
        assert_eq!(
            format(198_000),
            Hms {
                hours: 55,
                minutes: 0,
                seconds: 0
            }
        );
    }

    #[test]
    fn deadline_reached_shows_all_zeros() {
        let remaining = tick(199_000_000, 199_000_000);
        assert_eq!(remaining, 0);
        assert_eq!(format(remaining).to_string(), "00:00:00");
    }

    #[test]
    fn persisted_deadline_is_reused_verbatim() {
        let store = MemoryStore::with_entry(KEY, "199000000");
        let now = 199_000_000 - 61_000;
        let target = initialize(&store, KEY, FIFTY_FIVE_HOURS, now);
        assert_eq!(target, 199_000_000);
        assert_eq!(store.write_count(), 0);
        let remaining = tick(target, now);
        assert_eq!(remaining, 61);
        assert_eq!(
            format(remaining),
            Hms {
                hours: 0,
                minutes: 1,
                seconds: 1
            }
        );
    }

    #[test]
    fn initialize_writes_only_once() {
        let store = MemoryStore::new();
        let first = initialize(&store, KEY, FIFTY_FIVE_HOURS, 5_000);
        let second = initialize(&store, KEY, FIFTY_FIVE_HOURS, 90_000);
        assert_eq!(first, second);
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn zero_and_garbage_are_treated_as_absent() {
        for stored in ["0", "soon", "", "12abc"] {
            let store = MemoryStore::with_entry(KEY, stored);
            let target = initialize(&store, KEY, 10, 1_000);
            assert_eq!(target, 11_000, "stored value {:?}", stored);
            assert_eq!(store.get(KEY).unwrap().as_deref(), Some("11000"));
        }
    }

    #[test]
    fn corrupt_value_is_reported_by_read_target() {
        let store = MemoryStore::with_entry(KEY, "soon");
        assert_eq!(
            read_target(&store, KEY),
            Err(PersistError::Corrupt("soon".to_string()))
        );
        let padded = MemoryStore::with_entry(KEY, " 1234 ");
        assert_eq!(read_target(&padded, KEY), Ok(Some(1_234)));
    }

    #[test]
    fn unavailable_storage_still_yields_a_deadline() {
        let target = initialize(&BrokenStore, KEY, 60, 0);
        assert_eq!(target, 60_000);
    }

    #[test]
    fn cleared_store_restarts_the_full_duration() {
        let store = MemoryStore::new();
        let first = Countdown::load(&store, KEY, 100, 0);
        store.remove(KEY);
        let second = Countdown::load(&store, KEY, 100, 50_000);
        assert_eq!(first.target(), 100_000);
        assert_eq!(second.target(), 150_000);
    }

    #[test]
    fn tick_floors_partial_seconds() {
        assert_eq!(tick(10_999, 10_000), 0);
        assert_eq!(tick(11_000, 10_000), 1);
        assert_eq!(tick(11_999, 10_000), 1);
        assert_eq!(tick(0, 5_000), 0);
        assert_eq!(tick(Millis::MAX, Millis::MIN), (Millis::MAX / 1_000) as u64);
    }

    #[test]
    fn hours_are_not_wrapped_at_a_day() {
        let hms = format(100 * 3_600 + 59 * 60 + 59);
        assert_eq!(hms.to_string(), "100:59:59");
        assert_eq!(hms.hours_padded(), "100");
        assert_eq!(format(5).minutes_padded(), "00");
        assert_eq!(format(5).seconds_padded(), "05");
    }

    #[test]
    fn started_countdown_ticks_down_and_freezes_at_zero() {
        let scheduler = ManualScheduler::new();
        let now = Rc::new(Cell::new(0));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let countdown = Countdown::with_target(3_000);
        let sub = {
            let now = now.clone();
            let seen = seen.clone();
            countdown.start(&scheduler, 1_000, move || now.get(), move |r| {
                seen.borrow_mut().push(r)
            })
        };

        for _ in 0..4 {
            now.set(now.get() + 1_000);
            scheduler.fire();
        }
        assert_eq!(*seen.borrow(), vec![3, 2, 1, 0, 0]);
        assert!(countdown.is_finished_at(now.get()));

        drop(sub);
        scheduler.fire();
        assert_eq!(seen.borrow().len(), 5);
    }

    #[test]
    fn loaded_countdown_past_its_deadline_starts_finished() {
        let store = MemoryStore::with_entry(KEY, "5000");
        let countdown = Countdown::load(&store, KEY, FIFTY_FIVE_HOURS, 9_000);
        assert_eq!(countdown, Countdown::with_target(5_000));

        let scheduler = ManualScheduler::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _sub = {
            let seen = seen.clone();
            countdown.start(&scheduler, 1_000, || 9_000, move |r| seen.borrow_mut().push(r))
        };
        scheduler.fire();
        assert_eq!(*seen.borrow(), vec![0, 0]);
        assert_eq!(format(0).total_seconds(), 0);
    }
}
