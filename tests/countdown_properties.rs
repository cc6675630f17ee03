//! Property-based tests for the persisted countdown.

use filmfind::countdown::{format, initialize, tick, Millis};
use filmfind::storage::{KvStore, MemoryStore};
use proptest::prelude::*;

const KEY: &str = "filmfind_countdown_target_v1";

// ============================================================================
// Strategy Generators
// ============================================================================

/// Millisecond timestamps within a few centuries of the epoch
fn timestamp_strategy() -> impl Strategy<Value = Millis> {
    -10_000_000_000_000i64..10_000_000_000_000i64
}

/// Durations up to a year, in seconds
fn duration_strategy() -> impl Strategy<Value = u32> {
    1u32..31_536_000
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Remaining time never goes up as the clock moves forward
    #[test]
    fn remaining_is_monotonic(
        target in timestamp_strategy(),
        a in timestamp_strategy(),
        b in timestamp_strategy(),
    ) {
        let (now1, now2) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(tick(target, now2) <= tick(target, now1));
    }

    /// Past the deadline the countdown sits at zero
    #[test]
    fn remaining_is_zero_after_deadline(target in timestamp_strategy(), late_by in 0i64..1_000_000_000) {
        prop_assert_eq!(tick(target, target + late_by), 0);
    }

    /// Split fields add back up to the remaining seconds
    #[test]
    fn format_round_trips(target in timestamp_strategy(), now in timestamp_strategy()) {
        let remaining = tick(target, now);
        let hms = format(remaining);
        prop_assert!(hms.minutes < 60);
        prop_assert!(hms.seconds < 60);
        prop_assert_eq!(hms.hours * 3_600 + u64::from(hms.minutes) * 60 + u64::from(hms.seconds), remaining);
        prop_assert_eq!(hms.total_seconds(), remaining);
    }

    /// A second initialize returns the first deadline and does not write again
    #[test]
    fn initialize_is_idempotent(
        duration in duration_strategy(),
        first_now in 0i64..4_000_000_000_000,
        later_by in 0i64..1_000_000_000,
    ) {
        let store = MemoryStore::new();
        let first = initialize(&store, KEY, duration, first_now);
        let second = initialize(&store, KEY, duration, first_now + later_by);
        prop_assert_eq!(first, second);
        prop_assert_eq!(store.write_count(), 1);
        prop_assert_eq!(tick(first, first_now), u64::from(duration));
    }

    /// Any non-zero stored timestamp is reused verbatim
    #[test]
    fn stored_deadline_wins(stored in timestamp_strategy(), now in timestamp_strategy()) {
        prop_assume!(stored != 0);
        let store = MemoryStore::with_entry(KEY, &stored.to_string());
        prop_assert_eq!(initialize(&store, KEY, 198_000, now), stored);
        prop_assert_eq!(store.get(KEY).unwrap(), Some(stored.to_string()));
        prop_assert_eq!(store.write_count(), 0);
    }
}
