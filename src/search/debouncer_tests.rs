//! Tests for Debouncer

use super::*;
use proptest::prelude::*;

#[test]
fn test_new_debouncer_is_idle() {
    let debouncer = Debouncer::new(300);
    assert!(!debouncer.is_pending());
    assert_eq!(debouncer.quiet_window(), Duration::from_millis(300));
    assert_eq!(debouncer.time_remaining(Instant::now()), None);
}

#[test]
fn test_does_not_fire_before_window() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(300);
    debouncer.schedule(start);

    assert!(!debouncer.fire_if_due(start + Duration::from_millis(299)));
    assert!(debouncer.is_pending());
}

#[test]
fn test_fires_once_after_window() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(300);
    debouncer.schedule(start);

    assert!(debouncer.fire_if_due(start + Duration::from_millis(300)));
    assert!(!debouncer.is_pending());
    assert!(!debouncer.fire_if_due(start + Duration::from_millis(900)));
}

#[test]
fn test_reschedule_pushes_deadline_back() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(300);
    debouncer.schedule(start);
    debouncer.schedule(start + Duration::from_millis(200));

    assert!(!debouncer.fire_if_due(start + Duration::from_millis(300)));
    assert!(debouncer.fire_if_due(start + Duration::from_millis(500)));
}

#[test]
fn test_cancel_prevents_fire() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(300);
    debouncer.schedule(start);
    debouncer.cancel();

    assert!(!debouncer.is_pending());
    assert!(!debouncer.fire_if_due(start + Duration::from_secs(5)));
}

#[test]
fn test_time_remaining_saturates_at_zero() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(300);
    debouncer.schedule(start);

    assert_eq!(
        debouncer.time_remaining(start + Duration::from_millis(100)),
        Some(Duration::from_millis(200))
    );
    assert_eq!(
        debouncer.time_remaining(start + Duration::from_secs(1)),
        Some(Duration::ZERO)
    );
}

// For any burst of schedules spaced closer than the window, the debouncer
// fires exactly once, one full window after the last schedule.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_burst_fires_once_after_last_edit(gaps in prop::collection::vec(0u64..300, 1..20)) {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(300);
        let mut now = start;
        let mut fired = 0;

        debouncer.schedule(now);
        for gap in &gaps {
            now += Duration::from_millis(*gap);
            if debouncer.fire_if_due(now) {
                fired += 1;
            }
            debouncer.schedule(now);
        }

        prop_assert_eq!(fired, 0);
        prop_assert!(!debouncer.fire_if_due(now + Duration::from_millis(299)));
        prop_assert!(debouncer.fire_if_due(now + Duration::from_millis(300)));
    }
}
