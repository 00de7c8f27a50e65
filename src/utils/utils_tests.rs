use super::*;
use chrono::{Duration, TimeZone, Utc};

#[test]
fn test_app_folder_constant() {
    assert_eq!(APP_FOLDER, ".record-duplicator");
}

#[test]
fn test_app_home_ends_with_app_folder() {
    assert!(app_home().ends_with(APP_FOLDER));
}

#[test]
fn test_fixed_clock_returns_set_time() {
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let clock = FixedClock::new(at);
    assert_eq!(clock.now(), at);
    assert_eq!(clock.now(), at);
}

#[test]
fn test_fixed_clock_advance() {
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let clock = FixedClock::new(at);
    clock.advance(Duration::hours(13));
    assert_eq!(clock.now(), at + Duration::hours(13));
}

#[test]
fn test_system_clock_moves_forward() {
    let clock = SystemClock;
    let first = clock.now();
    let second = clock.now();
    assert!(second >= first);
}
