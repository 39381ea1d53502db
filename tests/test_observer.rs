use chrono::{Datelike, NaiveDate, NaiveTime, Offset, Timelike};
use civilite::{Error, Observer, CIVIL_DEPRESSION};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn rochester() -> Observer {
    Observer::with_timezone_name(43.1606355, -77.3883843, 170.0, "US/Eastern").unwrap()
}

/// Asserts that the local twilight time is within `tol_minutes` of `hh:mm`.
fn assert_twilight_near(observer: &Observer, date: NaiveDate, hour: u32, minute: u32, tol_minutes: i64) {
    let twilight = observer.civil_twilight(date).unwrap();
    assert_eq!(twilight.date_naive(), date, "twilight {} on another day", twilight);
    let expected = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();
    let diff = (twilight.time() - expected).num_minutes().abs();
    assert!(
        diff <= tol_minutes,
        "{}: twilight at {}, expected {} ± {} min",
        date, twilight, expected, tol_minutes
    );
}

// ── Construction ──

#[test]
fn test_new_observer_defaults_to_civil_depression() {
    let observer = rochester();
    assert_eq!(observer.depression(), CIVIL_DEPRESSION);
    assert_eq!(observer.timezone(), chrono_tz::US::Eastern);
    assert_eq!(observer.elevation(), 170.0);
}

#[test]
fn test_unknown_timezone_fails_fast() {
    let err = Observer::with_timezone_name(43.0, -77.0, 0.0, "Mars/Olympus_Mons").unwrap_err();
    assert!(matches!(err, Error::UnknownTimezone(name) if name == "Mars/Olympus_Mons"));
}

#[test]
fn test_invalid_coordinates_rejected() {
    let tz = chrono_tz::UTC;
    assert!(matches!(Observer::new(91.0, 0.0, 0.0, tz), Err(Error::InvalidLatitude(_))));
    assert!(matches!(Observer::new(0.0, -181.0, 0.0, tz), Err(Error::InvalidLongitude(_))));
}

// ── CivilTwilight ──

#[test]
fn test_rochester_winter_twilight() {
    let observer = rochester();
    assert_twilight_near(&observer, date(2026, 1, 4), 17, 22, 3);
    assert_twilight_near(&observer, date(2026, 12, 6), 17, 9, 3);
}

#[test]
fn test_rochester_summer_twilight() {
    let observer = rochester();
    assert_twilight_near(&observer, date(2026, 6, 21), 21, 31, 3);
    assert_twilight_near(&observer, date(2026, 8, 30), 20, 19, 3);
}

#[test]
fn test_twilight_offset_follows_daylight_saving() {
    let observer = rochester();
    let before = observer.civil_twilight(date(2026, 3, 7)).unwrap();
    let after = observer.civil_twilight(date(2026, 3, 8)).unwrap();
    assert_eq!(before.offset().fix().local_minus_utc(), -5 * 3600);
    assert_eq!(after.offset().fix().local_minus_utc(), -4 * 3600);
    // The clock jumps an hour forward, twilight only moves about a minute.
    assert_eq!(after.hour() - before.hour(), 1);
}

#[test]
fn test_twilight_far_from_greenwich() {
    let tokyo = Observer::with_timezone_name(35.68, 139.69, 0.0, "Asia/Tokyo").unwrap();
    assert_twilight_near(&tokyo, date(2026, 6, 21), 19, 30, 3);

    let sydney = Observer::with_timezone_name(-33.87, 151.21, 0.0, "Australia/Sydney").unwrap();
    assert_twilight_near(&sydney, date(2026, 12, 21), 20, 34, 3);

    let san_francisco =
        Observer::with_timezone_name(37.77, -122.42, 0.0, "America/Los_Angeles").unwrap();
    assert_twilight_near(&san_francisco, date(2026, 6, 21), 21, 6, 3);
}

#[test]
fn test_depression_override() {
    let civil = rochester();
    let sunset = rochester().with_depression(0.833);
    let day = date(2026, 6, 21);
    let lead = civil.civil_twilight(day).unwrap() - sunset.civil_twilight(day).unwrap();
    assert!((30..=45).contains(&lead.num_minutes()), "lead {} min", lead.num_minutes());
}

#[test]
fn test_no_twilight_at_polar_latitudes() {
    let longyearbyen = Observer::with_timezone_name(78.22, 15.65, 0.0, "Arctic/Longyearbyen").unwrap();
    for day in [date(2026, 6, 21), date(2026, 12, 21)] {
        let err = longyearbyen.civil_twilight(day).unwrap_err();
        assert!(matches!(err, Error::NoTwilight { date } if date == day), "{}", err);
    }
}

#[test]
fn test_twilight_is_deterministic() {
    let observer = rochester();
    let day = date(2024, 2, 29);
    assert_eq!(observer.civil_twilight(day).unwrap(), observer.civil_twilight(day).unwrap());
}

#[test]
fn test_date_overflow_is_out_of_range() {
    let equator = Observer::new(0.0, -90.0, 0.0, chrono_tz::UTC).unwrap();
    let err = equator.civil_twilight(NaiveDate::MAX).unwrap_err();
    assert!(matches!(err, Error::YearOutOfRange(year) if year == NaiveDate::MAX.year()), "{}", err);
}
