use chrono::{NaiveTime, Weekday};
use civilite::{Config, Error, CIVIL_DEPRESSION};

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

const LIBRARY_TOML: &str = r#"
[observer]
name = "Library"
latitude = 51.5
longitude = -0.12
elevation = 20.0
timezone = "Europe/London"

[[events]]
weekday = "Mon"
start = "17:00:00"
stop = "20:00:00"

[[events]]
weekday = "Thursday"
start = "18:30:00"
stop = "21:30:00"
"#;

#[test]
fn test_default_config_is_rochester() {
    let config = Config::default();
    let observer = config.observer().unwrap();
    assert_eq!(observer.latitude(), 43.160_635_5);
    assert_eq!(observer.longitude(), -77.388_384_3);
    assert_eq!(observer.timezone(), chrono_tz::US::Eastern);

    let schedule = config.schedule().unwrap();
    assert_eq!(schedule.len(), 4);
    let sunday = schedule.event(Weekday::Sun).unwrap();
    assert_eq!((sunday.start(), sunday.stop()), (hm(16, 45), hm(19, 0)));
    let tuesday = schedule.event(Weekday::Tue).unwrap();
    assert_eq!((tuesday.start(), tuesday.stop()), (hm(18, 30), hm(22, 0)));
    for weekday in [Weekday::Wed, Weekday::Fri] {
        let event = schedule.event(weekday).unwrap();
        assert_eq!((event.start(), event.stop()), (hm(18, 45), hm(21, 0)), "{}", weekday);
    }
    assert!(schedule.event(Weekday::Mon).is_none());
}

#[test]
fn test_parse_toml() {
    let config = Config::from_toml(LIBRARY_TOML).unwrap();
    assert_eq!(config.observer.name, "Library");
    assert_eq!(config.observer.depression, CIVIL_DEPRESSION);
    assert_eq!(config.observer().unwrap().timezone(), chrono_tz::Europe::London);

    let weekdays: Vec<Weekday> = config.schedule().unwrap().events().map(|(weekday, _)| weekday).collect();
    assert_eq!(weekdays, vec![Weekday::Mon, Weekday::Thu]);
}

#[test]
fn test_depression_can_be_overridden() {
    let text = LIBRARY_TOML.replace("elevation = 20.0", "elevation = 20.0\ndepression = 0.833");
    let observer = Config::from_toml(&text).unwrap().observer().unwrap();
    assert_eq!(observer.depression(), 0.833);
}

#[test]
fn test_later_event_replaces_earlier_one() {
    let text = format!("{LIBRARY_TOML}\n[[events]]\nweekday = \"Mon\"\nstart = \"19:00:00\"\nstop = \"19:30:00\"\n");
    let schedule = Config::from_toml(&text).unwrap().schedule().unwrap();
    assert_eq!(schedule.len(), 2);
    assert_eq!(schedule.event(Weekday::Mon).unwrap().start(), hm(19, 0));
}

#[test]
fn test_reversed_event_rejected() {
    let text = LIBRARY_TOML.replace("stop = \"20:00:00\"", "stop = \"16:00:00\"");
    let err = Config::from_toml(&text).unwrap().schedule().unwrap_err();
    assert!(matches!(err, Error::InvalidEvent { .. }));
}

#[test]
fn test_unknown_timezone_rejected() {
    let text = LIBRARY_TOML.replace("Europe/London", "Europe/Atlantis");
    let err = Config::from_toml(&text).unwrap().observer().unwrap_err();
    assert!(matches!(err, Error::UnknownTimezone(_)));
}

#[test]
fn test_malformed_toml_rejected() {
    assert!(matches!(Config::from_toml("[observer]\nlatitude = \"north\""), Err(Error::Config(_))));
    let unknown_field = LIBRARY_TOML.replace("name = \"Library\"", "colour = \"blue\"");
    assert!(matches!(Config::from_toml(&unknown_field), Err(Error::Config(_))));
}
