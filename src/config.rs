use std::path::Path;

use chrono::{NaiveTime, Weekday};
use serde::Deserialize;

use crate::angles::CIVIL_DEPRESSION;
use crate::error::Result;
use crate::observer::Observer;
use crate::schedule::WeeklySchedule;
use crate::types::ScheduleEvent;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObserverConfig {
    #[serde(default)]
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub elevation: f64,
    pub timezone: String,
    #[serde(default = "default_depression")]
    pub depression: f64,
}

const fn default_depression() -> f64 {
    CIVIL_DEPRESSION
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventConfig {
    pub weekday: Weekday,
    pub start: NaiveTime,
    pub stop: NaiveTime,
}

/// Observer and weekly occupancy, as read from a TOML file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub observer: ObserverConfig,
    #[serde(default)]
    pub events: Vec<EventConfig>,
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_toml(&std::fs::read_to_string(path)?)
    }

    pub fn observer(&self) -> Result<Observer> {
        let observer = &self.observer;
        Ok(Observer::with_timezone_name(
            observer.latitude,
            observer.longitude,
            observer.elevation,
            &observer.timezone,
        )?
        .with_depression(observer.depression))
    }

    /// Later entries for the same weekday replace earlier ones.
    pub fn schedule(&self) -> Result<WeeklySchedule> {
        let mut schedule = WeeklySchedule::new();
        for event in &self.events {
            schedule.set_event(event.weekday, ScheduleEvent::new(event.start, event.stop)?);
        }
        Ok(schedule)
    }
}

const fn hm(hour: u32, minute: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, minute, 0) {
        Some(time) => time,
        None => panic!("invalid time of day"),
    }
}

/// Evening occupancy of the House of Prayer, evaluated at compile time.
const DEFAULT_EVENTS: [(Weekday, NaiveTime, NaiveTime); 4] = [
    (Weekday::Sun, hm(16, 45), hm(19, 0)),
    (Weekday::Tue, hm(18, 30), hm(22, 0)),
    (Weekday::Wed, hm(18, 45), hm(21, 0)),
    (Weekday::Fri, hm(18, 45), hm(21, 0)),
];

impl Default for Config {
    /// The House of Prayer parking lot in Rochester, NY.
    ///
    /// The elevation is a guess based on the nearby airport.
    fn default() -> Self {
        Self {
            observer: ObserverConfig {
                name: "Rochester_HoP".to_owned(),
                latitude: 43.160_635_5,
                longitude: -77.388_384_3,
                elevation: 170.0,
                timezone: "US/Eastern".to_owned(),
                depression: CIVIL_DEPRESSION,
            },
            events: DEFAULT_EVENTS
                .iter()
                .map(|&(weekday, start, stop)| EventConfig { weekday, start, stop })
                .collect(),
        }
    }
}
