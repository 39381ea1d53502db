use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime};
use chrono_tz::Tz;

use crate::error::{Error, Result};

/// How the astronomical time clock must be programmed for a day's event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// The event starts after twilight: both ON and OFF times are set explicitly.
    Fixed,
    /// Twilight falls within the event: ON follows the clock's sunset, OFF is fixed.
    Sunset,
    /// The event ends before twilight: the lights stay off.
    NeverOn,
}

impl EventType {
    /// Classifies an occupancy window against the day's twilight time.
    ///
    /// Twilight at either boundary counts as inside the window.
    pub fn for_window(event: &ScheduleEvent, sunset_time: NaiveTime) -> Self {
        if event.start() > sunset_time {
            Self::Fixed
        } else if sunset_time > event.stop() {
            Self::NeverOn
        } else {
            Self::Sunset
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Fixed => "FIXED",
            Self::Sunset => "SUNSET",
            Self::NeverOn => "NEVER-ON",
        }
    }

    pub const fn marker(self) -> char {
        match self {
            Self::Fixed => 'F',
            Self::Sunset => 'S',
            Self::NeverOn => 'N',
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An occupancy window within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleEvent {
    start: NaiveTime,
    stop: NaiveTime,
}

impl ScheduleEvent {
    pub fn new(start: NaiveTime, stop: NaiveTime) -> Result<Self> {
        if start > stop {
            return Err(Error::InvalidEvent { start, stop });
        }
        Ok(Self { start, stop })
    }

    pub const fn start(&self) -> NaiveTime {
        self.start
    }

    pub const fn stop(&self) -> NaiveTime {
        self.stop
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub twilight: DateTime<Tz>,
    pub event_type: Option<EventType>,
    /// The event type differs from the one a week earlier.
    pub changed: bool,
}

pub type YearSchedule = BTreeMap<NaiveDate, DailyRecord>;
