use chrono::{DateTime, Datelike, NaiveDate};
use chrono_tz::Tz;

use crate::error::Result;
use crate::observer::Observer;
use crate::schedule::WeeklySchedule;
use crate::types::EventType;

/// Event type of the given date, or `None` when nothing is scheduled that weekday.
pub fn classify(
    schedule: &WeeklySchedule,
    observer: &Observer,
    date: NaiveDate,
) -> Result<Option<EventType>> {
    classify_with(schedule, date, |date| observer.civil_twilight(date))
}

/// Like [`classify`], with twilight supplied by `twilight_fn`.
///
/// Twilight is only computed on days that have an event.
pub fn classify_with<F>(
    schedule: &WeeklySchedule,
    date: NaiveDate,
    twilight_fn: F,
) -> Result<Option<EventType>>
where
    F: Fn(NaiveDate) -> Result<DateTime<Tz>>,
{
    let Some(event) = schedule.event(date.weekday()) else {
        return Ok(None);
    };
    let sunset_time = twilight_fn(date)?.time();
    Ok(Some(EventType::for_window(event, sunset_time)))
}
