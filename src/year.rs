use chrono::{DateTime, Days, NaiveDate};
use chrono_tz::Tz;
use tracing::{debug, info, instrument};

use crate::classifier::classify_with;
use crate::error::{Error, Result};
use crate::observer::Observer;
use crate::schedule::WeeklySchedule;
use crate::types::{DailyRecord, YearSchedule};

const ONE_WEEK: Days = Days::new(7);

/// Builds the record of every day of `year`, keyed and ordered by date.
pub fn build_year(
    schedule: &WeeklySchedule,
    observer: &Observer,
    year: i32,
) -> Result<YearSchedule> {
    build_year_with(schedule, year, |date| observer.civil_twilight(date))
}

/// Like [`build_year`], with twilight supplied by `twilight_fn`.
///
/// The week-earlier comparison of early January reaches into the previous year.
#[instrument(skip(schedule, twilight_fn))]
pub fn build_year_with<F>(
    schedule: &WeeklySchedule,
    year: i32,
    twilight_fn: F,
) -> Result<YearSchedule>
where
    F: Fn(NaiveDate) -> Result<DateTime<Tz>>,
{
    let (first, last) = year_bounds(year)?;
    let mut records = YearSchedule::new();
    let mut n_changes = 0_usize;

    for date in first.iter_days().take_while(|date| *date <= last) {
        let twilight = twilight_fn(date)?;
        let event_type = classify_with(schedule, date, |_| Ok(twilight.clone()))?;

        let changed = match event_type {
            Some(current) => {
                let week_earlier =
                    date.checked_sub_days(ONE_WEEK).ok_or(Error::YearOutOfRange(year))?;
                let previous = classify_with(schedule, week_earlier, &twilight_fn)?;
                previous.is_some_and(|previous| previous != current)
            }
            None => false,
        };
        if changed {
            n_changes += 1;
            debug!(%date, ?event_type, "event type changed since last week");
        }

        records.insert(date, DailyRecord { date, twilight, event_type, changed });
    }

    info!(n_days = records.len(), n_changes, "built the yearly schedule");
    Ok(records)
}

fn year_bounds(year: i32) -> Result<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(Error::YearOutOfRange(year))?;
    let last = NaiveDate::from_ymd_opt(year, 12, 31).ok_or(Error::YearOutOfRange(year))?;
    Ok((first, last))
}
