use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

use crate::angles::{self, CIVIL_DEPRESSION};
use crate::error::{Error, Result};

/// A location on Earth together with the timezone its clocks follow.
#[derive(Debug, Clone, PartialEq)]
pub struct Observer {
    latitude: f64,
    longitude: f64,
    elevation: f64,
    timezone: Tz,
    depression: f64,
}

impl Observer {
    pub fn new(latitude: f64, longitude: f64, elevation: f64, timezone: Tz) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::InvalidLatitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
            elevation,
            timezone,
            depression: CIVIL_DEPRESSION,
        })
    }

    /// Same as [`Observer::new`], resolving the timezone from its IANA name.
    pub fn with_timezone_name(
        latitude: f64,
        longitude: f64,
        elevation: f64,
        timezone: &str,
    ) -> Result<Self> {
        let timezone = timezone
            .parse::<Tz>()
            .map_err(|_| Error::UnknownTimezone(timezone.to_owned()))?;
        Self::new(latitude, longitude, elevation, timezone)
    }

    /// Overrides the solar depression angle, 6° (civil) by default.
    #[must_use]
    pub fn with_depression(mut self, depression: f64) -> Self {
        self.depression = depression;
        self
    }

    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    pub const fn elevation(&self) -> f64 {
        self.elevation
    }

    pub const fn timezone(&self) -> Tz {
        self.timezone
    }

    pub const fn depression(&self) -> f64 {
        self.depression
    }

    /// Evening instant at which the sun sinks to the depression angle on the
    /// given local date, in the observer's timezone.
    pub fn civil_twilight(&self, date: NaiveDate) -> Result<DateTime<Tz>> {
        let twilight = self.setting_after_utc_midnight(date, date)?;
        let drift = (date - twilight.date_naive()).num_days();
        if drift == 0 {
            return Ok(twilight);
        }
        let utc_date = date
            .checked_add_signed(Duration::days(drift))
            .ok_or(Error::YearOutOfRange(date.year()))?;
        self.setting_after_utc_midnight(utc_date, date)
    }

    fn setting_after_utc_midnight(
        &self,
        utc_date: NaiveDate,
        date: NaiveDate,
    ) -> Result<DateTime<Tz>> {
        let zenith = angles::twilight_zenith(self.depression, self.elevation);
        let minutes = angles::setting_minutes_utc(
            angles::julian_day(utc_date),
            self.latitude,
            self.longitude,
            zenith,
        )
        .ok_or(Error::NoTwilight { date })?;

        #[allow(clippy::cast_possible_truncation)]
        let offset = Duration::milliseconds((minutes * 60_000.0).round() as i64);
        let midnight = utc_date
            .and_hms_opt(0, 0, 0)
            .map(|midnight| Utc.from_utc_datetime(&midnight))
            .ok_or(Error::YearOutOfRange(date.year()))?;
        let instant = midnight
            .checked_add_signed(offset)
            .ok_or(Error::YearOutOfRange(date.year()))?;
        Ok(instant.with_timezone(&self.timezone))
    }
}
