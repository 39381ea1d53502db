use chrono::{NaiveDate, NaiveTime};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("event starts at {start} but stops earlier at {stop}")]
    InvalidEvent { start: NaiveTime, stop: NaiveTime },

    #[error("invalid latitude {0}° (must be between -90° and +90°)")]
    InvalidLatitude(f64),

    #[error("invalid longitude {0}° (must be between -180° and +180°)")]
    InvalidLongitude(f64),

    #[error("unknown timezone `{0}`")]
    UnknownTimezone(String),

    /// The sun never crosses the twilight altitude on that day.
    #[error("no evening twilight on {date} at this location")]
    NoTwilight { date: NaiveDate },

    #[error("year {0} is outside the supported date range")]
    YearOutOfRange(i32),

    #[error("failed to parse the configuration")]
    Config(#[from] toml::de::Error),

    #[error("failed to write the report")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
