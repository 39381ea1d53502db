pub mod angles;
pub mod calendar;
pub mod classifier;
pub mod config;
pub mod error;
pub mod observer;
pub mod report;
pub mod schedule;
pub mod types;
pub mod year;

pub use angles::{
    deg_to_rad, equation_of_time, horizon_dip, julian_century, julian_day, normalize_angle,
    rad_to_deg, refraction_at_zenith, setting_minutes_utc, solar_declination, twilight_zenith,
    CIVIL_DEPRESSION,
};

pub use calendar::{build_calendar_table, build_legend_table, build_occupancy_table, render_calendar};
pub use classifier::{classify, classify_with};
pub use config::{Config, EventConfig, ObserverConfig};
pub use error::{Error, Result};
pub use observer::Observer;
pub use report::write_csv;
pub use schedule::WeeklySchedule;
pub use types::{DailyRecord, EventType, ScheduleEvent, YearSchedule};
pub use year::{build_year, build_year_with};
