use std::io::Write;

use chrono::Datelike;

use crate::error::Result;
use crate::schedule::TIME_FORMAT;
use crate::types::YearSchedule;

pub const CSV_HEADER: [&str; 5] = ["Weekday", "Date", "Sunset", "Event Type", "Event Change?"];

/// Writes one CSV row per day, in date order.
pub fn write_csv<W: Write>(records: &YearSchedule, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(CSV_HEADER)?;
    for record in records.values() {
        csv.write_record([
            record.date.weekday().to_string(),
            record.date.to_string(),
            record.twilight.format(TIME_FORMAT).to_string(),
            record.event_type.map(|event_type| event_type.label()).unwrap_or_default().to_owned(),
            if record.changed { "*" } else { "" }.to_owned(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}
