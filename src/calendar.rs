use std::iter;

use chrono::{Datelike, FixedOffset, Offset, Weekday};
use comfy_table::{modifiers, presets, Attribute, Cell, CellAlignment, Color, Table};

use crate::schedule::WeeklySchedule;
use crate::types::{DailyRecord, EventType, YearSchedule};

pub const DST_CHANGE_MARKER: char = '!';
const SHORT_TIME_FORMAT: &str = "%H:%M";

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table
}

fn weekdays_from_sunday() -> impl Iterator<Item = Weekday> {
    iter::successors(Some(Weekday::Sun), |weekday| Some(weekday.succ())).take(7)
}

const fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

const fn event_color(event_type: EventType) -> Color {
    match event_type {
        EventType::Sunset => Color::DarkYellow,
        EventType::Fixed => Color::Green,
        EventType::NeverOn => Color::Grey,
    }
}

fn day_cell(record: &DailyRecord, is_dst_change: bool) -> Cell {
    let mut text = format!("{:02}", record.date.day());
    if let Some(event_type) = record.event_type {
        text.push(event_type.marker());
    }
    if is_dst_change {
        text.push(DST_CHANGE_MARKER);
    }
    let cell = Cell::new(text).set_alignment(CellAlignment::Center);
    let cell = match record.event_type {
        Some(event_type) => cell.fg(event_color(event_type)),
        None => cell.add_attribute(Attribute::Dim),
    };
    if record.date.day() == 1 { cell.add_attribute(Attribute::Bold) } else { cell }
}

/// Month grid of the year, one row per week starting on Sunday.
///
/// The last column holds the twilight time of the row's last day.
pub fn build_calendar_table(records: &YearSchedule) -> Table {
    let mut table = new_table();
    let mut header = vec![Cell::new("MONTH")];
    header.extend(weekdays_from_sunday().map(|weekday| {
        Cell::new(&weekday.to_string()[..2]).set_alignment(CellAlignment::Center)
    }));
    header.push(Cell::new("Sunset"));
    table.set_header(header);

    let mut row: Vec<Cell> = vec![Cell::new("")];
    let mut last_offset: Option<FixedOffset> = None;
    let mut last_twilight = String::new();

    for record in records.values() {
        if row.len() == 1 {
            let leading_blanks = record.date.weekday().num_days_from_sunday() as usize;
            row.extend(iter::repeat_with(|| Cell::new("")).take(leading_blanks));
        }
        if record.date.day() == 1 {
            row[0] = Cell::new(record.date.format("%B")).add_attribute(Attribute::Bold);
        }

        let offset = record.twilight.offset().fix();
        let is_dst_change = last_offset.is_some_and(|last_offset| last_offset != offset);
        last_offset = Some(offset);
        last_twilight = record.twilight.format(SHORT_TIME_FORMAT).to_string();
        row.push(day_cell(record, is_dst_change));

        if record.date.weekday() == Weekday::Sat {
            row.push(Cell::new(&last_twilight));
            table.add_row(std::mem::replace(&mut row, vec![Cell::new("")]));
        }
    }

    if row.len() > 1 {
        row.resize_with(8, || Cell::new(""));
        row.push(Cell::new(&last_twilight));
        table.add_row(row);
    }
    table
}

/// Occupancy schedule, Sunday first, the way the calendar lists its columns.
pub fn build_occupancy_table(schedule: &WeeklySchedule) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Weekday", "Start time", "End time"]);
    for weekday in weekdays_from_sunday() {
        if let Some(event) = schedule.event(weekday) {
            table.add_row(vec![
                weekday_name(weekday).to_owned(),
                event.start().format(SHORT_TIME_FORMAT).to_string(),
                event.stop().format(SHORT_TIME_FORMAT).to_string(),
            ]);
        }
    }
    table
}

pub fn build_legend_table() -> Table {
    let mut table = new_table();
    table.set_header(vec!["Marker", "Meaning"]);
    for event_type in [EventType::Sunset, EventType::Fixed, EventType::NeverOn] {
        table.add_row(vec![
            Cell::new(format!("01{}", event_type.marker())).fg(event_color(event_type)),
            Cell::new(format!("{event_type} event")),
        ]);
    }
    table.add_row(vec![
        Cell::new("01").add_attribute(Attribute::Bold),
        Cell::new("First day of month"),
    ]);
    table.add_row(vec![
        Cell::new(format!("01{DST_CHANGE_MARKER}")),
        Cell::new("DST change"),
    ]);
    table
}

/// The full printable calendar: title, occupancy schedule, legend and month grid.
///
/// Styling is stripped so that the text can be written to a file.
pub fn render_calendar(records: &YearSchedule, schedule: &WeeklySchedule, year: i32) -> String {
    let mut occupancy = build_occupancy_table(schedule);
    let mut legend = build_legend_table();
    let mut calendar = build_calendar_table(records);
    for table in [&mut occupancy, &mut legend, &mut calendar] {
        table.force_no_tty();
    }
    format!(
        "{year} lighting schedule\n\nOccupancy schedule (evenings)\n{occupancy}\n\nLegend\n{legend}\n\n{calendar}\n"
    )
}
