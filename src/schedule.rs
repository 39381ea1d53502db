use std::fmt;

use chrono::Weekday;
use comfy_table::{modifiers, presets, Table};

use crate::types::ScheduleEvent;

pub const TIME_FORMAT: &str = "%H:%M:%S";

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Occupancy events that repeat every week, at most one per weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklySchedule {
    events: [Option<ScheduleEvent>; 7],
}

impl WeeklySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the event for a weekday, replacing any previous one.
    pub fn set_event(&mut self, weekday: Weekday, event: ScheduleEvent) {
        self.events[weekday.num_days_from_monday() as usize] = Some(event);
    }

    pub fn event(&self, weekday: Weekday) -> Option<&ScheduleEvent> {
        self.events[weekday.num_days_from_monday() as usize].as_ref()
    }

    /// Populated weekdays, Monday first.
    pub fn events(&self) -> impl Iterator<Item = (Weekday, &ScheduleEvent)> {
        WEEKDAYS
            .into_iter()
            .zip(&self.events)
            .filter_map(|(weekday, event)| event.as_ref().map(|event| (weekday, event)))
    }

    pub fn len(&self) -> usize {
        self.events.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn render(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL_CONDENSED)
            .apply_modifier(modifiers::UTF8_ROUND_CORNERS);
        table.set_header(vec!["Weekday", "Start time", "End time"]);
        for (weekday, event) in self.events() {
            table.add_row(vec![
                weekday.to_string(),
                event.start().format(TIME_FORMAT).to_string(),
                event.stop().format(TIME_FORMAT).to_string(),
            ]);
        }
        table
    }
}

impl fmt::Display for WeeklySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
