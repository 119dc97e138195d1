use std::fmt::{Display, Formatter};

use serde::Serialize;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

use crate::error::ValidationError;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parse a calendar date from a source row.
///
/// Source files carry either a bare `YYYY-MM-DD` or a full timestamp; only
/// the calendar day matters, so anything after `T` or a space is ignored.
pub fn parse_trading_date(input: &str) -> Result<Date, ValidationError> {
    let trimmed = input.trim();
    let day_part = trimmed
        .split(|ch| ch == 'T' || ch == ' ')
        .next()
        .unwrap_or(trimmed);

    Date::parse(day_part, DATE_FORMAT).map_err(|_| ValidationError::InvalidDate {
        value: input.to_owned(),
    })
}

/// Calendar year + month, the resampling key for monthly statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u8,
}

impl MonthKey {
    pub fn of(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month() as u8,
        }
    }

    /// File-name friendly label, e.g. `2024_01`.
    pub fn export_label(&self) -> String {
        format!("{:04}_{:02}", self.year, self.month)
    }

    /// Human label for chart titles, e.g. `January 2024`.
    pub fn display_label(&self) -> String {
        let name = match self.month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => return format!("{:04}-{:02}", self.year, self.month),
        };
        format!("{name} {}", self.year)
    }
}

impl Display for MonthKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_label())
    }
}
