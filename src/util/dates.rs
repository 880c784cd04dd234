//! Civil-date math for the calendar and bookshelf views.
//!
//! DESIGN
//! ======
//! Event dates travel as `YYYY-MM-DD` strings; this module does the small
//! amount of proleptic-Gregorian arithmetic the month grid needs (leap
//! years, month lengths, first weekday) without pulling in a date crate.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

/// Month display names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-based) of `year`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Weekday of the first day of the month, 0 = Sunday. Sakamoto's method.
pub fn weekday_of_first(year: i32, month: u32) -> u32 {
    debug_assert!((1..=12).contains(&month));
    const OFFSETS: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let y = if month < 3 { year - 1 } else { year };
    let m = month as usize - 1;
    let day = (y + y / 4 - y / 100 + y / 400 + OFFSETS[m] + 1).rem_euclid(7);
    u32::try_from(day).unwrap_or(0)
}

/// Parse a `YYYY-MM-DD` string into `(year, month, day)`.
pub fn parse_ymd(date: &str) -> Option<(i32, u32, u32)> {
    let mut parts = date.splitn(3, '-');
    let year = parts.next()?.parse::<i32>().ok()?;
    let month = parts.next()?.parse::<u32>().ok()?;
    let day = parts.next()?.parse::<u32>().ok()?;
    if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
        return None;
    }
    Some((year, month, day))
}

/// A year/month position the calendar pages through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    /// Heading label, e.g. `"August 2026"`.
    pub fn label(self) -> String {
        let name = self
            .month
            .checked_sub(1)
            .and_then(|i| MONTH_NAMES.get(i as usize))
            .copied()
            .unwrap_or("?");
        format!("{name} {}", self.year)
    }

    /// Whether an event date string falls inside this month.
    pub fn contains(self, event_date: &str) -> bool {
        parse_ymd(event_date).is_some_and(|(y, m, _)| y == self.year && m == self.month)
    }
}
