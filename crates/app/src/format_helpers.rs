//! Shared formatting utilities for the UI layer.

use chrono::{Datelike, NaiveDate};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format a due date as "Mar 14, 2026".
pub fn format_due_date(date: NaiveDate) -> String {
    format!(
        "{} {}, {}",
        MONTH_NAMES[date.month0() as usize],
        date.day(),
        date.year()
    )
}
