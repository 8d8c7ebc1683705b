use chrono::{DateTime, Datelike, FixedOffset};

/// Short numeric date for the table's "Date of Sale" column, e.g. `3/27/2022`.
///
/// Uses the calendar date in the record's own offset.
pub fn format_sale_date(date: &DateTime<FixedOffset>) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}
