use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Today's date in the local timezone, or UTC when the offset cannot be determined.
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

pub fn format_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}
