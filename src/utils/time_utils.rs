use chrono::NaiveDate;

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
}

// Date helper functions

pub fn format_date(date: NaiveDate) -> String {
    // Used for display purposes
    format!("{}", date.format(TimeUtils::STANDARD_TIME_FORMAT))
}

/// First and last date of an ordered index.
pub fn date_span(dates: &[NaiveDate]) -> Option<(NaiveDate, NaiveDate)> {
    Some((*dates.first()?, *dates.last()?))
}

/// "2021-01-04 → 2021-03-31", or "-" when there is no span.
pub fn format_date_range(span: Option<(NaiveDate, NaiveDate)>) -> String {
    match span {
        Some((first, last)) => format!("{} → {}", format_date(first), format_date(last)),
        None => "-".to_string(),
    }
}
