//! Display formatting for bill dates and statuses.

use chrono::{Datelike, NaiveDate, ParseError};

use crate::models::BillStatus;

/// Abbreviated French month labels, capitalized the way the list view
/// displays them.
const MONTH_LABELS: [&str; 12] = [
    "Janv.", "Févr.", "Mars", "Avr.", "Mai", "Juin", "Juil.", "Août", "Sept.", "Oct.", "Nov.",
    "Déc.",
];

/// Parse a bill's raw date field (ISO `YYYY-MM-DD`).
pub fn parse_date(raw: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
}

/// Render a parsed date for the list view: `2004-04-04` becomes `4 Avr. 04`.
pub fn display_date(date: NaiveDate) -> String {
    let month = MONTH_LABELS[date.month0() as usize];
    format!("{} {} {:02}", date.day(), month, date.year() % 100)
}

/// Format a raw date string, failing if it does not parse. Callers decide
/// whether a failure aborts or degrades to the raw value.
pub fn format_date(raw: &str) -> Result<String, ParseError> {
    parse_date(raw).map(display_date)
}

/// Map a wire status to its display label. Unknown statuses pass through
/// unchanged.
pub fn format_status(status: &str) -> String {
    BillStatus::from_wire(status).label().to_string()
}
