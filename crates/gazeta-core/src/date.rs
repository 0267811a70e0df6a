//! Display formatting for publication dates.

use chrono::{DateTime, Datelike, Utc};

/// Abbreviated month names, Brazilian Portuguese.
const MONTHS: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// Format a timestamp as `dd MMM yyyy` for display, e.g. `19 abr 2021`.
///
/// Fixed pt-BR locale. Sorting never uses this string; listings are ordered
/// on the raw timestamp by the content repository.
pub fn format_display_date(ts: DateTime<Utc>) -> String {
    let month = MONTHS[ts.month0() as usize];
    format!("{:02} {} {}", ts.day(), month, ts.year())
}
