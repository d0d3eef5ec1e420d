use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::InvalidInputError;

// Naive layouts the remote API and admin forms are known to send.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Resolves a date string to a UTC timestamp.
///
/// Standard forms (RFC 3339, RFC 2822, `YYYY-MM-DD[THH:mm[:ss]]`) win over
/// the legacy `DD-MM-YYYYTHH:mm` / `DD/MM/YYYYTHH:mm` form even when a
/// string would match both. Naive values are taken as UTC.
pub fn resolve(input: &str) -> Result<DateTime<Utc>, InvalidInputError> {
    if input.is_empty() {
        return Err(InvalidInputError::Empty);
    }

    if let Some(ts) = resolve_standard(input) {
        return Ok(ts);
    }

    resolve_legacy(input)
        .ok_or_else(|| InvalidInputError::UnrecognizedFormat(input.to_string()))
}

fn resolve_standard(input: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, fmt) {
            return Some(dt.and_utc());
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(d.and_time(NaiveTime::MIN).and_utc());
    }
    None
}

// Day-month-year with an optional `THH:mm` tail, `-` or `/` separated.
// Anything with the wrong number of fields is rejected, never guessed at.
fn resolve_legacy(input: &str) -> Option<DateTime<Utc>> {
    let (date_part, time_part) = match input.split_once('T') {
        Some((d, t)) => (d, Some(t)),
        None => (input, None),
    };

    let fields: Vec<&str> = date_part.split(['-', '/']).collect();
    let &[day, month, year] = fields.as_slice() else {
        return None;
    };

    let (hour, minute) = match time_part {
        Some(t) => {
            let mut parts = t.split(':');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(h), Some(m), None) => (h, m),
                _ => return None,
            }
        }
        None => ("00", "00"),
    };

    // Recompose as YYYY-MM-DD and let chrono reject bad calendar values.
    let canonical = format!("{year}-{month:0>2}-{day:0>2}T{hour}:{minute}");
    NaiveDateTime::parse_from_str(&canonical, "%Y-%m-%dT%H:%M")
        .ok()
        .map(|dt| dt.and_utc())
}
