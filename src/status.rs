use chrono::{DateTime, Utc};

use crate::datetime;
use crate::models::ban::{BanRecord, BanStatus, Remaining};

const MS_PER_DAY: i64 = 86_400_000;
const MS_PER_MONTH: i64 = 30 * MS_PER_DAY; // Approx
const MS_PER_YEAR: i64 = 365 * MS_PER_DAY; // Approx

/// Classifies a ban record against the caller-supplied `now`.
///
/// Total over its inputs: a missing record is `None`, an end date that
/// cannot be resolved is `InvalidEndDate`. The caller reads the clock so
/// the result stays reproducible.
pub fn classify(ban: Option<&BanRecord>, now: DateTime<Utc>) -> BanStatus {
    let Some(ban) = ban else {
        return BanStatus::None;
    };

    let permanent = ban
        .duration
        .as_deref()
        .is_some_and(|d| d.eq_ignore_ascii_case("permanent"))
        || ban
            .end
            .as_deref()
            .is_some_and(|e| e.eq_ignore_ascii_case("indefinite"));
    if permanent {
        return BanStatus::Permanent;
    }

    let end = match ban.end.as_deref().map(datetime::resolve) {
        Some(Ok(ts)) => ts,
        _ => return BanStatus::InvalidEndDate,
    };

    if end <= now {
        return BanStatus::Expired;
    }

    BanStatus::Active {
        remaining: remaining_between(now, end),
    }
}

fn remaining_between(now: DateTime<Utc>, end: DateTime<Utc>) -> Remaining {
    let diff = (end - now).num_milliseconds();
    let years = diff / MS_PER_YEAR;
    let after_years = diff % MS_PER_YEAR;
    let months = after_years / MS_PER_MONTH;
    let days = (after_years % MS_PER_MONTH) / MS_PER_DAY;
    Remaining { years, months, days }
}
