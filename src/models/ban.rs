use std::fmt;

use serde::{Deserialize, Serialize};

/// Ban fields as the remote API sends them. `duration` may carry the
/// literal "permanent"; `end` may carry "indefinite" or a date string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BanRecord {
    pub duration: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BanStatus {
    None,
    Permanent,
    InvalidEndDate,
    Expired,
    Active { remaining: Remaining },
}

impl fmt::Display for BanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BanStatus::None => f.write_str("not banned"),
            BanStatus::Permanent => f.write_str("permanent"),
            BanStatus::InvalidEndDate => f.write_str("invalid end date"),
            BanStatus::Expired => f.write_str("expired"),
            BanStatus::Active { remaining } => write!(f, "{remaining}"),
        }
    }
}

/// Time left on a ban, decomposed with fixed 365-day years and 30-day
/// months. Matches the admin panel display, so no calendar arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Remaining {
    pub years: i64,
    pub months: i64,
    pub days: i64,
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.years == 0 && self.months == 0 && self.days == 0 {
            return f.write_str("less than a day");
        }

        let mut out = String::new();
        for (value, unit) in [
            (self.years, "year"),
            (self.months, "month"),
            (self.days, "day"),
        ] {
            if value == 0 {
                continue;
            }
            let plural = if value > 1 { "s" } else { "" };
            out.push_str(&format!("{value} {unit}{plural} "));
        }
        f.write_str(out.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Remaining { years: 1, months: 1, days: 5 }, "1 year 1 month 5 days")]
    #[case(Remaining { years: 2, months: 0, days: 3 }, "2 years 3 days")]
    #[case(Remaining { years: 0, months: 0, days: 1 }, "1 day")]
    #[case(Remaining { years: 0, months: 2, days: 0 }, "2 months")]
    #[case(Remaining { years: 0, months: 0, days: 0 }, "less than a day")]
    fn remaining_renders(#[case] remaining: Remaining, #[case] expected: &str) {
        assert_eq!(remaining.to_string(), expected);
    }

    #[rstest]
    fn status_renders_display_strings() {
        assert_eq!(BanStatus::None.to_string(), "not banned");
        assert_eq!(BanStatus::Permanent.to_string(), "permanent");
        assert_eq!(BanStatus::InvalidEndDate.to_string(), "invalid end date");
        assert_eq!(BanStatus::Expired.to_string(), "expired");
        let active = BanStatus::Active {
            remaining: Remaining { years: 0, months: 0, days: 4 },
        };
        assert_eq!(active.to_string(), "4 days");
    }

    #[rstest]
    fn record_deserializes_from_api_json() {
        let record: BanRecord =
            serde_json::from_str(r#"{"duration":"Permanent","end":null}"#).unwrap();
        assert_eq!(record.duration.as_deref(), Some("Permanent"));
        assert!(record.end.is_none());
    }
}
