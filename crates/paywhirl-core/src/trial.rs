//! Trial-end values for new subscriptions.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;

/// When a subscription's trial period ends.
///
/// PayWhirl accepts either a calendar date or a unix timestamp. Anything
/// else can be passed through untouched with [`TrialEnd::Raw`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrialEnd {
    /// A calendar date, sent as `YYYY-MM-DD`.
    Date(NaiveDate),
    /// Seconds since the unix epoch.
    Timestamp(i64),
    /// A value sent exactly as given.
    Raw(String),
}

impl fmt::Display for TrialEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Timestamp(ts) => write!(f, "{ts}"),
            Self::Raw(raw) => f.write_str(raw),
        }
    }
}

impl Serialize for TrialEnd {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Timestamp(ts) => serializer.serialize_i64(*ts),
            other => serializer.collect_str(other),
        }
    }
}

impl From<NaiveDate> for TrialEnd {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<i64> for TrialEnd {
    fn from(ts: i64) -> Self {
        Self::Timestamp(ts)
    }
}

impl From<&str> for TrialEnd {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_string())
    }
}

impl From<String> for TrialEnd {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_renders_iso() {
        let end = TrialEnd::from(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(end.to_string(), "2025-01-01");
        assert_eq!(serde_json::to_value(&end).unwrap(), "2025-01-01");
    }

    #[test]
    fn timestamp_serializes_as_number() {
        let end = TrialEnd::from(1_735_689_600_i64);
        assert_eq!(serde_json::to_value(&end).unwrap(), 1_735_689_600_i64);
    }

    #[test]
    fn raw_passes_through() {
        let end = TrialEnd::from("next month");
        assert_eq!(serde_json::to_value(&end).unwrap(), "next month");
    }
}
