// prose-core-client/prose-timeline
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// The raw sending date of a message as delivered by the transport (RFC 3339).
///
/// The value is kept verbatim and only parsed when a timeline is derived so that a single
/// malformed timestamp never prevents the remaining messages from being displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampError {
    #[error("Missing timestamp")]
    Missing,
    #[error("Malformed timestamp '{value}': {error}")]
    Malformed {
        value: String,
        error: chrono::ParseError,
    },
}

impl Timestamp {
    pub fn parse(&self) -> Result<DateTime<Utc>, TimestampError> {
        let value = self.0.trim();

        if value.is_empty() {
            return Err(TimestampError::Missing);
        }

        DateTime::parse_from_rfc3339(value)
            .map(|date| date.with_timezone(&Utc))
            .map_err(|error| TimestampError::Malformed {
                value: value.to_string(),
                error,
            })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Timestamp(value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl From<&str> for Timestamp {
    fn from(value: &str) -> Self {
        Timestamp(value.to_string())
    }
}

impl From<String> for Timestamp {
    fn from(value: String) -> Self {
        Timestamp(value)
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parses_rfc3339_with_offset() {
        let timestamp = Timestamp::from("2024-01-02T01:30:00+02:00");
        assert_eq!(
            timestamp.parse(),
            Ok(Utc.with_ymd_and_hms(2024, 1, 1, 23, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_round_trips_utc_dates() {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 23, 59, 0).unwrap();
        assert_eq!(Timestamp::from(date).as_str(), "2024-01-01T23:59:00.000Z");
        assert_eq!(Timestamp::from(date).parse(), Ok(date));
    }

    #[test]
    fn test_reports_missing_timestamp() {
        assert_eq!(Timestamp::from("").parse(), Err(TimestampError::Missing));
        assert_eq!(Timestamp::from("  ").parse(), Err(TimestampError::Missing));
    }

    #[test]
    fn test_reports_malformed_timestamp() {
        let Err(TimestampError::Malformed { value, .. }) = Timestamp::from("yesterday").parse()
        else {
            panic!("Expected a malformed timestamp error");
        };
        assert_eq!(value, "yesterday");
    }
}
