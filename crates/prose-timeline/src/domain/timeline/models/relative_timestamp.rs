// prose-core-client/prose-timeline
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Duration, TimeZone, Timelike, Utc};

/// The rule used to render the time next to a message.
///
/// A `RelativeTimestamp` doesn't carry a rendered string. Hosts re-evaluate `label` whenever
/// their clock ticks so that "Now" turns into the clock time without a new message arriving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeTimestamp {
    sent_at: Option<DateTime<Utc>>,
    just_now_threshold: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeLabel {
    JustNow,
    Clock { hour: u32, minute: u32 },
    /// The message has no usable timestamp.
    Unavailable,
}

impl RelativeTimestamp {
    pub fn new(sent_at: Option<DateTime<Utc>>, just_now_threshold: Duration) -> Self {
        Self {
            sent_at,
            just_now_threshold,
        }
    }

    pub fn sent_at(&self) -> Option<DateTime<Utc>> {
        self.sent_at
    }

    pub fn label<Tz: TimeZone>(&self, now: DateTime<Utc>, timezone: &Tz) -> TimeLabel {
        let Some(sent_at) = self.sent_at else {
            return TimeLabel::Unavailable;
        };

        if now - sent_at < self.just_now_threshold {
            return TimeLabel::JustNow;
        }

        let local = sent_at.with_timezone(timezone);
        TimeLabel::Clock {
            hour: local.hour(),
            minute: local.minute(),
        }
    }
}

impl Display for TimeLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeLabel::JustNow => write!(f, "Now"),
            TimeLabel::Clock { hour, minute } => write!(f, "{:02}:{:02}", hour, minute),
            TimeLabel::Unavailable => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;
    use pretty_assertions::assert_eq;

    use super::*;

    fn timestamp(sent_at: DateTime<Utc>) -> RelativeTimestamp {
        RelativeTimestamp::new(Some(sent_at), Duration::seconds(30))
    }

    #[test]
    fn test_just_now_boundary() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 14, 5, 0).unwrap();

        assert_eq!(
            timestamp(now - Duration::seconds(29)).label(now, &Utc),
            TimeLabel::JustNow
        );
        assert_eq!(
            timestamp(now - Duration::seconds(30)).label(now, &Utc),
            TimeLabel::Clock { hour: 14, minute: 4 }
        );
        assert_eq!(
            timestamp(now - Duration::seconds(31)).label(now, &Utc).to_string(),
            "14:04"
        );
    }

    #[test]
    fn test_future_timestamps_are_just_now() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 14, 5, 0).unwrap();
        assert_eq!(
            timestamp(now + Duration::minutes(2)).label(now, &Utc),
            TimeLabel::JustNow
        );
    }

    #[test]
    fn test_clock_uses_local_time() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 14, 5, 0).unwrap();
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            timestamp(now - Duration::hours(1)).label(now, &tz).to_string(),
            "15:05"
        );
    }

    #[test]
    fn test_missing_timestamp() {
        let label = RelativeTimestamp::new(None, Duration::seconds(30))
            .label(Utc::now(), &Utc);
        assert_eq!(label, TimeLabel::Unavailable);
        assert_eq!(label.to_string(), "");
    }
}
