// prose-core-client/prose-timeline
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use crate::app::deps::{DegradationSink, DynDegradationSink};
use crate::domain::messaging::models::{Message, TimestampError};
use crate::domain::timeline::models::{Decoration, Degradation};

/// Decides how a message is grouped with its direct neighbors.
pub struct GroupingClassifier<Tz> {
    timezone: Tz,
    cluster_gap: Duration,
    degradation_sink: DynDegradationSink,
}

/// A message together with its parsed timestamp.
pub(crate) struct ParsedMessage<'a> {
    pub message: &'a Message,
    pub sent_at: Result<DateTime<Utc>, TimestampError>,
}

impl<'a> ParsedMessage<'a> {
    pub fn new(message: &'a Message) -> Self {
        Self {
            message,
            sent_at: message.sent_at.parse(),
        }
    }

    pub fn valid_sent_at(&self) -> Option<DateTime<Utc>> {
        self.sent_at.as_ref().ok().copied()
    }
}

impl<Tz: TimeZone> GroupingClassifier<Tz> {
    pub fn new(timezone: Tz, cluster_gap: Duration, degradation_sink: DynDegradationSink) -> Self {
        Self {
            timezone,
            cluster_gap,
            degradation_sink,
        }
    }

    pub fn timezone(&self) -> &Tz {
        &self.timezone
    }

    /// Classifies `message` given its neighbors in timeline order.
    ///
    /// `is_next_same_sender` must only be `true` if `next` is a confirmed message whose sender is
    /// on the same side of the conversation as the sender of `message`.
    pub fn classify(
        &self,
        message: &Message,
        previous: Option<&Message>,
        next: Option<&Message>,
        is_next_same_sender: bool,
    ) -> Decoration {
        let previous_sent_at = previous.and_then(|previous| previous.sent_at.parse().ok());
        let next = next.map(ParsedMessage::new);

        self.classify_parsed(
            &ParsedMessage::new(message),
            previous_sent_at,
            next.as_ref(),
            is_next_same_sender,
        )
    }

    /// `previous_sent_at` is the timestamp of the closest earlier message that has a valid one.
    pub(crate) fn classify_parsed(
        &self,
        message: &ParsedMessage<'_>,
        previous_sent_at: Option<DateTime<Utc>>,
        next: Option<&ParsedMessage<'_>>,
        is_next_same_sender: bool,
    ) -> Decoration {
        let sent_at = match &message.sent_at {
            Ok(sent_at) => *sent_at,
            Err(error) => {
                self.degradation_sink.report(&Degradation {
                    message_id: message.message.id.clone(),
                    error: error.clone(),
                });
                return Decoration::singleton();
            }
        };

        let day = self.local_date(&sent_at);

        // There's no divider before the very first message of the stream.
        let is_new_day = previous_sent_at.is_some_and(|previous| self.local_date(&previous) != day);

        // Pending and failed messages never continue the cluster of a preceding message.
        let next_sent_at = next
            .filter(|next| next.message.delivery_state.is_confirmed())
            .and_then(ParsedMessage::valid_sent_at);

        let is_last_of_day = next_sent_at.map_or(true, |next| self.local_date(&next) != day);
        let needs_tail = is_last_of_day || !is_next_same_sender;

        let is_last_in_cluster = if message.message.delivery_state.is_local() {
            true
        } else {
            next_sent_at.map_or(true, |next| next - sent_at > self.cluster_gap)
        };

        Decoration {
            is_new_day,
            is_last_of_day,
            needs_tail,
            is_last_in_cluster,
        }
    }

    pub(crate) fn local_date(&self, date: &DateTime<Utc>) -> NaiveDate {
        date.with_timezone(&self.timezone).date_naive()
    }
}
