// prose-core-client/prose-timeline
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{Duration, TimeZone};
use tracing::debug;

use crate::app::deps::{DynLocalUserPredicate, LocalUserPredicate};
use crate::domain::messaging::models::Message;
use crate::domain::timeline::models::{
    DateDividerItem, DeliveryDescriptor, MessageItem, TimelineItem,
};

use super::grouping_classifier::ParsedMessage;
use super::GroupingClassifier;

/// Turns an ordered message stream into timeline items.
pub struct TimelineProjector<Tz> {
    classifier: GroupingClassifier<Tz>,
    local_user: DynLocalUserPredicate,
    just_now_threshold: Duration,
}

impl<Tz: TimeZone> TimelineProjector<Tz> {
    pub fn new(
        classifier: GroupingClassifier<Tz>,
        local_user: DynLocalUserPredicate,
        just_now_threshold: Duration,
    ) -> Self {
        Self {
            classifier,
            local_user,
            just_now_threshold,
        }
    }

    pub fn classifier(&self) -> &GroupingClassifier<Tz> {
        &self.classifier
    }

    /// Emits exactly one `TimelineItem::Message` per message in `stream`, in stream order, with a
    /// `TimelineItem::DateDivider` in front of every message that starts a new local day.
    pub fn project(&self, stream: &[Message]) -> Vec<TimelineItem> {
        let messages = stream.iter().map(ParsedMessage::new).collect::<Vec<_>>();
        let is_from_self = stream
            .iter()
            .map(|message| self.local_user.is_local_user(&message.sender_id))
            .collect::<Vec<_>>();

        let mut items = Vec::with_capacity(messages.len());
        // Messages with broken timestamps don't hide a day change from the messages after them.
        let mut previous_sent_at = None;

        for (idx, message) in messages.iter().enumerate() {
            let next = messages.get(idx + 1);

            let is_next_same_sender = next
                .filter(|next| next.message.delivery_state.is_confirmed())
                .map(|_| is_from_self[idx + 1] == is_from_self[idx]);

            let decoration = self.classifier.classify_parsed(
                message,
                previous_sent_at,
                next,
                is_next_same_sender.unwrap_or(false),
            );

            let sent_at = message.valid_sent_at();

            if decoration.is_new_day {
                if let Some(sent_at) = sent_at {
                    items.push(TimelineItem::DateDivider(DateDividerItem {
                        date: self.classifier.local_date(&sent_at),
                        message_id: message.message.id.clone(),
                    }));
                }
            }

            items.push(TimelineItem::Message(MessageItem {
                message: message.message.clone(),
                is_first_of_day_after_divider: decoration.is_new_day,
                needs_tail: decoration.needs_tail,
                is_last_in_cluster: decoration.is_last_in_cluster,
                is_from_self: is_from_self[idx],
                is_followed_by_other_sender: is_next_same_sender == Some(false),
                delivery: DeliveryDescriptor::resolve(
                    &message.message.id,
                    &message.message.delivery_state,
                    sent_at,
                    self.just_now_threshold,
                ),
            }));

            previous_sent_at = sent_at.or(previous_sent_at);
        }

        debug!(
            "Projected {} messages into {} timeline items.",
            stream.len(),
            items.len()
        );

        items
    }
}
