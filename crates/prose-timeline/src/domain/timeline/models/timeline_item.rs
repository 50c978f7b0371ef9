// prose-core-client/prose-timeline
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::messaging::models::{Message, MessageId};

use super::DeliveryDescriptor;

#[derive(Debug, Clone, PartialEq)]
pub enum TimelineItem {
    DateDivider(DateDividerItem),
    Message(MessageItem),
}

/// Marks the start of a local calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateDividerItem {
    pub date: NaiveDate,
    /// The message directly following the divider.
    pub message_id: MessageId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageItem {
    pub message: Message,
    /// The message directly follows a date divider.
    pub is_first_of_day_after_divider: bool,
    /// The bubble is drawn with a tail on the sender's side.
    pub needs_tail: bool,
    pub is_last_in_cluster: bool,
    /// The message was sent by the local user and is aligned on the trailing side.
    pub is_from_self: bool,
    /// The next message is a confirmed message from the other side of the conversation.
    pub is_followed_by_other_sender: bool,
    pub delivery: DeliveryDescriptor,
}

/// Stable identity of a timeline item across projections.
///
/// Date dividers are identified by the message they precede, since an out-of-order stream can
/// contain the same date more than once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimelineItemId {
    DateDivider(MessageId),
    Message(MessageId),
}

impl TimelineItem {
    pub fn id(&self) -> TimelineItemId {
        match self {
            TimelineItem::DateDivider(item) => TimelineItemId::DateDivider(item.message_id.clone()),
            TimelineItem::Message(item) => TimelineItemId::Message(item.message.id.clone()),
        }
    }

    pub fn as_message(&self) -> Option<&MessageItem> {
        match self {
            TimelineItem::DateDivider(_) => None,
            TimelineItem::Message(item) => Some(item),
        }
    }

    pub fn is_date_divider(&self) -> bool {
        matches!(self, TimelineItem::DateDivider(_))
    }
}

impl MessageItem {
    /// The timestamp and delivery descriptor are only displayed below the last message of a
    /// cluster.
    pub fn shows_metadata(&self) -> bool {
        self.is_last_in_cluster
    }
}

/// Returns the IDs of the messages whose `is_last_in_cluster` flag changed between two
/// projections, in the order of `current`. Hosts animate the layout of these messages.
pub fn cluster_flips(previous: &[TimelineItem], current: &[TimelineItem]) -> Vec<MessageId> {
    let previous_flags = previous
        .iter()
        .filter_map(TimelineItem::as_message)
        .map(|item| (&item.message.id, item.is_last_in_cluster))
        .collect::<HashMap<_, _>>();

    current
        .iter()
        .filter_map(TimelineItem::as_message)
        .filter(|item| {
            previous_flags
                .get(&item.message.id)
                .is_some_and(|was_last| *was_last != item.is_last_in_cluster)
        })
        .map(|item| item.message.id.clone())
        .collect()
}
