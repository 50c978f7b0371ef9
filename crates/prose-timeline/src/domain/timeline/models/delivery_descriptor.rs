// prose-core-client/prose-timeline
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Duration, Utc};
use strum_macros::Display;
use tracing::info;

use crate::domain::messaging::models::{
    DeliveryState, DeliveryStatus, MessageId, RetryCapability,
};

use super::RelativeTimestamp;

/// What is displayed alongside the timestamp of a message.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryDescriptor {
    pub status: DeliveryStatus,
    pub timestamp: RelativeTimestamp,
    pub caption: Option<DeliveryCaption>,
    pub retry: Option<RetryAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DeliveryCaption {
    #[strum(to_string = "Failed to send")]
    Failed,
}

/// The retry affordance of a failed message.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryAction {
    message_id: MessageId,
    capability: RetryCapability,
}

impl DeliveryDescriptor {
    pub(crate) fn resolve(
        message_id: &MessageId,
        state: &DeliveryState,
        sent_at: Option<DateTime<Utc>>,
        just_now_threshold: Duration,
    ) -> Self {
        let timestamp = RelativeTimestamp::new(sent_at, just_now_threshold);

        let (caption, retry) = match state {
            DeliveryState::Confirmed | DeliveryState::Pending { .. } => (None, None),
            DeliveryState::Failed { retry } => (
                Some(DeliveryCaption::Failed),
                retry.as_ref().map(|capability| RetryAction {
                    message_id: message_id.clone(),
                    capability: capability.clone(),
                }),
            ),
        };

        DeliveryDescriptor {
            status: state.status(),
            timestamp,
            caption,
            retry,
        }
    }

    /// Pending and failed messages are rendered dimmed since they only exist on this client.
    pub fn is_local(&self) -> bool {
        self.status != DeliveryStatus::Confirmed
    }
}

impl RetryAction {
    pub fn message_id(&self) -> &MessageId {
        &self.message_id
    }

    /// Hands the retry over to the transport. Every activation invokes the capability once.
    pub fn activate(&self) {
        info!("Retrying to send message {}…", self.message_id);
        self.capability.invoke();
    }
}
