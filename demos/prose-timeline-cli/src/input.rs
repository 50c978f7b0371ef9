// prose-core-client/prose-timeline-cli
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::Deserialize;
use tracing::info;

use prose_timeline::dtos::{
    DeliveryState, Facet, Message, MessageId, RetryCapability, SenderId, Timestamp,
};

/// A message as found in the JSON input file.
#[derive(Debug, Deserialize)]
pub struct InputMessage {
    pub id: MessageId,
    pub sender: SenderId,
    pub sent_at: Timestamp,
    pub text: String,
    #[serde(default)]
    pub facets: Vec<Facet>,
    #[serde(default)]
    pub state: InputDeliveryState,
    /// Pending and failed messages get a retry capability if set.
    #[serde(default)]
    pub retryable: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputDeliveryState {
    #[default]
    Confirmed,
    Pending,
    Failed,
}

impl From<InputMessage> for Message {
    fn from(value: InputMessage) -> Self {
        let retry = value.retryable.then(|| {
            let id = value.id.clone();
            RetryCapability::new(move || info!("Transport asked to resend message {}.", id))
        });

        let delivery_state = match value.state {
            InputDeliveryState::Confirmed => DeliveryState::Confirmed,
            InputDeliveryState::Pending => DeliveryState::Pending { retry },
            InputDeliveryState::Failed => DeliveryState::Failed { retry },
        };

        Message {
            id: value.id,
            sender_id: value.sender,
            sent_at: value.sent_at,
            text: value.text,
            facets: value.facets,
            delivery_state,
        }
    }
}
