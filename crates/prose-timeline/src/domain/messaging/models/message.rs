// prose-core-client/prose-timeline
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::SenderId;

use super::{DeliveryState, Facet, MessageId, Timestamp};

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub sender_id: SenderId,
    pub sent_at: Timestamp,
    pub text: String,
    pub facets: Vec<Facet>,
    pub delivery_state: DeliveryState,
}
