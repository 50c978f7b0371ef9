// prose-core-client/prose-timeline
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::messaging::models::{MessageId, TimestampError};

/// A message that could not be classified and was displayed as its own cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct Degradation {
    pub message_id: MessageId,
    pub error: TimestampError,
}
