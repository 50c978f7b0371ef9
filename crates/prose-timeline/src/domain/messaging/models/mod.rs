// prose-core-client/prose-timeline
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use delivery_state::{DeliveryState, DeliveryStatus};
pub use facet::{Facet, FacetFeature};
pub use message::Message;
pub use message_id::MessageId;
pub use retry_capability::RetryCapability;
pub use timestamp::{Timestamp, TimestampError};

mod delivery_state;
mod facet;
mod message;
mod message_id;
mod retry_capability;
mod timestamp;
