// prose-core-client/prose-timeline
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use crate::domain::{
    messaging::models::{
        DeliveryState, DeliveryStatus, Facet, FacetFeature, Message, MessageId, RetryCapability,
        Timestamp, TimestampError,
    },
    shared::models::SenderId,
    timeline::models::{
        cluster_flips, DateDividerItem, DayLabel, Decoration, Degradation, DeliveryCaption,
        DeliveryDescriptor, MessageItem, RelativeTimestamp, RetryAction, TimeLabel, TimelineItem,
        TimelineItemId,
    },
};
