// prose-core-client/prose-timeline
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use day_label::DayLabel;
pub use decoration::Decoration;
pub use degradation::Degradation;
pub use delivery_descriptor::{DeliveryCaption, DeliveryDescriptor, RetryAction};
pub use relative_timestamp::{RelativeTimestamp, TimeLabel};
pub use timeline_item::{cluster_flips, DateDividerItem, MessageItem, TimelineItem, TimelineItemId};

mod day_label;
mod decoration;
mod degradation;
mod delivery_descriptor;
mod relative_timestamp;
mod timeline_item;
