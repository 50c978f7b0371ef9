// prose-core-client/prose-timeline
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use timeline::Timeline;
pub use timeline_builder::{TimelineBuilder, UndefinedLocalUser};

mod timeline;
mod timeline_builder;
