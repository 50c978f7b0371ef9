// prose-core-client/prose-timeline
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use grouping_classifier::GroupingClassifier;
pub use timeline_projector::TimelineProjector;

mod grouping_classifier;
mod timeline_projector;
