// prose-core-client/prose-timeline
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

pub use degradation_sink::{DegradationSink, TracingDegradationSink};
pub use local_user_predicate::LocalUserPredicate;
pub use time_provider::{SystemTimeProvider, TimeProvider};
pub use timeline_config::TimelineConfig;

mod degradation_sink;
mod local_user_predicate;
mod time_provider;
mod timeline_config;

pub type DynDegradationSink = Arc<dyn DegradationSink>;
pub type DynLocalUserPredicate = Arc<dyn LocalUserPredicate>;
pub type DynTimeProvider = Arc<dyn TimeProvider>;
