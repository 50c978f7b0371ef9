// prose-core-client/prose-timeline
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::deps::{
    DegradationSink, LocalUserPredicate, SystemTimeProvider, TimeProvider, TimelineConfig,
    TracingDegradationSink,
};
pub use app::dtos;
pub use app::services::{Timeline, TimelineBuilder};

pub mod app;
pub(crate) mod domain;

#[cfg(any(test, feature = "test"))]
pub mod test;
