// prose-core-client/prose-timeline
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::warn;

use crate::domain::timeline::models::Degradation;

/// Receives the messages that could not be classified. Reporting is fire-and-forget.
pub trait DegradationSink: Send + Sync {
    fn report(&self, degradation: &Degradation);
}

#[derive(Default)]
pub struct TracingDegradationSink {}

impl DegradationSink for TracingDegradationSink {
    fn report(&self, degradation: &Degradation) {
        warn!(
            "Displaying message {} as a single-message cluster. {}",
            degradation.message_id, degradation.error
        );
    }
}
