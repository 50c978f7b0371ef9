// prose-core-client/prose-timeline
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use constant_time_provider::ConstantTimeProvider;
pub use message_builder::MessageBuilder;
pub use recording_degradation_sink::RecordingDegradationSink;
pub use retry_counter::RetryCounter;


pub mod mock_data {
    use chrono::{DateTime, TimeZone, Utc};

    use crate::domain::shared::models::SenderId;

    pub fn reference_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap()
    }

    pub fn local_user() -> SenderId {
        "user@prose.org".into()
    }

    pub fn other_user() -> SenderId {
        "friend@prose.org".into()
    }
}
