// prose-core-client/prose-timeline
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineConfig {
    /// Two consecutive confirmed messages belong to different clusters if more time than this
    /// passed between them.
    pub cluster_gap: Duration,
    /// Messages younger than this are labeled "Now" instead of their clock time.
    pub just_now_threshold: Duration,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            cluster_gap: Duration::minutes(5),
            just_now_threshold: Duration::seconds(30),
        }
    }
}
