// prose-core-client/prose-timeline
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use chrono::{Local, TimeZone};

use crate::app::deps::{
    DegradationSink, DynDegradationSink, DynLocalUserPredicate, DynTimeProvider,
    LocalUserPredicate, SystemTimeProvider, TimeProvider, TimelineConfig, TracingDegradationSink,
};
use crate::domain::timeline::services::{GroupingClassifier, TimelineProjector};

use super::Timeline;

pub struct UndefinedLocalUser;

pub struct TimelineBuilder<L, Tz> {
    config: TimelineConfig,
    degradation_sink: DynDegradationSink,
    local_user: L,
    time_provider: DynTimeProvider,
    timezone: Tz,
}

impl TimelineBuilder<UndefinedLocalUser, Local> {
    pub(crate) fn new() -> Self {
        TimelineBuilder {
            config: Default::default(),
            degradation_sink: Arc::new(TracingDegradationSink::default()),
            local_user: UndefinedLocalUser,
            time_provider: Arc::new(SystemTimeProvider::default()),
            timezone: Local,
        }
    }
}

impl<Tz> TimelineBuilder<UndefinedLocalUser, Tz> {
    pub fn set_local_user<P: LocalUserPredicate + 'static>(
        self,
        local_user: P,
    ) -> TimelineBuilder<DynLocalUserPredicate, Tz> {
        TimelineBuilder {
            config: self.config,
            degradation_sink: self.degradation_sink,
            local_user: Arc::new(local_user),
            time_provider: self.time_provider,
            timezone: self.timezone,
        }
    }
}

impl<L, Tz> TimelineBuilder<L, Tz> {
    /// Sets the time zone in which calendar days and clock times are computed.
    pub fn set_timezone<Tz2: TimeZone>(self, timezone: Tz2) -> TimelineBuilder<L, Tz2> {
        TimelineBuilder {
            config: self.config,
            degradation_sink: self.degradation_sink,
            local_user: self.local_user,
            time_provider: self.time_provider,
            timezone,
        }
    }

    pub fn set_config(mut self, config: TimelineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn set_time_provider<T: TimeProvider + 'static>(mut self, time_provider: T) -> Self {
        self.time_provider = Arc::new(time_provider);
        self
    }

    pub fn set_degradation_sink<S: DegradationSink + 'static>(mut self, sink: S) -> Self {
        self.degradation_sink = Arc::new(sink);
        self
    }
}

impl<Tz: TimeZone> TimelineBuilder<DynLocalUserPredicate, Tz> {
    pub fn build(self) -> Timeline<Tz> {
        let classifier = GroupingClassifier::new(
            self.timezone,
            self.config.cluster_gap,
            self.degradation_sink,
        );

        Timeline {
            projector: TimelineProjector::new(
                classifier,
                self.local_user,
                self.config.just_now_threshold,
            ),
            time_provider: self.time_provider,
        }
    }
}
