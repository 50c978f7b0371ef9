// prose-core-client/prose-timeline
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{Local, NaiveDate, TimeZone};

use crate::app::deps::{DynTimeProvider, TimeProvider};
use crate::app::services::TimelineBuilder;
use crate::domain::messaging::models::Message;
use crate::domain::timeline::models::{
    DayLabel, Decoration, RelativeTimestamp, TimeLabel, TimelineItem,
};
use crate::domain::timeline::services::TimelineProjector;

use super::timeline_builder::UndefinedLocalUser;

/// Derives the displayable timeline of a conversation.
///
/// A `Timeline` holds no state besides its dependencies. Projecting the same stream twice yields
/// equal items.
pub struct Timeline<Tz> {
    pub(crate) projector: TimelineProjector<Tz>,
    pub(crate) time_provider: DynTimeProvider,
}

impl Timeline<Local> {
    pub fn builder() -> TimelineBuilder<UndefinedLocalUser, Local> {
        TimelineBuilder::new()
    }
}

impl<Tz: TimeZone> Timeline<Tz> {
    pub fn project(&self, stream: &[Message]) -> Vec<TimelineItem> {
        self.projector.project(stream)
    }

    pub fn classify(
        &self,
        message: &Message,
        previous: Option<&Message>,
        next: Option<&Message>,
        is_next_same_sender: bool,
    ) -> Decoration {
        self.projector
            .classifier()
            .classify(message, previous, next, is_next_same_sender)
    }

    /// Evaluates the relative time rule against the current time.
    pub fn time_label(&self, timestamp: &RelativeTimestamp) -> TimeLabel {
        timestamp.label(self.time_provider.now(), self.timezone())
    }

    pub fn day_label(&self, date: NaiveDate) -> DayLabel {
        let today = self
            .time_provider
            .now()
            .with_timezone(self.timezone())
            .date_naive();
        DayLabel::new(date, today)
    }

    pub fn timezone(&self) -> &Tz {
        self.projector.classifier().timezone()
    }
}
