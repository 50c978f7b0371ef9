// prose-core-client/prose-timeline
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

/// The caption of a date divider relative to the current local day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayLabel {
    Today,
    Yesterday,
    Date(NaiveDate),
}

impl DayLabel {
    pub fn new(date: NaiveDate, today: NaiveDate) -> Self {
        if date == today {
            return DayLabel::Today;
        }
        if today.pred_opt() == Some(date) {
            return DayLabel::Yesterday;
        }
        DayLabel::Date(date)
    }
}

impl Display for DayLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DayLabel::Today => write!(f, "Today"),
            DayLabel::Yesterday => write!(f, "Yesterday"),
            DayLabel::Date(date) => write!(f, "{}", date.format("%B %-d, %Y")),
        }
    }
}
