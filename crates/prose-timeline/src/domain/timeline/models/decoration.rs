// prose-core-client/prose-timeline
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

/// The grouping decisions for a single message relative to its neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decoration {
    /// The message starts a new calendar day and must be preceded by a date divider.
    pub is_new_day: bool,
    /// No confirmed message of the same calendar day follows.
    pub is_last_of_day: bool,
    /// The bubble is drawn with a tail on the sender's side.
    pub needs_tail: bool,
    /// The message closes its visual cluster, i.e. its metadata is displayed below it.
    pub is_last_in_cluster: bool,
}

impl Decoration {
    /// The decoration of a message that could not be put into relation with its neighbors.
    pub fn singleton() -> Self {
        Decoration {
            is_new_day: false,
            is_last_of_day: true,
            needs_tail: true,
            is_last_in_cluster: true,
        }
    }
}
