// prose-core-client/prose-timeline
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::SenderId;

/// Tells whether a sender is the user of this client.
pub trait LocalUserPredicate: Send + Sync {
    fn is_local_user(&self, sender_id: &SenderId) -> bool;
}

impl LocalUserPredicate for SenderId {
    fn is_local_user(&self, sender_id: &SenderId) -> bool {
        self == sender_id
    }
}

impl<F> LocalUserPredicate for F
where
    F: Fn(&SenderId) -> bool + Send + Sync,
{
    fn is_local_user(&self, sender_id: &SenderId) -> bool {
        self(sender_id)
    }
}
