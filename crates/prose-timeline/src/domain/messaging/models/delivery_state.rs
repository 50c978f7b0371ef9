// prose-core-client/prose-timeline
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::{Display, EnumDiscriminants};

use super::RetryCapability;

/// Where a message currently stands between the local client and the server.
#[derive(Debug, Clone, PartialEq, Eq, Display, EnumDiscriminants)]
#[strum(serialize_all = "snake_case")]
#[strum_discriminants(name(DeliveryStatus), derive(Hash, Display))]
pub enum DeliveryState {
    /// The server acknowledged the message.
    Confirmed,
    /// The message was sent by the local client but is not yet acknowledged.
    Pending { retry: Option<RetryCapability> },
    /// Sending the message failed. Without a retry capability the failure is terminal.
    Failed { retry: Option<RetryCapability> },
}

impl DeliveryState {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, DeliveryState::Confirmed)
    }

    /// Local messages (pending or failed) only exist on this client.
    pub fn is_local(&self) -> bool {
        !self.is_confirmed()
    }

    pub fn retry(&self) -> Option<&RetryCapability> {
        match self {
            DeliveryState::Confirmed => None,
            DeliveryState::Pending { retry } | DeliveryState::Failed { retry } => retry.as_ref(),
        }
    }

    pub fn status(&self) -> DeliveryStatus {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_status() {
        assert_eq!(DeliveryState::Confirmed.status(), DeliveryStatus::Confirmed);
        assert_eq!(
            DeliveryState::Failed { retry: None }.status(),
            DeliveryStatus::Failed
        );
        assert_eq!(DeliveryState::Pending { retry: None }.to_string(), "pending");
    }

    #[test]
    fn test_exposes_retry_capability_of_local_messages_only() {
        let capability = RetryCapability::new(|| {});

        assert!(DeliveryState::Confirmed.retry().is_none());
        assert_eq!(
            DeliveryState::Failed {
                retry: Some(capability.clone())
            }
            .retry(),
            Some(&capability)
        );
        assert!(DeliveryState::Pending { retry: None }.retry().is_none());
        assert!(DeliveryState::Pending { retry: None }.is_local());
    }
}
