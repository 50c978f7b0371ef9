// prose-core-client/prose-timeline
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// A zero-argument action handed in by the transport layer which re-sends a message that could
/// not be delivered. Invoking it is fire-and-forget: the transport eventually moves the message
/// back to `Pending` and triggers a new derivation pass.
#[derive(Clone)]
pub struct RetryCapability(Arc<dyn Fn() + Send + Sync>);

impl RetryCapability {
    pub fn new(action: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(action))
    }

    pub fn invoke(&self) {
        (self.0)()
    }
}

impl Debug for RetryCapability {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RetryCapability({:p})", Arc::as_ptr(&self.0))
    }
}

/// Two capabilities are equal if they share the same action.
impl PartialEq for RetryCapability {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for RetryCapability {}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    #[test]
    fn test_invokes_action() {
        let counter = Arc::new(AtomicU32::new(0));
        let capability = RetryCapability::new({
            let counter = counter.clone();
            move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        capability.invoke();
        capability.clone().invoke();

        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_equality_is_identity() {
        let capability = RetryCapability::new(|| {});
        assert_eq!(capability, capability.clone());
        assert_ne!(capability, RetryCapability::new(|| {}));
    }
}
