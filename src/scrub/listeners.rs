//! Input subscription ownership.
//!
//! All listener (de)registration goes through [`ListenerSet::install`], which
//! always unregisters whatever it installed before registering again. Calling
//! it from a path that runs more than once (readiness firing twice, a source
//! swap) therefore never accumulates duplicate listeners.

use tracing::debug;

/// Where a subscription listens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerScope {
    /// Pointer down/move/leave on the timeline element (and its thumb)
    TimelinePointer,
    /// Pointer move/up anywhere in the document
    DocumentPointer,
    /// Window resize
    WindowResize,
}

impl ListenerScope {
    /// Every scope the controller needs.
    pub const ALL: [ListenerScope; 3] = [
        ListenerScope::TimelinePointer,
        ListenerScope::DocumentPointer,
        ListenerScope::WindowResize,
    ];
}

/// Handle returned by the host for one subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Host input capability.
pub trait InputRegistry {
    fn subscribe(&mut self, scope: ListenerScope) -> SubscriptionId;
    fn unsubscribe(&mut self, id: SubscriptionId);
}

/// The subscriptions owned by one controller.
#[derive(Debug, Default)]
pub struct ListenerSet {
    active: Vec<(ListenerScope, SubscriptionId)>,
}

impl ListenerSet {
    /// Register one subscription per scope, dropping any previous ones first.
    pub fn install(&mut self, registry: &mut dyn InputRegistry, scopes: &[ListenerScope]) {
        self.uninstall(registry);
        for &scope in scopes {
            let id = registry.subscribe(scope);
            self.active.push((scope, id));
        }
        debug!(count = self.active.len(), "installed input listeners");
    }

    /// Unregister everything this set installed. Idempotent.
    pub fn uninstall(&mut self, registry: &mut dyn InputRegistry) {
        for (_, id) in self.active.drain(..) {
            registry.unsubscribe(id);
        }
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn contains(&self, scope: ListenerScope) -> bool {
        self.active.iter().any(|(s, _)| *s == scope)
    }
}
