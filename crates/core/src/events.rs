//! Typed, synchronous publish/subscribe bus.
//!
//! Events are a closed enum implementing [`BusEvent`]; handlers subscribe to
//! one event kind (the enum discriminant) or to every event. [`EventBus::emit`]
//! runs all matching handlers on the caller's stack, in registration order,
//! before it returns.

use core::fmt;

/// An event that can travel over an [`EventBus`].
pub trait BusEvent {
    /// Payload-free discriminant used for subscription filtering.
    type Kind: Copy + Eq + fmt::Debug;

    /// The kind of this event.
    fn kind(&self) -> Self::Kind;
}

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler<E> = Box<dyn Fn(&E) + Send + Sync>;

struct Subscription<E: BusEvent> {
    id: SubscriptionId,
    kind: Option<E::Kind>,
    handler: Handler<E>,
}

/// Publish/subscribe hub for events of type `E`.
pub struct EventBus<E: BusEvent> {
    subscriptions: Vec<Subscription<E>>,
    next_id: u64,
}

impl<E: BusEvent> EventBus<E> {
    /// Create a bus with no subscribers.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
            next_id: 0,
        }
    }

    /// Subscribe `handler` to events of `kind`.
    pub fn subscribe<F>(&mut self, kind: E::Kind, handler: F) -> SubscriptionId
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        self.insert(Some(kind), Box::new(handler))
    }

    /// Subscribe `handler` to every event.
    pub fn subscribe_all<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        self.insert(None, Box::new(handler))
    }

    /// Remove a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }

    /// Deliver `event` to every matching handler. Returns how many ran.
    pub fn emit(&self, event: &E) -> usize {
        let kind = event.kind();
        let mut delivered = 0;
        for subscription in &self.subscriptions {
            if subscription.kind.is_none_or(|k| k == kind) {
                (subscription.handler)(event);
                delivered += 1;
            }
        }
        delivered
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.len()
    }

    fn insert(&mut self, kind: Option<E::Kind>, handler: Handler<E>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription { id, kind, handler });
        id
    }
}

impl<E: BusEvent> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: BusEvent> fmt::Debug for EventBus<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field(
                "subscriptions",
                &self
                    .subscriptions
                    .iter()
                    .map(|s| (s.id, s.kind))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
