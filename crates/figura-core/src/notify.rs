//! Synchronous change notification.

/// Receives "something changed, re-render" signals.
pub trait ChangeListener {
    fn on_change(&mut self);
}

impl<F: FnMut()> ChangeListener for F {
    fn on_change(&mut self) {
        (self)()
    }
}

/// Handle returned by [`ChangeNotifier::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Subscriber list. Notifying calls every listener before returning.
#[derive(Default)]
pub struct ChangeNotifier {
    listeners: Vec<(SubscriptionId, Box<dyn ChangeListener>)>,
    next_id: u64,
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &format!("<{} listeners>", self.listeners.len()))
            .finish()
    }
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener.
    pub fn subscribe(&mut self, listener: Box<dyn ChangeListener>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Remove a listener. Returns false if the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Invoke every listener in subscription order.
    pub fn notify(&mut self) {
        for (_, listener) in &mut self.listeners {
            listener.on_change();
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
