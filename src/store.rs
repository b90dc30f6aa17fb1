//! Thread-safe store holding the current state snapshot of one reducer.
//!
//! Dispatch is serialized: one action is reduced, published and handed to
//! every subscriber before an action from another thread is admitted. Readers get `Arc` snapshots that never change after
//! they are handed out.

use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, ReentrantMutex, RwLock};

use crate::mvi::Reducer;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// Cloneable store handle. Clones share the same state.
pub struct Store<R: Reducer> {
    inner: Arc<StoreInner<R::State>>,
    _reducer: PhantomData<fn() -> R>,
}

struct StoreInner<S> {
    /// Held from reduce through notification. Reentrant so a subscriber
    /// may dispatch on the same thread.
    dispatching: ReentrantMutex<()>,
    /// Current snapshot. Held for the whole reduce step.
    state: Mutex<Arc<S>>,
    subscribers: RwLock<Vec<(SubscriptionId, Subscriber<S>)>>,
    next_subscription: AtomicU64,
    dispatched: AtomicU64,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            _reducer: PhantomData,
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reducer> Store<R> {
    /// Create a store starting from the reducer's default state.
    pub fn new() -> Self {
        Self::with_state(R::State::default())
    }

    /// Create a store starting from a given state (e.g. a saved snapshot).
    pub fn with_state(state: R::State) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                dispatching: ReentrantMutex::new(()),
                state: Mutex::new(Arc::new(state)),
                subscribers: RwLock::new(Vec::new()),
                next_subscription: AtomicU64::new(0),
                dispatched: AtomicU64::new(0),
            }),
            _reducer: PhantomData,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> Arc<R::State> {
        Arc::clone(&self.inner.state.lock())
    }

    /// Number of actions dispatched so far.
    pub fn dispatch_count(&self) -> u64 {
        self.inner.dispatched.load(Ordering::Acquire)
    }

    /// Register a callback invoked with every new state.
    pub fn subscribe<F>(&self, subscriber: F) -> SubscriptionId
    where
        F: Fn(&R::State) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.inner.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.inner.subscribers.write().push((id, Arc::new(subscriber)));
        id
    }

    /// Remove a subscriber. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.inner.subscribers.write();
        let before = subscribers.len();
        subscribers.retain(|(sub_id, _)| *sub_id != id);
        subscribers.len() != before
    }
}

impl<R> Store<R>
where
    R: Reducer,
    R::Action: fmt::Display,
{
    /// Reduce `action` into the current state, publish the result and
    /// notify subscribers.
    ///
    /// Dispatches from other threads wait until every subscriber has seen
    /// this state. Subscribers run without the state lock, so they may read
    /// the store or dispatch further actions on the same thread.
    pub fn dispatch(&self, action: R::Action) -> Arc<R::State> {
        let _dispatching = self.inner.dispatching.lock();
        let label = action.to_string();

        let next = {
            let mut guard = self.inner.state.lock();
            let current = std::mem::take(&mut *guard);
            let next = Arc::new(R::reduce(Arc::unwrap_or_clone(current), action));
            *guard = Arc::clone(&next);
            next
        };

        let count = self.inner.dispatched.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::debug!(action = %label, dispatch = count, "Dispatched action");

        let subscribers: Vec<Subscriber<R::State>> = self
            .inner
            .subscribers
            .read()
            .iter()
            .map(|(_, sub)| Arc::clone(sub))
            .collect();
        for subscriber in subscribers {
            subscriber(&next);
        }

        next
    }
}
