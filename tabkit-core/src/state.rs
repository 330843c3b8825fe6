//! Shared tab selection state.
//!
//! A [`TabsState`] is the single source of truth for one tabs root. It holds
//! the active [`TabId`] (or delegates it to an external owner), the
//! [`ActivationMode`], the change callback, and an explicit list of
//! recompute callbacks that consumers register to be told about changes.
//!
//! # Ownership
//!
//! Selection is modelled as a tagged variant rather than "is a value
//! present" branching:
//!
//! - **Owned** (uncontrolled): the state stores the selection and
//!   [`TabsState::set_active`] writes it.
//! - **Delegated** (controlled): an external accessor is the only source of
//!   truth. [`TabsState::set_active`] only forwards the request to the change
//!   callback; the selection moves when the owner changes what its accessor
//!   returns.
//!
//! ```rust
//! use tabkit_core::{TabsOptions, TabsState};
//!
//! let state = TabsState::new(TabsOptions::new().default_value("overview"));
//! state.set_active("details");
//! assert_eq!(state.active().unwrap(), "details");
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, trace, warn};

use crate::{ActivationMode, TabId};

/// External accessor for a controlled selection.
pub type ValueSource = Arc<dyn Fn() -> Option<TabId> + Send + Sync>;

/// Callback invoked with the requested id on every activation request.
pub type ChangeCallback = Arc<dyn Fn(&TabId) + Send + Sync>;

type Subscriber = Arc<dyn Fn(Option<&TabId>) + Send + Sync>;

/// Handle returned by [`TabsState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Configuration for a tabs root.
#[derive(Clone, Default)]
pub struct TabsOptions {
    default_value: Option<TabId>,
    controlled: Option<ValueSource>,
    on_value_change: Option<ChangeCallback>,
    mode: ActivationMode,
}

impl TabsOptions {
    /// Uncontrolled, nothing active, [`ActivationMode::Auto`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial selection for uncontrolled mode. Ignored when controlled.
    pub fn default_value(mut self, value: impl Into<TabId>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Like [`TabsOptions::default_value`] but accepts an absent value.
    pub fn maybe_default_value(mut self, value: Option<TabId>) -> Self {
        self.default_value = value;
        self
    }

    /// Switches to controlled mode, reading the selection from `source`.
    pub fn controlled<F>(mut self, source: F) -> Self
    where
        F: Fn() -> Option<TabId> + Send + Sync + 'static,
    {
        self.controlled = Some(Arc::new(source));
        self
    }

    /// Switches to controlled mode with a fixed external value.
    ///
    /// `None` is an explicit "nothing active" and still counts as controlled.
    pub fn controlled_value(self, value: Option<TabId>) -> Self {
        self.controlled(move || value.clone())
    }

    /// Callback for every activation request, in both modes.
    pub fn on_value_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&TabId) + Send + Sync + 'static,
    {
        self.on_value_change = Some(Arc::new(callback));
        self
    }

    /// Sets the activation mode.
    pub fn activation_mode(mut self, mode: ActivationMode) -> Self {
        self.mode = mode;
        self
    }
}

impl fmt::Debug for TabsOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabsOptions")
            .field("default_value", &self.default_value)
            .field("controlled", &self.controlled.is_some())
            .field("on_value_change", &self.on_value_change.is_some())
            .field("mode", &self.mode)
            .finish()
    }
}

enum Selection {
    Owned(RwLock<Option<TabId>>),
    Delegated(ValueSource),
}

struct Shared {
    selection: Selection,
    mode: ActivationMode,
    on_value_change: Option<ChangeCallback>,
    subscribers: RwLock<Vec<(SubscriptionId, Subscriber)>>,
    next_subscription: AtomicU64,
    triggers: RwLock<Vec<TabId>>,
}

/// Selection state of one tabs root. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct TabsState {
    shared: Arc<Shared>,
}

impl TabsState {
    /// Initializes a root from its options.
    pub fn new(options: TabsOptions) -> Self {
        let TabsOptions {
            default_value,
            controlled,
            on_value_change,
            mode,
        } = options;

        let selection = match controlled {
            Some(source) => {
                if on_value_change.is_none() {
                    warn!("controlled tabs root has no on_value_change; activation requests will be dropped");
                }
                Selection::Delegated(source)
            }
            None => Selection::Owned(RwLock::new(default_value)),
        };

        Self {
            shared: Arc::new(Shared {
                selection,
                mode,
                on_value_change,
                subscribers: RwLock::new(Vec::new()),
                next_subscription: AtomicU64::new(0),
                triggers: RwLock::new(Vec::new()),
            }),
        }
    }

    /// Whether the selection is delegated to an external owner.
    pub fn is_controlled(&self) -> bool {
        matches!(self.shared.selection, Selection::Delegated(_))
    }

    /// The active tab, if any.
    pub fn active(&self) -> Option<TabId> {
        match &self.shared.selection {
            Selection::Owned(current) => read(current).clone(),
            Selection::Delegated(source) => source(),
        }
    }

    /// Whether `id` is the active tab.
    pub fn is_active(&self, id: &TabId) -> bool {
        match &self.shared.selection {
            Selection::Owned(current) => read(current).as_ref() == Some(id),
            Selection::Delegated(source) => source().as_ref() == Some(id),
        }
    }

    /// The activation mode this root was created with.
    pub fn mode(&self) -> ActivationMode {
        self.shared.mode
    }

    /// Requests activation of `id`.
    ///
    /// Uncontrolled roots store the id, run every subscriber, then the change
    /// callback. Controlled roots only run the change callback.
    pub fn set_active(&self, id: impl Into<TabId>) {
        let id = id.into();

        match &self.shared.selection {
            Selection::Owned(current) => {
                let changed = {
                    let mut slot = write(current);
                    let changed = slot.as_ref() != Some(&id);
                    *slot = Some(id.clone());
                    changed
                };
                debug!(tab = %id, changed, "activated tab");
                if changed {
                    self.notify(Some(&id));
                }
            }
            Selection::Delegated(_) => {
                debug!(tab = %id, "forwarding activation to controlling owner");
            }
        }

        if let Some(callback) = &self.shared.on_value_change {
            callback(&id);
        }
    }

    /// Re-runs subscribers against the current selection.
    ///
    /// Controlled owners call this after changing what their accessor
    /// returns. Uncontrolled roots never need it.
    pub fn sync(&self) {
        let active = self.active();
        self.notify(active.as_ref());
    }

    /// Registers a recompute callback, run synchronously after each change.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Option<&TabId>) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.shared.next_subscription.fetch_add(1, Ordering::Relaxed));
        write(&self.shared.subscribers).push((id, Arc::new(callback)));
        trace!(subscription = id.0, "subscribed to tab changes");
        id
    }

    /// Removes a recompute callback. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = write(&self.shared.subscribers);
        let before = subscribers.len();
        subscribers.retain(|(sub, _)| *sub != id);
        subscribers.len() != before
    }

    /// Records a trigger in focus order. Re-registering keeps the first slot.
    pub fn register_trigger(&self, id: &TabId) {
        let mut triggers = write(&self.shared.triggers);
        if !triggers.contains(id) {
            triggers.push(id.clone());
        }
    }

    /// Forgets a trigger, e.g. when its component is torn down.
    pub fn unregister_trigger(&self, id: &TabId) {
        write(&self.shared.triggers).retain(|t| t != id);
    }

    /// Registered triggers in focus order.
    pub fn triggers(&self) -> Vec<TabId> {
        read(&self.shared.triggers).clone()
    }

    fn notify(&self, active: Option<&TabId>) {
        let subscribers: Vec<Subscriber> = read(&self.shared.subscribers)
            .iter()
            .map(|(_, sub)| Arc::clone(sub))
            .collect();
        debug!(count = subscribers.len(), "notifying tab subscribers");
        for subscriber in subscribers {
            subscriber(active);
        }
    }
}

impl fmt::Debug for TabsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabsState")
            .field("active", &self.active())
            .field("mode", &self.shared.mode)
            .field("controlled", &self.is_controlled())
            .finish()
    }
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
