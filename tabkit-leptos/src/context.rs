//! Tabs context shared from a [`crate::components::Tabs`] root to its
//! descendants.
//!
//! The root owns a [`TabsState`]; this module bridges it into the Leptos
//! reactive graph. A subscriber on the state notifies an [`ArcTrigger`], and
//! every reactive read through [`TabsContext`] tracks that trigger, so a write
//! re-runs exactly the attribute closures that depend on the selection.
//!
//! Every consumer hook fails fast outside a root: a missing context is a
//! composition bug, not something to paper over with a default selection.

use leptos::prelude::*;
use tabkit_core::{ActivationMode, TabId, TabsError, TabsState};

/// Handle to the nearest root's state.
#[derive(Clone)]
pub struct TabsContext {
    state: TabsState,
    changed: ArcTrigger,
}

impl TabsContext {
    /// Wraps a state and wires its change notifications into the reactive graph.
    pub fn new(state: TabsState) -> Self {
        let changed = ArcTrigger::new();
        let notifier = changed.clone();
        state.subscribe(move |_| notifier.notify());
        Self { state, changed }
    }

    /// The underlying state.
    pub fn state(&self) -> &TabsState {
        &self.state
    }

    /// Subscribes the current reactive observer to selection changes.
    pub fn track(&self) {
        self.changed.track();
    }

    /// The active tab (tracked).
    pub fn active(&self) -> Option<TabId> {
        self.track();
        self.state.active()
    }

    /// Whether `value` is active (tracked).
    pub fn is_active(&self, value: &TabId) -> bool {
        self.track();
        self.state.is_active(value)
    }

    /// Requests activation of `value`.
    pub fn set_active(&self, value: impl Into<TabId>) {
        self.state.set_active(value);
    }

    /// The root's activation mode.
    pub fn mode(&self) -> ActivationMode {
        self.state.mode()
    }
}

impl std::fmt::Debug for TabsContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabsContext").field("state", &self.state).finish()
    }
}

/// Looks up the nearest root, reporting `hook` as the caller on failure.
pub fn try_use_tabs(hook: &'static str) -> Result<TabsContext, TabsError> {
    use_context::<TabsContext>().ok_or(TabsError::ContextMissing { hook })
}

fn require(hook: &'static str) -> TabsContext {
    match try_use_tabs(hook) {
        Ok(context) => context,
        Err(err) => panic!("{err}"),
    }
}

/// The nearest root's context.
///
/// # Panics
///
/// Outside a `<Tabs>` root.
pub fn use_tabs() -> TabsContext {
    require("use_tabs")
}

/// The active tab of the nearest root.
///
/// # Panics
///
/// Outside a `<Tabs>` root.
pub fn use_active_tab() -> Option<TabId> {
    require("use_active_tab").active()
}

/// A setter activating a tab of the nearest root.
///
/// # Panics
///
/// Outside a `<Tabs>` root. The lookup happens here, not when the setter
/// is called.
pub fn use_set_active_tab() -> impl Fn(TabId) + Clone + Send + Sync + 'static {
    let context = require("use_set_active_tab");
    move |value: TabId| context.set_active(value)
}

/// The activation mode of the nearest root.
///
/// # Panics
///
/// Outside a `<Tabs>` root.
pub fn use_tabs_activation_mode() -> ActivationMode {
    require("use_tabs_activation_mode").mode()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabkit_core::TabsOptions;

    fn with_root<T>(options: TabsOptions, f: impl FnOnce() -> T) -> T {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(TabsContext::new(TabsState::new(options)));
            f()
        })
    }

    #[test]
    fn hooks_read_the_provided_root() {
        with_root(
            TabsOptions::new()
                .default_value("a")
                .activation_mode(ActivationMode::Manual),
            || {
                assert_eq!(use_active_tab(), Some(TabId::from("a")));
                assert_eq!(use_tabs_activation_mode(), ActivationMode::Manual);

                let set_active = use_set_active_tab();
                set_active(TabId::from("b"));
                assert_eq!(use_active_tab(), Some(TabId::from("b")));
            },
        );
    }

    #[test]
    fn nested_owners_see_the_root() {
        with_root(TabsOptions::new().default_value("x"), || {
            let child = Owner::new();
            child.with(|| assert_eq!(use_active_tab(), Some(TabId::from("x"))));
        });
    }

    #[test]
    fn try_use_tabs_reports_missing_root() {
        let owner = Owner::new();
        owner.with(|| {
            let err = try_use_tabs("test_hook").unwrap_err();
            assert_eq!(err, TabsError::ContextMissing { hook: "test_hook" });
        });
        assert!(try_use_tabs("no_owner").is_err());
    }

    #[test]
    #[should_panic(expected = "Tabs context is missing in `use_tabs`")]
    fn use_tabs_panics_without_root() {
        let _ = use_tabs();
    }

    #[test]
    #[should_panic(expected = "Tabs context is missing in `use_active_tab`")]
    fn use_active_tab_panics_without_root() {
        let owner = Owner::new();
        owner.with(|| {
            let _ = use_active_tab();
        });
    }

    #[test]
    #[should_panic(expected = "Tabs context is missing in `use_set_active_tab`")]
    fn use_set_active_tab_panics_without_root() {
        let owner = Owner::new();
        owner.with(|| {
            let _ = use_set_active_tab();
        });
    }

    #[test]
    #[should_panic(expected = "Tabs context is missing in `use_tabs_activation_mode`")]
    fn use_tabs_activation_mode_panics_without_root() {
        let _ = use_tabs_activation_mode();
    }

    #[test]
    fn writes_notify_the_reactive_trigger() {
        let context = TabsContext::new(TabsState::new(TabsOptions::new()));
        let hits = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let counter = hits.clone();
        context.state().subscribe(move |_| {
            counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        });

        context.set_active("a");
        context.set_active("b");

        assert_eq!(hits.load(std::sync::atomic::Ordering::SeqCst), 2);
        assert_eq!(context.active(), Some(TabId::from("b")));
    }
}
