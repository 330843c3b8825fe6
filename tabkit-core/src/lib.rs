//! Framework-independent core of tabkit.
//!
//! This crate holds everything about a tabs widget that is not rendering:
//! the selection state shared by one root, the per-trigger activation rules,
//! panel visibility, the accessible attributes both derive, and the
//! class-name merger used to combine default and user styles.
//!
//! The Leptos components in `tabkit-leptos` are a thin layer over these
//! types.

pub mod class;
mod error;
mod id;
pub mod markup;
mod mode;
mod panel;
mod state;
mod trigger;

pub use class::{ClassValue, merge_classes};
pub use error::TabsError;
pub use id::TabId;
pub use mode::ActivationMode;
pub use panel::PanelView;
pub use state::{ChangeCallback, SubscriptionId, TabsOptions, TabsState, ValueSource};
pub use trigger::{KeyOutcome, PointerButton, TriggerController, TriggerKey};
