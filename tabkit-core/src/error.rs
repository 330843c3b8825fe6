//! Error types shared by every tabkit crate.

use thiserror::Error;

/// Errors raised by tabkit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabsError {
    /// A consumer looked up the tabs context outside of a mounted root.
    #[error("Tabs context is missing in `{hook}`. Wrap with <Tabs>.")]
    ContextMissing {
        /// Name of the consumer operation that failed.
        hook: &'static str,
    },

    /// An activation mode label other than `auto` or `manual`.
    #[error("invalid activation mode `{0}` (expected `auto` or `manual`)")]
    InvalidActivationMode(String),
}
