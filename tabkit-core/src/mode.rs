//! Keyboard activation modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TabsError;

/// How a trigger reacts to receiving keyboard focus.
///
/// Fixed for the lifetime of a root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationMode {
    /// Focusing a trigger activates it.
    #[default]
    Auto,
    /// Focus only moves focus; Enter or Space activates.
    Manual,
}

impl ActivationMode {
    /// Returns the lowercase label used in markup and configuration.
    pub fn as_label(&self) -> &'static str {
        match self {
            ActivationMode::Auto => "auto",
            ActivationMode::Manual => "manual",
        }
    }

    /// Whether focus alone activates a trigger.
    pub fn activates_on_focus(&self) -> bool {
        matches!(self, ActivationMode::Auto)
    }
}

impl fmt::Display for ActivationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

impl FromStr for ActivationMode {
    type Err = TabsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" | "automatic" => Ok(ActivationMode::Auto),
            "manual" => Ok(ActivationMode::Manual),
            other => Err(TabsError::InvalidActivationMode(other.to_string())),
        }
    }
}
