//! Serializable description of a tabs widget.
//!
//! A [`TabsDocument`] is what [`crate::render_tabs`] and
//! [`crate::render_document`] render. It deserializes from the TOML files the
//! `tabkit` CLI reads:
//!
//! ```toml
//! title = "Settings"
//! activation_mode = "manual"
//! default_value = "account"
//!
//! [[tab]]
//! value = "account"
//! label = "Account"
//! content = "Manage your account."
//!
//! [[tab]]
//! value = "password"
//! label = "Password"
//! content = "Change your password."
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tabkit_core::{ActivationMode, TabId};

/// One tab: its trigger label and panel content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSpec {
    /// Value linking the trigger to its panel.
    pub value: TabId,
    /// Trigger text.
    pub label: String,
    /// Panel text.
    #[serde(default)]
    pub content: String,
    /// Extra classes for the trigger.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl TabSpec {
    /// Creates a tab with label and content.
    pub fn new(value: impl Into<TabId>, label: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            content: content.into(),
            class: None,
        }
    }
}

/// A complete tabs widget.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsDocument {
    /// Page title used by [`crate::render_document`].
    pub title: String,
    /// Keyboard activation mode.
    pub activation_mode: ActivationMode,
    /// Initially active tab.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<TabId>,
    /// Extra classes for the root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Accessible name of the trigger list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_label: Option<String>,
    /// Tabs in display order.
    #[serde(rename = "tab")]
    pub tabs: Vec<TabSpec>,
}

impl TabsDocument {
    /// Tabs with repeated values dropped, first occurrence kept.
    pub fn unique_tabs(&self) -> Vec<TabSpec> {
        let mut seen = HashSet::new();
        self.tabs
            .iter()
            .filter(|tab| seen.insert(tab.value.clone()))
            .cloned()
            .collect()
    }

    /// Values that appear more than once, in first-repeat order.
    pub fn duplicate_values(&self) -> Vec<TabId> {
        let mut seen = HashSet::new();
        let mut dups = Vec::new();
        for tab in &self.tabs {
            if !seen.insert(&tab.value) && !dups.contains(&tab.value) {
                dups.push(tab.value.clone());
            }
        }
        dups
    }

    /// Whether `value` names one of the tabs.
    pub fn contains(&self, value: &TabId) -> bool {
        self.tabs.iter().any(|tab| &tab.value == value)
    }
}
