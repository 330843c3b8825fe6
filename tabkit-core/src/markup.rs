//! Accessible markup attributes derived from selection.
//!
//! Ids are a pure function of the tab value, so a trigger and its panel link
//! to each other without coordination.

use crate::TabId;

/// Prefix of a trigger's element id. Diverges from [`PANEL_ID_PREFIX`]
/// right after `tab-`, so no trigger id can equal a panel id.
pub const TRIGGER_ID_PREFIX: &str = "tab-trigger-";

/// Prefix of a panel's element id.
pub const PANEL_ID_PREFIX: &str = "tab-panel-";

/// Element id of the trigger for `value`.
pub fn trigger_id(value: &TabId) -> String {
    format!("{TRIGGER_ID_PREFIX}{value}")
}

/// Element id of the panel for `value`.
pub fn panel_id(value: &TabId) -> String {
    format!("{PANEL_ID_PREFIX}{value}")
}

/// `data-state` value shared by triggers and panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataState {
    /// Selected trigger / visible panel.
    Active,
    /// Everything else.
    Inactive,
}

impl DataState {
    /// Maps a selection flag.
    pub fn from_active(active: bool) -> Self {
        if active {
            DataState::Active
        } else {
            DataState::Inactive
        }
    }

    /// Attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataState::Active => "active",
            DataState::Inactive => "inactive",
        }
    }
}

/// Attributes of a `role="tab"` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerAttrs {
    pub id: String,
    pub aria_selected: bool,
    pub aria_controls: String,
    pub data_state: DataState,
    /// 0 for the selected trigger, -1 otherwise: only the selected trigger
    /// is in the sequential tab order.
    pub tab_index: i8,
}

impl TriggerAttrs {
    pub fn new(value: &TabId, selected: bool) -> Self {
        Self {
            id: trigger_id(value),
            aria_selected: selected,
            aria_controls: panel_id(value),
            data_state: DataState::from_active(selected),
            tab_index: if selected { 0 } else { -1 },
        }
    }
}

/// Attributes of a `role="tabpanel"` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelAttrs {
    pub id: String,
    pub aria_labelledby: String,
    pub hidden: bool,
    pub data_state: DataState,
}

impl PanelAttrs {
    pub fn new(value: &TabId, open: bool) -> Self {
        Self {
            id: panel_id(value),
            aria_labelledby: trigger_id(value),
            hidden: !open,
            data_state: DataState::from_active(open),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_and_panel_link_by_value() {
        let value = TabId::from("billing");
        let trigger = TriggerAttrs::new(&value, true);
        let panel = PanelAttrs::new(&value, true);

        assert_eq!(panel.id, "tab-panel-billing");
        assert_eq!(trigger.aria_controls, panel.id);
        assert_eq!(panel.aria_labelledby, trigger.id);
    }

    #[test]
    fn trigger_ids_never_collide_with_panel_ids() {
        let tricky = TabId::from("panel-x");
        let plain = TabId::from("x");

        assert_eq!(trigger_id(&tricky), "tab-trigger-panel-x");
        assert_eq!(panel_id(&plain), "tab-panel-x");
        assert_ne!(trigger_id(&tricky), panel_id(&plain));
        assert_ne!(trigger_id(&plain), panel_id(&TabId::from("trigger-x")));
    }

    #[test]
    fn inactive_trigger_leaves_tab_order() {
        let attrs = TriggerAttrs::new(&TabId::from("a"), false);
        assert_eq!(attrs.tab_index, -1);
        assert!(!attrs.aria_selected);
        assert_eq!(attrs.data_state.as_str(), "inactive");
    }

    #[test]
    fn closed_panel_is_hidden() {
        let attrs = PanelAttrs::new(&TabId::from("a"), false);
        assert!(attrs.hidden);
        assert_eq!(attrs.data_state, DataState::Inactive);
    }
}
