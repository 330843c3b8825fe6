//! Content panel visibility.

use crate::markup::PanelAttrs;
use crate::{TabId, TabsState};

/// Read-only view of one panel. Visible iff its value is active.
#[derive(Debug, Clone)]
pub struct PanelView {
    state: TabsState,
    value: TabId,
}

impl PanelView {
    pub fn new(state: TabsState, value: impl Into<TabId>) -> Self {
        Self {
            state,
            value: value.into(),
        }
    }

    pub fn value(&self) -> &TabId {
        &self.value
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_active(&self.value)
    }

    pub fn attrs(&self) -> PanelAttrs {
        PanelAttrs::new(&self.value, self.is_visible())
    }
}
