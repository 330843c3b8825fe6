//! Per-trigger activation rules.
//!
//! A trigger is `active` iff its value equals the root's selection. Input
//! moves it there:
//!
//! | input                 | auto             | manual                    |
//! |-----------------------|------------------|---------------------------|
//! | primary click         | activate         | activate                  |
//! | focus                 | activate         | nothing                   |
//! | Enter / Space         | nothing          | activate, prevent default |
//! | Arrow / Home / End    | move focus       | move focus                |

use tracing::trace;

use crate::markup::TriggerAttrs;
use crate::{ActivationMode, TabId, TabsState};

/// Mouse button reported with a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Usually the left button.
    Primary,
    /// Any other button.
    Other(i16),
}

impl PointerButton {
    /// Maps a DOM `MouseEvent.button` code.
    pub fn from_code(code: i16) -> Self {
        match code {
            0 => PointerButton::Primary,
            other => PointerButton::Other(other),
        }
    }
}

/// Keys a trigger understands, parsed from DOM `KeyboardEvent.key` names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKey {
    /// Enter or Space.
    Activate,
    /// ArrowRight.
    Next,
    /// ArrowLeft.
    Previous,
    /// Home.
    First,
    /// End.
    Last,
    /// Anything else.
    Other,
}

impl TriggerKey {
    /// Classifies a key name.
    pub fn from_key(key: &str) -> Self {
        match key {
            "Enter" | " " | "Spacebar" => TriggerKey::Activate,
            "ArrowRight" => TriggerKey::Next,
            "ArrowLeft" => TriggerKey::Previous,
            "Home" => TriggerKey::First,
            "End" => TriggerKey::Last,
            _ => TriggerKey::Other,
        }
    }
}

/// What a key press did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    /// The trigger requested activation of its own value.
    pub activated: bool,
    /// The host should suppress the key's default action.
    pub prevent_default: bool,
    /// The host should move focus to this trigger.
    pub focus: Option<TabId>,
}

/// Input handling for one trigger bound to a root's state.
#[derive(Debug, Clone)]
pub struct TriggerController {
    state: TabsState,
    value: TabId,
}

impl TriggerController {
    /// Binds a trigger value to a root and registers it in focus order.
    pub fn new(state: TabsState, value: impl Into<TabId>) -> Self {
        let value = value.into();
        state.register_trigger(&value);
        Self { state, value }
    }

    /// The value this trigger activates.
    pub fn value(&self) -> &TabId {
        &self.value
    }

    /// Whether this trigger is the selected one.
    pub fn is_selected(&self) -> bool {
        self.state.is_active(&self.value)
    }

    /// Markup attributes for the current selection.
    pub fn attrs(&self) -> TriggerAttrs {
        TriggerAttrs::new(&self.value, self.is_selected())
    }

    /// Pointer activation. Returns true if activation was requested.
    pub fn click(&self, button: PointerButton) -> bool {
        if button != PointerButton::Primary {
            trace!(tab = %self.value, ?button, "ignoring non-primary click");
            return false;
        }
        self.state.set_active(self.value.clone());
        true
    }

    /// Focus activation. Returns true if activation was requested.
    pub fn focus(&self) -> bool {
        if !self.state.mode().activates_on_focus() {
            trace!(tab = %self.value, "focus without activation (manual mode)");
            return false;
        }
        self.state.set_active(self.value.clone());
        true
    }

    /// Key handling while this trigger has focus.
    pub fn key_down(&self, key: &str) -> KeyOutcome {
        match TriggerKey::from_key(key) {
            TriggerKey::Activate if self.state.mode() == ActivationMode::Manual => {
                self.state.set_active(self.value.clone());
                KeyOutcome {
                    activated: true,
                    prevent_default: true,
                    focus: None,
                }
            }
            TriggerKey::Activate | TriggerKey::Other => KeyOutcome::default(),
            roving => {
                let focus = self.roving_target(roving);
                KeyOutcome {
                    activated: false,
                    prevent_default: focus.is_some(),
                    focus,
                }
            }
        }
    }

    fn roving_target(&self, key: TriggerKey) -> Option<TabId> {
        let triggers = self.state.triggers();
        if triggers.is_empty() {
            return None;
        }
        let last = triggers.len() - 1;
        let current = triggers.iter().position(|t| t == &self.value);

        let index = match (key, current) {
            (TriggerKey::First, _) => 0,
            (TriggerKey::Last, _) => last,
            (TriggerKey::Next, Some(i)) if i == last => 0,
            (TriggerKey::Next, Some(i)) => i + 1,
            (TriggerKey::Previous, Some(0)) => last,
            (TriggerKey::Previous, Some(i)) => i - 1,
            _ => return None,
        };
        triggers.into_iter().nth(index)
    }
}
