//! Scripted input replay.
//!
//! Drives the same [`TriggerController`]s the components use with a list of
//! events and records what each one did. Useful for checking how a document
//! behaves under a given activation mode without a browser.
//!
//! Event syntax:
//!
//! - `click:ID` - primary click on trigger `ID`
//! - `focus:ID` - focus moves to trigger `ID`
//! - `key:ID:KEY` - key press on trigger `ID`; `KEY` is a DOM key name
//!   (`Enter`, `ArrowRight`, ...), with `Space` accepted for `" "`
//!
//! Each event expands into the DOM events a browser would fire, in browser
//! order: a click focuses its trigger before the click lands. When a key
//! moves focus (arrows, Home, End), the newly focused trigger receives a
//! focus event too, so in auto mode roving also activates.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tabkit_core::{PointerButton, TabId, TabsOptions, TabsState, TriggerController};
use tabkit_leptos::types::TabsDocument;
use thiserror::Error;
use tracing::debug;

/// Errors from parsing or replaying events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("invalid event `{0}` (expected click:ID, focus:ID or key:ID:KEY)")]
    InvalidEvent(String),

    #[error("no trigger with value `{0}`")]
    UnknownTrigger(TabId),
}

/// One scripted input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayEvent {
    Click(TabId),
    Focus(TabId),
    Key { target: TabId, key: String },
}

/// A DOM event delivered to the target trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DomEvent<'a> {
    Focus,
    Click,
    KeyDown(&'a str),
}

impl ReplayEvent {
    fn target(&self) -> &TabId {
        match self {
            ReplayEvent::Click(target) | ReplayEvent::Focus(target) => target,
            ReplayEvent::Key { target, .. } => target,
        }
    }

    fn dom_events(&self) -> Vec<DomEvent<'_>> {
        match self {
            ReplayEvent::Click(_) => vec![DomEvent::Focus, DomEvent::Click],
            ReplayEvent::Focus(_) => vec![DomEvent::Focus],
            ReplayEvent::Key { key, .. } => vec![DomEvent::KeyDown(key.as_str())],
        }
    }
}

impl FromStr for ReplayEvent {
    type Err = ReplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ReplayError::InvalidEvent(s.to_string());
        let (kind, rest) = s.split_once(':').ok_or_else(invalid)?;

        match kind {
            "click" if !rest.is_empty() => Ok(ReplayEvent::Click(rest.into())),
            "focus" if !rest.is_empty() => Ok(ReplayEvent::Focus(rest.into())),
            "key" => {
                let (target, key) = rest.rsplit_once(':').ok_or_else(invalid)?;
                if target.is_empty() || key.is_empty() {
                    return Err(invalid());
                }
                let key = if key == "Space" { " " } else { key };
                Ok(ReplayEvent::Key {
                    target: target.into(),
                    key: key.to_string(),
                })
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for ReplayEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayEvent::Click(target) => write!(f, "click:{target}"),
            ReplayEvent::Focus(target) => write!(f, "focus:{target}"),
            ReplayEvent::Key { target, key } if key == " " => write!(f, "key:{target}:Space"),
            ReplayEvent::Key { target, key } => write!(f, "key:{target}:{key}"),
        }
    }
}

/// What one event did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayStep {
    pub event: String,
    /// Active tab after the event.
    pub active: Option<TabId>,
    /// The event's default action was suppressed.
    pub prevented: bool,
    /// Trigger holding focus after the event.
    pub focus: Option<TabId>,
}

/// A tabs root built from a document, plus a focus cursor.
pub struct Replayer {
    state: TabsState,
    triggers: HashMap<TabId, TriggerController>,
    focused: Option<TabId>,
}

impl Replayer {
    /// Builds an uncontrolled root with one trigger per unique tab.
    pub fn new(document: &TabsDocument) -> Self {
        let state = TabsState::new(
            TabsOptions::new()
                .maybe_default_value(document.default_value.clone())
                .activation_mode(document.activation_mode),
        );
        let triggers = document
            .unique_tabs()
            .into_iter()
            .map(|tab| {
                let controller = TriggerController::new(state.clone(), tab.value.clone());
                (tab.value, controller)
            })
            .collect();

        Self {
            state,
            triggers,
            focused: None,
        }
    }

    /// The active tab.
    pub fn active(&self) -> Option<TabId> {
        self.state.active()
    }

    /// Applies one event.
    pub fn apply(&mut self, event: &ReplayEvent) -> Result<ReplayStep, ReplayError> {
        let controller = self.controller(event.target())?.clone();
        let mut prevented = false;

        for dom in event.dom_events() {
            match dom {
                DomEvent::Focus => self.focus(&controller),
                DomEvent::Click => {
                    controller.click(PointerButton::Primary);
                }
                DomEvent::KeyDown(key) => {
                    let outcome = controller.key_down(key);
                    prevented |= outcome.prevent_default;
                    if let Some(next) = outcome.focus {
                        let next = self.controller(&next)?.clone();
                        self.focus(&next);
                    }
                }
            }
        }

        let step = ReplayStep {
            event: event.to_string(),
            active: self.state.active(),
            prevented,
            focus: self.focused.clone(),
        };
        debug!(event = %step.event, active = ?step.active, "replayed event");
        Ok(step)
    }

    /// Applies every event in order, stopping at the first error.
    pub fn run(&mut self, events: &[ReplayEvent]) -> Result<Vec<ReplayStep>, ReplayError> {
        events.iter().map(|event| self.apply(event)).collect()
    }

    fn controller(&self, value: &TabId) -> Result<&TriggerController, ReplayError> {
        self.triggers
            .get(value)
            .ok_or_else(|| ReplayError::UnknownTrigger(value.clone()))
    }

    /// Focus only fires on a change, like the DOM event.
    fn focus(&mut self, controller: &TriggerController) {
        if self.focused.as_ref() == Some(controller.value()) {
            return;
        }
        self.focused = Some(controller.value().clone());
        controller.focus();
    }
}
