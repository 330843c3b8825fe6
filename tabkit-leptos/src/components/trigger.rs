//! Tab trigger - click, focus and keyboard activation

use leptos::prelude::*;
use tabkit_core::markup::{TriggerAttrs, panel_id, trigger_id};
use tabkit_core::{PointerButton, TabId, TriggerController, cn};
use wasm_bindgen::JsCast;

use crate::context::use_tabs;
use crate::styles::TRIGGER_CLASS;

/// A single trigger, rendered as `<button role="tab">`.
///
/// Selected iff its `value` is the root's active value. Only the selected
/// trigger sits in the sequential tab order; arrow keys, Home and End move
/// focus between triggers of the same root.
///
/// # Panics
///
/// Outside a [`super::Tabs`] root.
#[component]
pub fn TabsTrigger(
    /// Value this trigger activates.
    #[prop(into)]
    value: TabId,
    /// Extra classes, merged over the defaults.
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Trigger label.
    children: Children,
) -> impl IntoView {
    let tabs = use_tabs();
    let controller = TriggerController::new(tabs.state().clone(), value.clone());

    {
        let state = tabs.state().clone();
        let value = value.clone();
        on_cleanup(move || state.unregister_trigger(&value));
    }

    let attrs = {
        let controller = controller.clone();
        Memo::new(move |_| -> TriggerAttrs {
            tabs.track();
            controller.attrs()
        })
    };

    let on_click = {
        let controller = controller.clone();
        move |ev: leptos::ev::MouseEvent| {
            controller.click(PointerButton::from_code(ev.button()));
        }
    };
    let on_focus = {
        let controller = controller.clone();
        move |_: leptos::ev::FocusEvent| {
            controller.focus();
        }
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let outcome = controller.key_down(&ev.key());
        if outcome.prevent_default {
            ev.prevent_default();
        }
        if let Some(target) = outcome.focus {
            focus_trigger(&target);
        }
    };

    view! {
        <button
            role="tab"
            type="button"
            id=trigger_id(&value)
            aria-controls=panel_id(&value)
            aria-selected=move || attrs.with(|a| a.aria_selected.to_string())
            data-state=move || attrs.with(|a| a.data_state.as_str())
            tabindex=move || attrs.with(|a| a.tab_index.to_string())
            class=move || cn!(TRIGGER_CLASS, class.get())
            on:click=on_click
            on:focus=on_focus
            on:keydown=on_keydown
        >
            {children()}
        </button>
    }
}

/// Moves DOM focus to the trigger for `value`. Browser only.
fn focus_trigger(value: &TabId) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(&trigger_id(value)) else {
        return;
    };
    if let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() {
        let _ = element.focus();
    }
}
