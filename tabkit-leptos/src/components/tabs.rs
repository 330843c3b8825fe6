//! Tabs root - owns the selection and provides it to descendants

use leptos::context::Provider;
use leptos::prelude::*;
use tabkit_core::{ActivationMode, TabId, TabsOptions, TabsState, cn};

use crate::context::TabsContext;
use crate::styles::ROOT_CLASS;

/// Root of a tabs widget.
///
/// Uncontrolled by default: the root starts at `default_value` and moves on
/// its own. Passing `value` makes it controlled: the root mirrors that signal
/// and only reports requests through `on_value_change`, leaving the owner to
/// write the new value back.
#[component]
pub fn Tabs(
    /// Controlled active value. `Some(signal)` holding `None` is an explicit
    /// "nothing active" and still controls the root.
    #[prop(optional, into)]
    value: Option<Signal<Option<TabId>>>,
    /// Initial active value when uncontrolled.
    #[prop(optional, into)]
    default_value: MaybeProp<TabId>,
    /// Called with the requested value on every activation request.
    #[prop(optional, into)]
    on_value_change: Option<Callback<TabId>>,
    /// Whether keyboard focus alone activates a trigger.
    #[prop(optional)]
    activation_mode: ActivationMode,
    /// Extra classes for the root element.
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Typically a [`super::TabsList`] and several [`super::TabsContent`].
    children: Children,
) -> impl IntoView {
    let mut options = TabsOptions::new()
        .maybe_default_value(default_value.get_untracked())
        .activation_mode(activation_mode);
    if let Some(value) = value {
        options = options.controlled(move || value.get());
    }
    if let Some(callback) = on_value_change {
        options = options.on_value_change(move |id| callback.run(id.clone()));
    }

    let context = TabsContext::new(TabsState::new(options));

    view! {
        <Provider value=context>
            <div
                class=move || cn!(ROOT_CLASS, class.get())
                data-ui="tabs"
                data-activation-mode=activation_mode.as_label()
            >
                {children()}
            </div>
        </Provider>
    }
}
