//! Tab panel - visible only while its value is active

use leptos::prelude::*;
use tabkit_core::markup::{PanelAttrs, panel_id, trigger_id};
use tabkit_core::{PanelView, TabId, cn};

use crate::context::use_tabs;
use crate::styles::CONTENT_CLASS;

/// A panel, rendered as `<div role="tabpanel">`.
///
/// Inactive panels stay in the markup with `hidden` set, which removes them
/// from layout and the accessibility tree.
///
/// # Panics
///
/// Outside a [`super::Tabs`] root.
#[component]
pub fn TabsContent(
    /// Value of the trigger this panel belongs to.
    #[prop(into)]
    value: TabId,
    /// Extra classes, merged over the defaults.
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Panel body.
    children: Children,
) -> impl IntoView {
    let tabs = use_tabs();
    let id = panel_id(&value);
    let labelled_by = trigger_id(&value);
    let panel = PanelView::new(tabs.state().clone(), value);

    let attrs = Memo::new(move |_| -> PanelAttrs {
        tabs.track();
        panel.attrs()
    });

    view! {
        <div
            role="tabpanel"
            id=id
            aria-labelledby=labelled_by
            hidden=move || attrs.with(|a| a.hidden)
            data-state=move || attrs.with(|a| a.data_state.as_str())
            class=move || cn!(CONTENT_CLASS, class.get())
        >
            {children()}
        </div>
    }
}
