//! Trigger list - presentational grouping

use leptos::prelude::*;
use tabkit_core::cn;

use crate::styles::LIST_CLASS;

/// Container for [`super::TabsTrigger`]s, rendered with `role="tablist"`.
#[component]
pub fn TabsList(
    /// Extra classes, merged over the defaults.
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Accessible name for the list.
    #[prop(optional, into)]
    aria_label: MaybeProp<String>,
    /// Triggers.
    children: Children,
) -> impl IntoView {
    view! {
        <div
            role="tablist"
            aria-label=move || aria_label.get()
            class=move || cn!(LIST_CLASS, class.get())
        >
            {children()}
        </div>
    }
}
