//! # tabkit-leptos
//!
//! Accessible tabs components for [Leptos](https://leptos.dev/).
//!
//! The widget is the usual four parts: a [`Tabs`](components::Tabs) root
//! owning the selection, a [`TabsList`](components::TabsList) grouping the
//! [`TabsTrigger`](components::TabsTrigger)s, and one
//! [`TabsContent`](components::TabsContent) panel per value. Activation rules
//! and selection state live in [`tabkit_core`]; the components only wire DOM
//! events and attributes to them.
//!
//! ## Features
//!
//! - **Controlled or uncontrolled** - pass `value` to own the selection
//!   yourself, or `default_value` to let the root keep it
//! - **Auto / manual activation** - focus activates, or Enter/Space does
//! - **Roving focus** - arrow keys, Home and End move between triggers
//! - **Class merging** - caller classes override conflicting defaults
//!
//! ## Quick Start
//!
//! ```rust
//! use tabkit_leptos::render_tabs;
//! use tabkit_leptos::types::{TabSpec, TabsDocument};
//!
//! let document = TabsDocument {
//!     default_value: Some("account".into()),
//!     tabs: vec![
//!         TabSpec::new("account", "Account", "Manage your account."),
//!         TabSpec::new("password", "Password", "Change your password."),
//!     ],
//!     ..Default::default()
//! };
//!
//! let html = render_tabs(&document);
//! assert!(html.contains(r#"role="tablist""#));
//! ```
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering uses Leptos 0.8's `RenderHtml` trait inside a fresh reactive
//! [`Owner`], which the root needs to provide its context:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let html = Owner::new().with(|| view! { <MyTabs /> }.to_html());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod context;
pub mod styles;
pub mod types;

pub use context::{
    TabsContext, try_use_tabs, use_active_tab, use_set_active_tab, use_tabs,
    use_tabs_activation_mode,
};
pub use tabkit_core::{ActivationMode, TabId, TabsError};

use components::{TabsPage, TabsView};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::TabsDocument;

/// Render the tabs widget described by `document` as an HTML fragment.
///
/// # Example
///
/// ```rust
/// use tabkit_leptos::render_tabs;
/// use tabkit_leptos::types::{TabSpec, TabsDocument};
///
/// let document = TabsDocument {
///     default_value: Some("a".into()),
///     tabs: vec![TabSpec::new("a", "Alpha", "First")],
///     ..Default::default()
/// };
///
/// let html = render_tabs(&document);
/// assert!(html.contains(r#"id="tab-panel-a""#));
/// ```
pub fn render_tabs(document: &TabsDocument) -> String {
    let owner = Owner::new();
    owner.with(|| {
        view! { <TabsView document=document.clone() /> }.to_html()
    })
}

/// Render `document` as a complete HTML page, including `<!DOCTYPE html>`.
pub fn render_document(document: &TabsDocument) -> String {
    let owner = Owner::new();
    let html = owner.with(|| {
        view! { <TabsPage document=document.clone() /> }.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Tabs, TabsContent, TabsList, TabsTrigger};
    use crate::types::TabSpec;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    fn sample(default_value: Option<&str>) -> TabsDocument {
        TabsDocument {
            title: "Settings".into(),
            default_value: default_value.map(TabId::from),
            list_label: Some("Settings sections".into()),
            tabs: vec![
                TabSpec::new("account", "Account", "Manage your account."),
                TabSpec::new("password", "Password", "Change your password."),
                TabSpec::new("billing", "Billing", "Update billing details."),
            ],
            ..Default::default()
        }
    }

    /// Opening tags of every element carrying `role`.
    fn tags_with_role<'a>(html: &'a str, role: &str) -> Vec<&'a str> {
        let needle = format!(r#"role="{role}""#);
        html.split('<')
            .filter(|chunk| chunk.contains(&needle))
            .map(|chunk| chunk.split('>').next().unwrap_or(chunk))
            .collect()
    }

    fn tag_for<'a>(tags: &[&'a str], id: &str) -> &'a str {
        let needle = format!(r#"id="{id}""#);
        tags.iter()
            .copied()
            .find(|tag| tag.contains(&needle))
            .unwrap_or_else(|| panic!("no element with {needle}"))
    }

    #[test]
    fn renders_accessible_roles() {
        let html = render_tabs(&sample(Some("account")));

        assert_eq!(tags_with_role(&html, "tablist").len(), 1);
        assert_eq!(tags_with_role(&html, "tab").len(), 3);
        assert_eq!(tags_with_role(&html, "tabpanel").len(), 3);
        assert!(html.contains(r#"data-ui="tabs""#));
        assert!(html.contains(r#"aria-label="Settings sections""#));
    }

    #[test]
    fn only_the_default_trigger_is_selected() {
        let html = render_tabs(&sample(Some("password")));
        let tabs = tags_with_role(&html, "tab");

        let selected: Vec<_> = tabs
            .iter()
            .filter(|tag| tag.contains(r#"aria-selected="true""#))
            .collect();
        assert_eq!(selected.len(), 1);

        let password = tag_for(&tabs, "tab-trigger-password");
        assert!(password.contains(r#"aria-selected="true""#));
        assert!(password.contains(r#"tabindex="0""#));
        assert!(password.contains(r#"data-state="active""#));

        let account = tag_for(&tabs, "tab-trigger-account");
        assert!(account.contains(r#"aria-selected="false""#));
        assert!(account.contains(r#"tabindex="-1""#));
    }

    #[test]
    fn only_the_active_panel_is_visible() {
        let html = render_tabs(&sample(Some("billing")));
        let panels = tags_with_role(&html, "tabpanel");

        let billing = tag_for(&panels, "tab-panel-billing");
        assert!(!billing.contains("hidden"));
        assert!(billing.contains(r#"data-state="active""#));

        for id in ["tab-panel-account", "tab-panel-password"] {
            let panel = tag_for(&panels, id);
            assert!(panel.contains("hidden"), "{id} should be hidden");
            assert!(panel.contains(r#"data-state="inactive""#));
        }
    }

    #[test]
    fn triggers_and_panels_link_by_id() {
        let html = render_tabs(&sample(Some("account")));
        let tabs = tags_with_role(&html, "tab");
        let panels = tags_with_role(&html, "tabpanel");

        let trigger = tag_for(&tabs, "tab-trigger-account");
        assert!(trigger.contains(r#"aria-controls="tab-panel-account""#));
        let panel = tag_for(&panels, "tab-panel-account");
        assert!(panel.contains(r#"aria-labelledby="tab-trigger-account""#));
    }

    #[test]
    fn no_default_means_nothing_selected() {
        let html = render_tabs(&sample(None));

        assert!(!html.contains(r#"aria-selected="true""#));
        let panels = tags_with_role(&html, "tabpanel");
        assert!(panels.iter().all(|p| p.contains("hidden")));
    }

    #[test]
    fn unknown_default_degrades_to_nothing_active() {
        let html = render_tabs(&sample(Some("missing")));
        assert!(!html.contains(r#"aria-selected="true""#));
        assert!(!html.contains(r#"data-state="active""#));
    }

    #[test]
    fn manual_mode_is_reflected_on_the_root() {
        let mut doc = sample(Some("account"));
        doc.activation_mode = ActivationMode::Manual;
        let html = render_tabs(&doc);
        assert!(html.contains(r#"data-activation-mode="manual""#));
    }

    #[test]
    fn caller_classes_override_conflicting_defaults() {
        let mut doc = sample(Some("account"));
        doc.tabs[0].class = Some("px-6".into());
        let html = render_tabs(&doc);
        let tabs = tags_with_role(&html, "tab");

        let account = tag_for(&tabs, "tab-trigger-account");
        assert!(account.contains("px-6"));
        assert!(!account.contains("px-3"));
        assert!(account.contains("rc-tabs-trigger"));

        let password = tag_for(&tabs, "tab-trigger-password");
        assert!(password.contains("px-3"));
    }

    #[test]
    fn duplicate_values_render_once() {
        let mut doc = sample(Some("account"));
        doc.tabs.push(TabSpec::new("account", "Again", "Duplicate"));
        let html = render_tabs(&doc);

        assert_eq!(tags_with_role(&html, "tab").len(), 3);
        assert!(!html.contains("Again"));
    }

    #[test]
    fn controlled_root_mirrors_the_signal() {
        let owner = Owner::new();
        let html = owner.with(|| {
            let selected = RwSignal::new(Some(TabId::from("b")));
            view! {
                <Tabs value=selected default_value=TabId::from("a")>
                    <TabsList>
                        <TabsTrigger value="a">"A"</TabsTrigger>
                        <TabsTrigger value="b">"B"</TabsTrigger>
                    </TabsList>
                    <TabsContent value="a">"Panel A"</TabsContent>
                    <TabsContent value="b">"Panel B"</TabsContent>
                </Tabs>
            }
            .to_html()
        });

        let tabs = tags_with_role(&html, "tab");
        assert!(tag_for(&tabs, "tab-trigger-b").contains(r#"aria-selected="true""#));
        assert!(tag_for(&tabs, "tab-trigger-a").contains(r#"aria-selected="false""#));
    }

    #[test]
    fn controlled_none_selects_nothing() {
        let owner = Owner::new();
        let html = owner.with(|| {
            let selected = RwSignal::new(None::<TabId>);
            view! {
                <Tabs value=selected default_value=TabId::from("a")>
                    <TabsList>
                        <TabsTrigger value="a">"A"</TabsTrigger>
                    </TabsList>
                    <TabsContent value="a">"Panel A"</TabsContent>
                </Tabs>
            }
            .to_html()
        });

        assert!(!html.contains(r#"aria-selected="true""#));
    }

    /// Requests "b" then "c" through the hook while rendering, then reports
    /// what the root considers active.
    #[component]
    fn Requester() -> impl IntoView {
        let set_active = use_set_active_tab();
        set_active(TabId::from("b"));
        set_active(TabId::from("c"));
        let now = use_active_tab().map(TabId::into_inner).unwrap_or_default();
        view! { <span data-now=now></span> }
    }

    fn recorder() -> (Arc<Mutex<Vec<String>>>, Callback<TabId>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        let callback = Callback::new(move |id: TabId| sink.lock().unwrap().push(id.into_inner()));
        (log, callback)
    }

    #[test]
    fn controlled_root_reports_requests_without_moving() {
        let (log, on_change) = recorder();
        let owner = Owner::new();
        let html = owner.with(|| {
            let selected = RwSignal::new(Some(TabId::from("a")));
            view! {
                <Tabs value=selected on_value_change=on_change>
                    <Requester />
                    <TabsList>
                        <TabsTrigger value="a">"A"</TabsTrigger>
                        <TabsTrigger value="c">"C"</TabsTrigger>
                    </TabsList>
                </Tabs>
            }
            .to_html()
        });

        assert_eq!(*log.lock().unwrap(), vec!["b", "c"]);
        assert!(html.contains(r#"data-now="a""#));
        let tabs = tags_with_role(&html, "tab");
        assert!(tag_for(&tabs, "tab-trigger-a").contains(r#"aria-selected="true""#));
        assert!(tag_for(&tabs, "tab-trigger-c").contains(r#"aria-selected="false""#));
    }

    #[test]
    fn uncontrolled_root_moves_and_reports_requests() {
        let (log, on_change) = recorder();
        let owner = Owner::new();
        let html = owner.with(|| {
            view! {
                <Tabs default_value=TabId::from("a") on_value_change=on_change>
                    <Requester />
                    <TabsList>
                        <TabsTrigger value="a">"A"</TabsTrigger>
                        <TabsTrigger value="c">"C"</TabsTrigger>
                    </TabsList>
                </Tabs>
            }
            .to_html()
        });

        assert_eq!(*log.lock().unwrap(), vec!["b", "c"]);
        assert!(html.contains(r#"data-now="c""#));
        let tabs = tags_with_role(&html, "tab");
        assert!(tag_for(&tabs, "tab-trigger-c").contains(r#"aria-selected="true""#));
        assert!(tag_for(&tabs, "tab-trigger-a").contains(r#"aria-selected="false""#));
    }

    #[test]
    #[should_panic(expected = "Tabs context is missing")]
    fn trigger_outside_root_panics() {
        let owner = Owner::new();
        owner.with(|| {
            let _ = view! { <TabsTrigger value="a">"A"</TabsTrigger> }.to_html();
        });
    }

    #[test]
    #[should_panic(expected = "Tabs context is missing")]
    fn panel_outside_root_panics() {
        let owner = Owner::new();
        owner.with(|| {
            let _ = view! { <TabsContent value="a">"A"</TabsContent> }.to_html();
        });
    }

    #[test]
    fn renders_full_document() {
        let html = render_document(&sample(Some("account")));

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>"));
        assert!(html.contains("Settings"));
        assert!(html.contains(".rc-tabs-trigger"));
        assert!(html.contains("Manage your account."));
    }
}
