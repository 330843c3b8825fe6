//! Document components - a tabs widget built from a `TabsDocument`

use leptos::prelude::*;

use super::{Tabs, TabsContent, TabsList, TabsTrigger};
use crate::styles::{CSP, TABS_CSS};
use crate::types::TabsDocument;

/// A complete tabs widget described by `document`.
///
/// Tabs with a repeated value are rendered once, first occurrence wins.
#[component]
pub fn TabsView(document: TabsDocument) -> impl IntoView {
    let tabs = document.unique_tabs();
    let panels = tabs.clone();

    view! {
        <Tabs
            default_value=document.default_value.clone()
            activation_mode=document.activation_mode
            class=document.class.clone()
        >
            <TabsList aria_label=document.list_label.clone()>
                {tabs
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <TabsTrigger value=tab.value class=tab.class>
                                {tab.label}
                            </TabsTrigger>
                        }
                    })
                    .collect_view()}
            </TabsList>
            {panels
                .into_iter()
                .map(|tab| {
                    view! {
                        <TabsContent value=tab.value>
                            <p>{tab.content}</p>
                        </TabsContent>
                    }
                })
                .collect_view()}
        </Tabs>
    }
}

/// A standalone HTML page around a [`TabsView`].
#[component]
pub fn TabsPage(document: TabsDocument) -> impl IntoView {
    let title = if document.title.is_empty() {
        "Tabs".to_string()
    } else {
        document.title.clone()
    };
    let heading = title.clone();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style>{TABS_CSS}</style>
            </head>
            <body>
                <main class="tabs-page">
                    <h1>{heading}</h1>
                    <TabsView document=document />
                </main>
            </body>
        </html>
    }
}
