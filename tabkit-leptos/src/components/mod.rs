//! Leptos components for the tabs widget.
//!
//! # Component Hierarchy
//!
//! ```text
//! Tabs                       (owns TabsState, provides TabsContext)
//! ├── TabsList               (role="tablist")
//! │   └── TabsTrigger ×n     (role="tab")
//! └── TabsContent ×n         (role="tabpanel")
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use tabkit_leptos::components::{Tabs, TabsContent, TabsList, TabsTrigger};
//!
//! view! {
//!     <Tabs default_value=TabId::from("account") activation_mode=ActivationMode::Manual>
//!         <TabsList>
//!             <TabsTrigger value="account">"Account"</TabsTrigger>
//!             <TabsTrigger value="password">"Password"</TabsTrigger>
//!         </TabsList>
//!         <TabsContent value="account">"Manage your account."</TabsContent>
//!         <TabsContent value="password">"Change your password."</TabsContent>
//!     </Tabs>
//! }
//! ```
//!
//! [`TabsView`] and [`TabsPage`] build the same tree from a
//! [`crate::types::TabsDocument`].

mod content;
mod document;
mod list;
mod tabs;
mod trigger;

pub use content::TabsContent;
pub use document::{TabsPage, TabsView};
pub use list::TabsList;
pub use tabs::Tabs;
pub use trigger::TabsTrigger;
