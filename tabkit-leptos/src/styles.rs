//! Default classes and stylesheet for the tabs widget.
//!
//! Every component merges its default classes with the caller's `class`
//! prop through [`tabkit_core::cn!`], so a conflicting utility passed by the
//! caller (say `p-2` against the list's `p-1`) replaces the default instead
//! of fighting it.
//!
//! The `rc-tabs*` marker classes are always kept; [`TABS_CSS`] targets them so
//! a rendered page looks right without a Tailwind build.
//!
//! # Customization
//!
//! ```rust
//! use tabkit_leptos::styles::TABS_CSS;
//!
//! let my_css = ".rc-tabs-trigger { letter-spacing: 0.05em; }";
//! let combined = format!("{}\n{}", TABS_CSS, my_css);
//! ```

/// Root container.
pub const ROOT_CLASS: &str = "rc-tabs";

/// Trigger list (`role="tablist"`).
pub const LIST_CLASS: &str = "rc-tabs-list inline-flex items-center gap-1 rounded-md bg-gray-100 p-1";

/// Individual trigger (`role="tab"`).
pub const TRIGGER_CLASS: &str = "rc-tabs-trigger rounded-md px-3 py-1.5 text-sm font-medium \
     text-gray-600 data-[state=active]:bg-white data-[state=active]:text-gray-900 \
     focus:outline-none focus-visible:ring-2 focus-visible:ring-blue-500";

/// Content panel (`role="tabpanel"`).
pub const CONTENT_CLASS: &str = "rc-tabs-content mt-3";

/// Content-Security-Policy for rendered pages: no scripts, inline styles only.
pub const CSP: &str = "default-src 'none'; style-src 'unsafe-inline'; img-src data:;";

/// Stylesheet for pages rendered by [`crate::render_document`].
pub const TABS_CSS: &str = r#"
:root {
    --tabs-bg: #ffffff;
    --tabs-list-bg: #f3f4f6;
    --tabs-text: #4b5563;
    --tabs-text-active: #111827;
    --tabs-ring: #3b82f6;
    --font-sans: system-ui, -apple-system, "Segoe UI", sans-serif;
}

body {
    margin: 0;
    padding: 32px;
    font-family: var(--font-sans);
    color: var(--tabs-text-active);
    background: var(--tabs-bg);
}

.tabs-page h1 {
    font-size: 20px;
    font-weight: 600;
    margin: 0 0 16px 0;
}

.rc-tabs-list {
    display: inline-flex;
    align-items: center;
    gap: 4px;
    padding: 4px;
    border-radius: 6px;
    background: var(--tabs-list-bg);
}

.rc-tabs-trigger {
    border: none;
    background: transparent;
    color: var(--tabs-text);
    border-radius: 6px;
    padding: 6px 12px;
    font-size: 14px;
    font-weight: 500;
    cursor: pointer;
    transition: all 0.15s;
}

.rc-tabs-trigger:hover {
    color: var(--tabs-text-active);
}

.rc-tabs-trigger[data-state="active"] {
    background: var(--tabs-bg);
    color: var(--tabs-text-active);
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.08);
}

.rc-tabs-trigger:focus-visible {
    outline: 2px solid var(--tabs-ring);
    outline-offset: 1px;
}

.rc-tabs-content {
    margin-top: 12px;
}

.rc-tabs-content[hidden] {
    display: none;
}
"#;
