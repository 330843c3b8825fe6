//! Conditional class-name merging.
//!
//! [`merge_classes`] flattens a list of [`ClassValue`] descriptors into one
//! space-separated class string:
//!
//! - falsy descriptors (`None`, empty strings, `false` toggles) are dropped,
//! - conflicting Tailwind utilities (same group, e.g. two paddings) resolve
//!   to the later one, repeats included,
//! - exact duplicates that survive keep their first position,
//! - anything unrecognised passes through untouched.
//!
//! ```rust
//! use tabkit_core::cn;
//!
//! assert_eq!(cn!("p-2", "p-4"), "p-4");
//! assert_eq!(
//!     cn!("text-red", [("font-bold", true), ("italic", false)]),
//!     "text-red font-bold"
//! );
//! ```

use std::collections::HashSet;

use tailwind_fuse::tw_merge;

/// One class descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ClassValue {
    /// Contributes nothing.
    #[default]
    Empty,
    /// Whitespace-separated class names.
    Names(String),
    /// Class names paired with an include flag.
    Toggles(Vec<(String, bool)>),
    /// Nested descriptors, flattened in order.
    List(Vec<ClassValue>),
}

impl ClassValue {
    fn collect_into<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            ClassValue::Empty => {}
            ClassValue::Names(names) => out.extend(names.split_whitespace()),
            ClassValue::Toggles(toggles) => out.extend(
                toggles
                    .iter()
                    .filter(|(_, on)| *on)
                    .flat_map(|(names, _)| names.split_whitespace()),
            ),
            ClassValue::List(items) => {
                for item in items {
                    item.collect_into(out);
                }
            }
        }
    }
}

impl From<&str> for ClassValue {
    fn from(value: &str) -> Self {
        ClassValue::Names(value.to_owned())
    }
}

impl From<String> for ClassValue {
    fn from(value: String) -> Self {
        ClassValue::Names(value)
    }
}

impl From<&String> for ClassValue {
    fn from(value: &String) -> Self {
        ClassValue::Names(value.clone())
    }
}

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ClassValue::Empty, Into::into)
    }
}

impl<const N: usize> From<[(&str, bool); N]> for ClassValue {
    fn from(value: [(&str, bool); N]) -> Self {
        ClassValue::Toggles(value.iter().map(|(k, on)| ((*k).to_owned(), *on)).collect())
    }
}

impl From<Vec<(&str, bool)>> for ClassValue {
    fn from(value: Vec<(&str, bool)>) -> Self {
        ClassValue::Toggles(value.into_iter().map(|(k, on)| (k.to_owned(), on)).collect())
    }
}

impl From<Vec<ClassValue>> for ClassValue {
    fn from(value: Vec<ClassValue>) -> Self {
        ClassValue::List(value)
    }
}

/// Merges class descriptors into one class string.
pub fn merge_classes<I>(values: I) -> String
where
    I: IntoIterator<Item = ClassValue>,
{
    let values: Vec<ClassValue> = values.into_iter().collect();
    let mut names = Vec::new();
    for value in &values {
        value.collect_into(&mut names);
    }

    if names.is_empty() {
        return String::new();
    }

    // Conflicts resolve over the full list, repeats included.
    let joined = names.join(" ");
    let merged = tw_merge!(joined.as_str());

    let mut seen = HashSet::new();
    merged
        .split_whitespace()
        .filter(|name| seen.insert(*name))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Merges any mix of `&str`, `String`, `Option<_>`, `[(&str, bool); N]`
/// and [`ClassValue`] arguments.
#[macro_export]
macro_rules! cn {
    ($($value:expr),* $(,)?) => {
        $crate::class::merge_classes([$($crate::class::ClassValue::from($value)),*])
    };
}
