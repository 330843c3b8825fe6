//! Tab identifiers.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque value naming a tab.
///
/// Equality is exact string match. Uniqueness within one root is the
/// caller's responsibility; two triggers sharing a value are both selected
/// when that value is active.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(String);

impl TabId {
    /// Wraps a raw tab value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the id and returns the raw value.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TabId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TabId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TabId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for TabId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for TabId {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl PartialEq<str> for TabId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TabId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
