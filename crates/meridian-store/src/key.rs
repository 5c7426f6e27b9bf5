//! Structured store keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A store namespace, isolating one environment's objects from another's.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Namespace(String);

impl Namespace {
    /// Creates a namespace.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the namespace as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Namespace {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The category of a stored object.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Category {
    /// A booked trade document.
    Trade,
    /// A published term-curve snapshot.
    Curve,
    /// A published volatility matrix.
    VolMatrix,
    /// A flattened valuation report.
    ValuationReport,
}

impl Category {
    /// Returns the category's wire name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Trade => "Trade",
            Self::Curve => "Curve",
            Self::VolMatrix => "VolMatrix",
            Self::ValuationReport => "ValuationReport",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A fully qualified store key: namespace, category, and object name.
///
/// This is the only addressing scheme the platform uses. [`ObjectKey::to_string`]
/// (via [`fmt::Display`]) is the single point where the parts are joined
/// into the wire form `<namespace>.<category>.<name>`; nothing else builds
/// key strings by hand.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct ObjectKey {
    /// Owning namespace.
    pub namespace: Namespace,
    /// Object category.
    pub category: Category,
    /// Object name, unique within namespace and category.
    pub name: String,
}

impl ObjectKey {
    /// Creates a key.
    pub fn new(namespace: Namespace, category: Category, name: impl Into<String>) -> Self {
        Self {
            namespace,
            category,
            name: name.into(),
        }
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.namespace, self.category, self.name)
    }
}
