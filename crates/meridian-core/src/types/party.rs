//! Legal party identifiers and the reporting perspective.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A legal party to a trade, identified by name.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Party(String);

impl Party {
    /// Creates a new party identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the party name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Party {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Party {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The perspective a valuation is reported from.
///
/// A trade has two legal parties. Valuation numbers are signed from the
/// point of view of one of them: flows that party pays are negative, flows
/// it receives are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BaseParty {
    /// Value the trade from the first leg party's perspective.
    Party1,
    /// Value the trade from the second leg party's perspective.
    ///
    /// This is the default perspective when the reporting party matches
    /// neither leg party, a legacy behavior the platform preserves.
    #[default]
    Party2,
}

impl BaseParty {
    /// Matches a reporting party against the trade's leg parties.
    ///
    /// Returns `None` when the reporting party is neither `party1` nor
    /// `party2`; callers fall back to [`BaseParty::Party2`] in that case
    /// (see [`BaseParty::default`]).
    #[must_use]
    pub fn try_match(reporting: &Party, party1: &Party, party2: &Party) -> Option<Self> {
        if reporting == party1 {
            Some(BaseParty::Party1)
        } else if reporting == party2 {
            Some(BaseParty::Party2)
        } else {
            None
        }
    }

    /// Returns the opposite perspective.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            BaseParty::Party1 => BaseParty::Party2,
            BaseParty::Party2 => BaseParty::Party1,
        }
    }
}

impl fmt::Display for BaseParty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseParty::Party1 => write!(f, "Party1"),
            BaseParty::Party2 => write!(f, "Party2"),
        }
    }
}
