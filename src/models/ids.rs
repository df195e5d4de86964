//! Strongly-typed ID wrappers for all entity types
//!
//! IDs are strings on disk (UUID v4 when generated here) so that documents
//! written by other tools, and the `"other"` category sentinel, round-trip.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate string-backed ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Short form used in listings (first 8 characters)
            pub fn short(&self) -> &str {
                match self.0.char_indices().nth(8) {
                    Some((idx, _)) => &self.0[..idx],
                    None => &self.0,
                }
            }

            /// Whether `candidate` is this ID or a prefix of it
            pub fn matches_prefix(&self, candidate: &str) -> bool {
                !candidate.is_empty() && self.0.starts_with(candidate)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().to_string()))
            }
        }
    };
}

define_id!(PersonId);
define_id!(CategoryId);
define_id!(TransactionId);
define_id!(BudgetPageId);

impl CategoryId {
    /// Sentinel a transaction without a category resolves to
    pub const OTHER: &'static str = "other";

    pub fn other() -> Self {
        Self(Self::OTHER.to_string())
    }
}
