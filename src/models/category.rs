//! Category model
//!
//! A category tags earnings or expenses; it is only valid for transactions of
//! its own type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::CategoryId;

/// Which kind of transaction a category (or a list of transactions) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryType {
    Earning,
    Expense,
}

impl CategoryType {
    pub fn all() -> &'static [Self] {
        &[Self::Earning, Self::Expense]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Earning => "earning",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CategoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "earning" | "earnings" | "income" => Ok(Self::Earning),
            "expense" | "expenses" => Ok(Self::Expense),
            other => Err(format!(
                "Unknown category type '{}' (expected 'earning' or 'expense')",
                other
            )),
        }
    }
}

/// A category for earnings or expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,

    pub name: String,

    /// Display color, e.g. `#FF6B6B`
    pub color: String,

    #[serde(rename = "type")]
    pub kind: CategoryType,

    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>, color: impl Into<String>, kind: CategoryType) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            color: color.into(),
            kind,
            created_at: Utc::now(),
        }
    }

    /// Create a category with a fixed ID
    pub fn with_id(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        color: impl Into<String>,
        kind: CategoryType,
    ) -> Self {
        let mut category = Self::new(name, color, kind);
        category.id = id.into();
        category
    }

    /// Whether this category may tag a transaction of `kind`
    pub fn accepts(&self, kind: CategoryType) -> bool {
        self.kind == kind
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        if !is_hex_color(&self.color) {
            return Err(CategoryValidationError::InvalidColor(self.color.clone()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Whether `color` looks like `#RGB` or `#RRGGBB`
pub(crate) fn is_hex_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    InvalidColor(String),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
            Self::InvalidColor(color) => write!(f, "Invalid color '{}'", color),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
