//! Person model
//!
//! People are the members of a household that a transaction can be split
//! across.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::is_hex_color;
use super::ids::PersonId;

/// Palette new people and categories pick their color from
pub const PALETTE: &[&str] = &[
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD", "#98D8C8", "#F7DC6F",
    "#BB8FCE", "#85C1E9",
];

/// Pick a palette color for the `index`-th entity
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// A member of the household
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

impl Person {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: PersonId::new(),
            name: name.into(),
            color: color.into(),
            created_at: Utc::now(),
        }
    }

    pub fn validate(&self) -> Result<(), PersonValidationError> {
        if self.name.trim().is_empty() {
            return Err(PersonValidationError::EmptyName);
        }
        if !is_hex_color(&self.color) {
            return Err(PersonValidationError::InvalidColor(self.color.clone()));
        }
        Ok(())
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for people
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonValidationError {
    EmptyName,
    InvalidColor(String),
}

impl fmt::Display for PersonValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Person name cannot be empty"),
            Self::InvalidColor(color) => write!(f, "Invalid color '{}'", color),
        }
    }
}

impl std::error::Error for PersonValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_wraps() {
        assert_eq!(palette_color(0), "#FF6B6B");
        assert_eq!(palette_color(PALETTE.len()), "#FF6B6B");
        assert_eq!(palette_color(1), "#4ECDC4");
    }

    #[test]
    fn test_person_validation() {
        let mut person = Person::new("Alex", "#45B7D1");
        assert!(person.validate().is_ok());

        person.name = String::new();
        assert_eq!(person.validate(), Err(PersonValidationError::EmptyName));
    }
}
