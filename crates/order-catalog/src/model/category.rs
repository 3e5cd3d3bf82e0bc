use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Natural key of a [`Category`] (e.g. `CAT1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryCode(pub String);

impl From<&str> for CategoryCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl Display for CategoryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A grouping label for products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    code: CategoryCode,
    label: String,
}

impl Category {
    /// Creates a category. Fails if `code` is blank.
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(ValidationError::EmptyCategoryCode);
        }
        Ok(Self {
            code: CategoryCode(code),
            label: label.into(),
        })
    }

    pub fn code(&self) -> &CategoryCode {
        &self.code
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Payload for creating a new category.
#[derive(Debug, Clone)]
pub struct CategoryCreate {
    pub code: String,
    pub label: String,
}
