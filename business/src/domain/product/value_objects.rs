use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::errors::ProductError;

/// Opaque product identifier.
///
/// New ids are UUID v4 strings, but lookups accept any string: an id that
/// was never issued is simply not found.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One optional field of a request body, as received.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldInput {
    #[default]
    Absent,
    Text(String),
    /// Present, but not a JSON string (`null` included).
    NotText,
}

impl FieldInput {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldInput::Absent)
    }

    /// Returns the value when it is a string with visible content.
    pub fn non_blank(&self) -> Option<&str> {
        match self {
            FieldInput::Text(s) if !s.trim().is_empty() => Some(s),
            _ => None,
        }
    }
}

impl From<Option<Value>> for FieldInput {
    fn from(value: Option<Value>) -> Self {
        match value {
            None => FieldInput::Absent,
            Some(Value::String(s)) => FieldInput::Text(s),
            Some(_) => FieldInput::NotText,
        }
    }
}

impl From<&str> for FieldInput {
    fn from(s: &str) -> Self {
        FieldInput::Text(s.to_string())
    }
}

/// Validated partial update. `None` keeps the stored value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl ProductChanges {
    /// Validates the raw update fields in order title, description, imageUrl.
    ///
    /// The first field that is present but blank (or not a string) fails the
    /// whole update; an update with no usable field is rejected.
    pub fn from_inputs(
        title: &FieldInput,
        description: &FieldInput,
        image_url: &FieldInput,
    ) -> Result<Self, ProductError> {
        let changes = Self {
            title: optional_field(title, ProductError::InvalidTitle)?,
            description: optional_field(description, ProductError::InvalidDescription)?,
            image_url: optional_field(image_url, ProductError::InvalidImageUrl)?,
        };

        if changes.is_empty() {
            return Err(ProductError::NoFieldsToUpdate);
        }
        Ok(changes)
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.image_url.is_none()
    }
}

fn optional_field(input: &FieldInput, invalid: ProductError) -> Result<Option<String>, ProductError> {
    if input.is_absent() {
        return Ok(None);
    }
    input
        .non_blank()
        .map(|s| Some(s.to_string()))
        .ok_or(invalid)
}
