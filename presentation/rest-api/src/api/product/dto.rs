use chrono::{DateTime, Utc};
use poem::Body;
use poem_openapi::Object;
use serde_json::{Map, Value};

use business::domain::product::model::Product;
use business::domain::product::value_objects::FieldInput;

/// Writable fields of a create or update body, keyed by their JSON names.
///
/// The body is read inside the handler, after the caller is identified.
/// Anything that is not a JSON object counts as a body with no fields, so
/// the use case answers it with its usual validation error. A `userId`
/// sent by the client is never read.
#[derive(Debug, Default)]
pub struct ProductFields(Map<String, Value>);

impl ProductFields {
    pub async fn read(body: Body) -> Self {
        let bytes = body.into_bytes().await.unwrap_or_default();
        Self::parse(&bytes)
    }

    pub fn parse(bytes: &[u8]) -> Self {
        match serde_json::from_slice(bytes) {
            Ok(Value::Object(map)) => Self(map),
            _ => Self::default(),
        }
    }

    /// Raw fields as (title, description, imageUrl).
    pub fn into_inputs(mut self) -> (FieldInput, FieldInput, FieldInput) {
        (
            self.0.remove("title").into(),
            self.0.remove("description").into(),
            self.0.remove("imageUrl").into(),
        )
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// Identity of the owner
    pub user_id: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title,
            description: product.description,
            image_url: product.image_url,
            user_id: product.user_id.to_string(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_read_fields_by_json_name() {
        let fields = ProductFields::parse(
            br#"{"title": "Lamp", "description": null, "imageUrl": 3, "userId": "mallory"}"#,
        );

        let (title, description, image_url) = fields.into_inputs();

        assert_eq!(title, FieldInput::Text("Lamp".to_string()));
        assert_eq!(description, FieldInput::NotText);
        assert_eq!(image_url, FieldInput::NotText);
    }

    #[test]
    fn should_treat_non_object_body_as_empty() {
        let bodies: [&[u8]; 4] = [b"not json", br#"["T", "D"]"#, br#""T""#, b""];

        for body in bodies {
            let (title, description, image_url) = ProductFields::parse(body).into_inputs();

            assert!(title.is_absent());
            assert!(description.is_absent());
            assert!(image_url.is_absent());
        }
    }
}
