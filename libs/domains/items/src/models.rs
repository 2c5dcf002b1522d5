//! Schema-less request payloads for the item resource.

use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Json;
use mongodb::bson::{Bson, Document};

use crate::error::ItemError;

/// Form field carrying the uploaded image file.
pub const IMAGE_FIELD: &str = "image";

/// A file uploaded alongside the item fields.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Original client-supplied filename, used verbatim as the stored name
    pub file_name: String,
    pub data: Bytes,
}

/// Decoded request body for create and update.
///
/// Items carry no compile-time schema: the body is kept as an ordered
/// field-name to BSON-value mapping, exactly as supplied by the client.
#[derive(Debug, Default)]
pub struct ItemPayload {
    pub fields: Document,
    pub image: Option<ImageUpload>,
}

impl ItemPayload {
    /// Build a payload from a JSON object value.
    pub fn from_json(value: serde_json::Value) -> Result<Self, ItemError> {
        if !value.is_object() {
            return Err(ItemError::Payload(
                "request body must be a JSON object".to_string(),
            ));
        }

        let fields =
            mongodb::bson::to_document(&value).map_err(|e| ItemError::Payload(e.to_string()))?;

        Ok(Self {
            fields,
            image: None,
        })
    }
}

/// Accepts either `application/json` (object body) or `multipart/form-data`
/// (text fields plus a single optional file field named `image`).
impl<S> FromRequest<S> for ItemPayload
where
    S: Send + Sync,
{
    type Rejection = ItemError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let mut multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| ItemError::Payload(e.to_string()))?;

            let mut payload = ItemPayload::default();

            while let Some(field) = multipart
                .next_field()
                .await
                .map_err(|e| ItemError::Payload(e.to_string()))?
            {
                let name = field.name().unwrap_or_default().to_string();
                let file_name = field.file_name().map(str::to_string);

                match file_name {
                    Some(file_name) if name == IMAGE_FIELD => {
                        // Single-file upload: a second file part is a client error
                        if payload.image.is_some() {
                            return Err(ItemError::Payload(
                                "only one 'image' file may be uploaded".to_string(),
                            ));
                        }
                        let data = field
                            .bytes()
                            .await
                            .map_err(|e| ItemError::Payload(e.to_string()))?;
                        payload.image = Some(ImageUpload { file_name, data });
                    }
                    // Only the `image` field may carry a file
                    Some(_) => {
                        return Err(ItemError::Payload(format!(
                            "unexpected file field '{}'",
                            name
                        )));
                    }
                    None => {
                        let text = field
                            .text()
                            .await
                            .map_err(|e| ItemError::Payload(e.to_string()))?;
                        payload.fields.insert(name, Bson::String(text));
                    }
                }
            }

            Ok(payload)
        } else if content_type.starts_with("application/json") {
            let Json(value) = Json::<serde_json::Value>::from_request(req, state)
                .await
                .map_err(|e| ItemError::Payload(e.to_string()))?;

            Self::from_json(value)
        } else {
            Err(ItemError::Payload(format!(
                "unsupported content type '{}'",
                content_type
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_object_preserves_fields_and_order() {
        let payload = ItemPayload::from_json(json!({
            "id": "42",
            "description": "lamp",
            "condition": "good"
        }))
        .unwrap();

        let keys: Vec<&str> = payload.fields.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["id", "description", "condition"]);
        assert_eq!(payload.fields.get_str("id").unwrap(), "42");
        assert_eq!(payload.fields.get_str("description").unwrap(), "lamp");
        assert!(payload.image.is_none());
    }

    #[test]
    fn test_from_json_keeps_nested_values() {
        let payload = ItemPayload::from_json(json!({
            "id": "7",
            "attributes": {"color": "red", "weight": 3}
        }))
        .unwrap();

        let attributes = payload.fields.get_document("attributes").unwrap();
        assert_eq!(attributes.get_str("color").unwrap(), "red");
        assert_eq!(attributes.get_i64("weight").unwrap(), 3);
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let err = ItemPayload::from_json(json!(["not", "an", "object"])).unwrap_err();
        assert!(matches!(err, ItemError::Payload(_)));

        let err = ItemPayload::from_json(json!("plain string")).unwrap_err();
        assert!(matches!(err, ItemError::Payload(_)));
    }

    #[test]
    fn test_from_json_accepts_empty_object() {
        let payload = ItemPayload::from_json(json!({})).unwrap();
        assert!(payload.fields.is_empty());
    }
}
