//! Type definitions for the SignRequest client.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Untyped JSON object returned by most API calls.
pub type JsonObject = Map<String, Value>;

/// A document created through one of the `documents` calls.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CreatedDocument {
    /// Document UUID.
    pub uuid: String,
    /// Canonical API URL of the document.
    pub url: String,
    /// Security hash of the uploaded file.
    pub security_hash: String,
}

/// Decode the body of a document creation response.
pub fn decode_created_document(body: &[u8]) -> Result<CreatedDocument> {
    Ok(serde_json::from_slice(body)?)
}

/// A recipient of a sign request.
///
/// Only `email` is required. Any other signer attribute accepted by the API
/// (`first_name`, `order`, `redirect_url`, ...) goes in `attributes`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Signer {
    /// Signer e-mail address.
    pub email: String,
    /// Language of the signer's e-mails and signing page. Filled with the
    /// client's default language when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Additional signer attributes.
    #[serde(flatten)]
    pub attributes: JsonObject,
}

impl Signer {
    /// Create a signer with only an e-mail address.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }

    /// Set the signer language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set an additional attribute.
    ///
    /// `email` and `language` given as strings set the typed fields instead.
    /// A non-string `email` is ignored.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let value = value.into();
        match key.as_str() {
            "email" => {
                if let Value::String(email) = value {
                    self.email = email;
                }
            }
            "language" if value.is_string() => {
                self.language = value.as_str().map(str::to_string);
            }
            _ => {
                self.attributes.insert(key, value);
            }
        }
        self
    }

    /// Prepare the signer for a sign request.
    ///
    /// The typed fields take precedence over same-named attributes. The
    /// default language is only applied when no `language` is present at
    /// all; a non-string `language` attribute is sent as given.
    pub(crate) fn with_default_language(mut self, default_language: &str) -> Self {
        self.attributes.remove("email");

        if self.language.is_some() {
            self.attributes.remove("language");
            return self;
        }

        match self.attributes.remove("language") {
            Some(Value::String(language)) => self.language = Some(language),
            Some(other) => {
                self.attributes.insert("language".to_string(), other);
            }
            None => self.language = Some(default_language.to_string()),
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_created_document() {
        let body = br#"{"uuid":"u1","url":"http://x/doc/1","security_hash":"abc","name":"a.pdf"}"#;
        let document = decode_created_document(body).unwrap();

        assert_eq!(document.uuid, "u1");
        assert_eq!(document.url, "http://x/doc/1");
        assert_eq!(document.security_hash, "abc");
    }

    #[test]
    fn test_decode_created_document_missing_field() {
        let result = decode_created_document(br#"{"uuid":"u1"}"#);
        assert!(matches!(
            result,
            Err(crate::SignRequestError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_signer_serialization() {
        let signer = Signer::new("jan@example.com")
            .with_language("en")
            .with_attribute("first_name", "Jan")
            .with_attribute("order", 1);

        assert_eq!(
            serde_json::to_value(&signer).unwrap(),
            json!({
                "email": "jan@example.com",
                "language": "en",
                "first_name": "Jan",
                "order": 1
            })
        );
    }

    #[test]
    fn test_signer_without_language_omits_it() {
        let value = serde_json::to_value(Signer::new("a@example.com")).unwrap();
        assert_eq!(value, json!({"email": "a@example.com"}));
    }

    #[test]
    fn test_default_language_applied() {
        let signer = Signer::new("a@example.com").with_default_language("nl");
        assert_eq!(signer.language.as_deref(), Some("nl"));
    }

    #[test]
    fn test_explicit_language_kept() {
        let signer = Signer::new("a@example.com")
            .with_language("fr")
            .with_default_language("nl");
        assert_eq!(signer.language.as_deref(), Some("fr"));
    }

    #[test]
    fn test_language_attribute_kept() {
        let signer = Signer::new("a@example.com")
            .with_attribute("language", "de")
            .with_default_language("nl");

        assert_eq!(signer.language.as_deref(), Some("de"));
        assert!(!signer.attributes.contains_key("language"));
    }

    #[test]
    fn test_signer_deserialize() {
        let signer: Signer =
            serde_json::from_value(json!({"email": "a@example.com", "needs_to_sign": false}))
                .unwrap();

        assert_eq!(signer.email, "a@example.com");
        assert_eq!(signer.language, None);
        assert_eq!(signer.attributes.get("needs_to_sign"), Some(&json!(false)));
    }

    #[test]
    fn test_null_language_attribute_left_unchanged() {
        let signer = Signer {
            email: "a@example.com".to_string(),
            language: None,
            attributes: serde_json::from_value(json!({"language": null})).unwrap(),
        }
        .with_default_language("nl");

        assert_eq!(signer.language, None);
        assert_eq!(
            serde_json::to_value(&signer).unwrap(),
            json!({"email": "a@example.com", "language": null})
        );
    }

    #[test]
    fn test_typed_language_wins_over_attribute() {
        let mut signer = Signer::new("a@example.com").with_language("fr");
        signer
            .attributes
            .insert("language".to_string(), json!("de"));

        let signer = signer.with_default_language("nl");
        assert_eq!(
            serde_json::to_value(&signer).unwrap(),
            json!({"email": "a@example.com", "language": "fr"})
        );
    }

    #[test]
    fn test_email_attribute_cannot_replace_email() {
        let mut signer = Signer::new("a@example.com");
        signer
            .attributes
            .insert("email".to_string(), json!("b@example.com"));

        let signer = signer.with_default_language("nl");
        assert_eq!(
            serde_json::to_value(&signer).unwrap(),
            json!({"email": "a@example.com", "language": "nl"})
        );
    }

    #[test]
    fn test_with_attribute_routes_reserved_keys() {
        let signer = Signer::new("a@example.com")
            .with_attribute("email", "b@example.com")
            .with_attribute("email", 42)
            .with_attribute("language", "de");

        assert_eq!(signer.email, "b@example.com");
        assert_eq!(signer.language.as_deref(), Some("de"));
        assert!(signer.attributes.is_empty());
    }

    #[test]
    fn test_with_attribute_null_language_kept_as_attribute() {
        let signer = Signer::new("a@example.com")
            .with_attribute("language", Value::Null)
            .with_default_language("nl");

        assert_eq!(
            serde_json::to_value(&signer).unwrap(),
            json!({"email": "a@example.com", "language": null})
        );
    }
}
