//! URL and body building helpers.
//!
//! The API is served per tenant from `https://<subdomain>.signrequest.com`.
//! Base URLs are templates holding [`SUBDOMAIN_PLACEHOLDER`], substituted at
//! request time.

use crate::types::JsonObject;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde_json::Value;

/// Token replaced by `"<subdomain>."` (or nothing) in a base URL template.
pub const SUBDOMAIN_PLACEHOLDER: &str = "[SUBDOMAIN]";

/// Default base URL template.
pub const DEFAULT_API_BASE_URL: &str = "https://[SUBDOMAIN]signrequest.com/api/v1";

/// Resolve a base URL template for a tenant.
///
/// A template without the placeholder is returned unchanged.
///
/// ```
/// use signrequest::request::build_base_url;
///
/// let template = "https://[SUBDOMAIN]example.com/api/v1";
/// assert_eq!(build_base_url(template, Some("acme")), "https://acme.example.com/api/v1");
/// assert_eq!(build_base_url(template, None), "https://example.com/api/v1");
/// ```
pub fn build_base_url(template: &str, subdomain: Option<&str>) -> String {
    let host_prefix = subdomain
        .map(|s| format!("{}.", s).trim_start_matches('.').to_string())
        .unwrap_or_default();

    template.replace(SUBDOMAIN_PLACEHOLDER, &host_prefix)
}

/// Build the URI for an API action. The API rejects paths without the trailing slash.
pub fn build_action_uri(base_url: &str, action: &str) -> String {
    format!("{}/{}/", base_url, action)
}

/// Encode raw file bytes for the `file_from_content` fields.
pub fn encode_file_contents(contents: &[u8]) -> String {
    BASE64.encode(contents)
}

/// Overlay fixed request fields on caller settings.
///
/// Fixed fields always win. A `None` field is left out of the body and also
/// drops any same-named caller setting.
pub(crate) fn merge_settings<'a>(
    mut settings: JsonObject,
    fields: impl IntoIterator<Item = (&'a str, Option<Value>)>,
) -> Value {
    for (key, value) in fields {
        match value {
            Some(value) => settings.insert(key.to_string(), value),
            None => settings.remove(key),
        };
    }
    Value::Object(settings)
}
