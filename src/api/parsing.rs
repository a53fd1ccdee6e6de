use std::collections::HashMap;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use percent_encoding::percent_decode_str;
use serde_json::Value;

use crate::core::models::{FormSubmission, LengthBucket};

pub const TEXT_FIELD: &str = "text_to_summarize";
pub const LENGTH_FIELD: &str = "summary_length";

/// Decodes an `application/x-www-form-urlencoded` component.
///
/// ```
/// use tldr_page::api::parsing::decode_url_component;
///
/// assert_eq!(decode_url_component("hello+world").unwrap(), "hello world");
/// assert_eq!(decode_url_component("1%2B1%3D2").unwrap(), "1+1=2");
/// ```
pub fn decode_url_component(input: &str) -> Result<String, String> {
    let spaced = input.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|e| format!("Failed to decode URL component: {}", e))
}

/// Parses a form body into key/value pairs. The first occurrence of a key wins.
pub fn parse_form_pairs(form_body: &str) -> Result<HashMap<String, String>, String> {
    let mut map: HashMap<String, String> = HashMap::new();

    for pair in form_body.split('&').filter(|p| !p.is_empty()) {
        let (raw_key, raw_val) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode_url_component(raw_key)
            .map_err(|e| format!("Failed to decode key: {}", e))?;
        let value = decode_url_component(raw_val)
            .map_err(|e| format!("Failed to decode value: {}", e))?;
        map.entry(key).or_insert(value);
    }

    Ok(map)
}

/// Reads the summarizer form fields out of a urlencoded body.
pub fn parse_form_submission(form_body: &str) -> Result<FormSubmission, String> {
    let mut map = parse_form_pairs(form_body)?;
    Ok(FormSubmission {
        text: map.remove(TEXT_FIELD),
        length: LengthBucket::from_form_value(map.get(LENGTH_FIELD).map(String::as_str)),
    })
}

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// HTTP method of an API Gateway (v1 or v2) or function URL event.
pub fn request_method(payload: &Value) -> Option<&str> {
    payload
        .get("requestContext")
        .and_then(|c| c.get("http"))
        .and_then(|h| h.get("method"))
        .and_then(Value::as_str)
        .or_else(|| payload.get("httpMethod").and_then(Value::as_str))
}

pub fn request_path(payload: &Value) -> &str {
    payload
        .get("rawPath")
        .and_then(Value::as_str)
        .or_else(|| payload.get("path").and_then(Value::as_str))
        .unwrap_or("/")
}

/// Returns the request body as text, undoing API Gateway's base64 wrapping.
/// A missing or null body is an empty string.
pub fn extract_body(payload: &Value) -> Result<String, String> {
    let Some(body) = payload.get("body").and_then(Value::as_str) else {
        return Ok(String::new());
    };

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !is_base64 {
        return Ok(body.to_string());
    }

    let bytes = STANDARD
        .decode(body)
        .map_err(|e| format!("Invalid base64 body: {}", e))?;
    String::from_utf8(bytes).map_err(|e| format!("Body is not UTF-8: {}", e))
}
