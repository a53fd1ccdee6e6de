//! Response builders for the API Gateway proxy integration.

use serde_json::{Value, json};

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Returns an HTML response with the given status code.
#[must_use]
pub fn html_response(status_code: u16, body: &str, request_id: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": {
            "Content-Type": HTML_CONTENT_TYPE,
            "Cache-Control": "no-store",
            "X-Request-Id": request_id
        },
        "isBase64Encoded": false,
        "body": body
    })
}

/// Returns a 405 response advertising the supported methods.
#[must_use]
pub fn method_not_allowed(request_id: &str) -> Value {
    json!({
        "statusCode": 405,
        "headers": {
            "Allow": "GET, POST",
            "Content-Type": "text/plain; charset=utf-8",
            "X-Request-Id": request_id
        },
        "isBase64Encoded": false,
        "body": "Method Not Allowed"
    })
}
