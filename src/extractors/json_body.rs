//! Lenient JSON body: parsed when the request says it is JSON, an empty
//! object otherwise.

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};

/// Request body as JSON. Non-JSON or empty bodies become `{}` so every field reads as missing.
#[derive(Clone, Debug)]
pub struct JsonBody(pub Value);

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| ct.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
        })
        .unwrap_or(false)
}

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json(req.headers()) {
            return Ok(JsonBody(Value::Object(Map::new())));
        }
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(Value::Object(Map::new())));
        }
        match serde_json::from_slice::<Value>(&bytes) {
            Ok(v @ (Value::Object(_) | Value::Array(_))) => Ok(JsonBody(v)),
            Ok(_) => Err((StatusCode::BAD_REQUEST, "JSON body must be an object or array").into_response()),
            Err(e) => Err((StatusCode::BAD_REQUEST, format!("invalid JSON body: {}", e)).into_response()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde_json::json;

    fn request(content_type: Option<&str>, body: &str) -> Request {
        let mut builder = axum::http::Request::builder().method("POST").uri("/courses");
        if let Some(ct) = content_type {
            builder = builder.header(CONTENT_TYPE, ct);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    #[tokio::test]
    async fn parses_json_object() {
        let req = request(Some("application/json; charset=utf-8"), r#"{"title":"HW1"}"#);
        let JsonBody(v) = JsonBody::from_request(req, &()).await.unwrap();
        assert_eq!(v, json!({"title": "HW1"}));
    }

    #[tokio::test]
    async fn other_content_types_become_empty_object() {
        let req = request(Some("text/plain"), r#"{"title":"HW1"}"#);
        let JsonBody(v) = JsonBody::from_request(req, &()).await.unwrap();
        assert_eq!(v, json!({}));

        let req = request(None, "title=HW1");
        let JsonBody(v) = JsonBody::from_request(req, &()).await.unwrap();
        assert_eq!(v, json!({}));
    }

    #[tokio::test]
    async fn empty_json_body_is_empty_object() {
        let req = request(Some("application/json"), "");
        let JsonBody(v) = JsonBody::from_request(req, &()).await.unwrap();
        assert_eq!(v, json!({}));
    }

    #[tokio::test]
    async fn malformed_or_scalar_json_is_rejected() {
        let req = request(Some("application/json"), "{\"title\":");
        let rejection = JsonBody::from_request(req, &()).await.unwrap_err();
        assert_eq!(rejection.status(), StatusCode::BAD_REQUEST);

        let req = request(Some("application/json"), "42");
        let rejection = JsonBody::from_request(req, &()).await.unwrap_err();
        assert_eq!(rejection.status(), StatusCode::BAD_REQUEST);
    }
}
