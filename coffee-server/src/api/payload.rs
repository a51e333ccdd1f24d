//! Request body extractor
//!
//! Accepts `application/json` and `application/x-www-form-urlencoded`. In a
//! form, list fields (`ingredients`, `items`) carry JSON text and numeric
//! fields (`quantity`, `price`) carry decimal text. Any other content type is
//! rejected with 415.

use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use shared::error::{AppError, AppResult, ErrorCode};

const LIST_FIELDS: &[&str] = &["ingredients", "items"];
const NUMERIC_FIELDS: &[&str] = &["quantity", "price"];

/// JSON or form body deserialized into `T`
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match mime.as_str() {
            "application/json" => {
                let Json(value) = Json::<T>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::with_message(ErrorCode::InvalidFormat, e.body_text()))?;
                Ok(Payload(value))
            }
            "application/x-www-form-urlencoded" => {
                let Form(fields) = Form::<Vec<(String, String)>>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::with_message(ErrorCode::InvalidFormat, e.body_text()))?;
                let value = form_to_json(fields)?;
                serde_json::from_value(value)
                    .map(Payload)
                    .map_err(|e| AppError::with_message(ErrorCode::InvalidFormat, e.to_string()))
            }
            _ => Err(AppError::unsupported_content_type().with_detail("content_type", content_type)),
        }
    }
}

/// Turn flat form fields into the JSON shape of the target type
fn form_to_json(fields: Vec<(String, String)>) -> AppResult<Value> {
    let mut map = Map::with_capacity(fields.len());
    for (key, raw) in fields {
        let value = if LIST_FIELDS.contains(&key.as_str()) {
            serde_json::from_str(&raw).map_err(|e| {
                AppError::with_message(ErrorCode::InvalidFormat, format!("{key}: {e}"))
                    .with_detail("field", key.as_str())
            })?
        } else if NUMERIC_FIELDS.contains(&key.as_str()) {
            parse_number(&raw).ok_or_else(|| {
                AppError::with_message(ErrorCode::InvalidFormat, format!("{key} must be a number"))
                    .with_detail("field", key.as_str())
            })?
        } else {
            Value::String(raw)
        };
        map.insert(key, value);
    }
    Ok(Value::Object(map))
}

fn parse_number(raw: &str) -> Option<Value> {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<i64>() {
        return Some(Value::from(n));
    }
    raw.parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
}
