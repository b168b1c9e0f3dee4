use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;

use crate::api::v1::response::ApiResponse;
use crate::error::HearthError;

/// Error envelope returned when a request body cannot be decoded.
pub type JsonBodyRejection = ApiResponse<()>;

/// JSON body extractor whose rejections use the v1 error envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(JsonBodyRejection))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for HearthError {
    fn from(rejection: JsonRejection) -> Self {
        map_json_rejection(rejection)
    }
}

impl From<JsonRejection> for JsonBodyRejection {
    fn from(rejection: JsonRejection) -> Self {
        HearthError::from(rejection).into()
    }
}

fn map_json_rejection(rejection: JsonRejection) -> HearthError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let message = err.body_text();
            if let Some(field) = extract_missing_field(&message) {
                HearthError::Validation(format!("Missing required field: {field}"))
            } else {
                HearthError::Validation(format!("Invalid JSON: {message}"))
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            HearthError::Validation(format!("JSON syntax error: {}", err.body_text()))
        }
        JsonRejection::MissingJsonContentType(_) => HearthError::Validation(
            "Missing `Content-Type: application/json` header".to_string(),
        ),
        JsonRejection::BytesRejection(_) => {
            HearthError::Internal("Failed to read request body".to_string())
        }
        _ => HearthError::Validation(rejection.body_text()),
    }
}

fn extract_missing_field(message: &str) -> Option<&str> {
    let prefix = "missing field `";
    let start = message.find(prefix)? + prefix.len();
    let remaining = message.get(start..)?;
    let end = remaining.find('`')?;
    remaining.get(..end)
}
