use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequest, Request},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{error::Category, Value};

use crate::core::error::AppError;
use crate::shared::types::ApiResponse;

/// JSON body extractor with envelope-shaped rejections
///
/// A body that is empty (or only whitespace) deserializes exactly like a
/// literal `null`, so `AppJson<Option<T>>` yields `None` for both and the
/// caller reports the missing payload itself.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json_content_type = has_json_content_type(req.headers());
        let body = Bytes::from_request(req, state)
            .await
            .map_err(AppJsonRejection::Body)?;

        if body.iter().all(u8::is_ascii_whitespace) {
            return T::deserialize(Value::Null)
                .map(Self)
                .map_err(AppJsonRejection::Data);
        }

        if !json_content_type {
            return Err(AppJsonRejection::MissingJsonContentType);
        }

        serde_json::from_slice(&body)
            .map(Self)
            .map_err(|e| match e.classify() {
                Category::Data => AppJsonRejection::Data(e),
                _ => AppJsonRejection::Syntax(e),
            })
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

pub enum AppJsonRejection {
    Body(BytesRejection),
    MissingJsonContentType,
    Syntax(serde_json::Error),
    Data(serde_json::Error),
}

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        let message = match self {
            // Keeps the body's own status, e.g. 413 when over the size limit
            AppJsonRejection::Body(rejection) => {
                let body = Json(ApiResponse::<()>::error(Some(rejection.body_text()), None));
                return (rejection.status(), body).into_response();
            }
            AppJsonRejection::MissingJsonContentType => {
                "Expected request with `Content-Type: application/json`".to_string()
            }
            AppJsonRejection::Syntax(err) => format!("Invalid JSON syntax: {}", err),
            AppJsonRejection::Data(err) => format!("Invalid JSON data: {}", err),
        };

        AppError::BadRequest(message).into_response()
    }
}
