// --- File: crates/tito_common/src/http.rs ---
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::{AppError, HttpStatusCode};

pub mod client;

/// Extension trait for AppError to convert it to an Axum HTTP response.
pub trait IntoHttpResponse {
    /// Converts the error into an Axum HTTP response.
    fn into_http_response(self) -> Response;
}

impl IntoHttpResponse for AppError {
    fn into_http_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = Json(json!({
            "error": {
                "message": self.to_string(),
                "code": status_code.as_u16(),
            }
        }));

        (status_code, body).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}

/// Converts a domain `Result` into a JSON handler result, mapping the error
/// through `f` into an [`AppError`] response.
pub fn map_json_error<T, E, F>(result: Result<T, E>, f: F) -> Result<Json<T>, Response>
where
    T: serde::Serialize,
    F: FnOnce(E) -> AppError,
{
    result.map(Json).map_err(|err| f(err).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{config_error, external_service_error};

    #[test]
    fn test_error_response_status() {
        let response = config_error("missing token").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_map_json_error_passes_value_through() {
        let result: Result<serde_json::Value, &str> = Ok(json!({ "id": 1 }));
        match map_json_error(result, config_error) {
            Ok(Json(value)) => assert_eq!(value, json!({ "id": 1 })),
            Err(response) => panic!("expected value, got status {}", response.status()),
        }
    }

    #[test]
    fn test_map_json_error_uses_mapper() {
        let result: Result<serde_json::Value, &str> = Err("nope");
        match map_json_error(result, |e| external_service_error("Tito API", e)) {
            Ok(_) => panic!("expected an error response"),
            Err(response) => assert_eq!(response.status(), StatusCode::BAD_GATEWAY),
        }
    }
}
