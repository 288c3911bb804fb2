use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cf_cheat_detector_libs::CheckOutcome;

/// Rejection of a request whose query string couldn't be parsed or validated.
#[derive(Debug)]
pub struct ParameterRejection {
    pub message: String,
}

impl ParameterRejection {
    pub fn new(message: impl ToString) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl IntoResponse for ParameterRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(CheckOutcome::Error {
                message: self.message,
            }),
        )
            .into_response()
    }
}

/// HTTP status for an outcome served by the JSON API.
pub fn status_of(outcome: &CheckOutcome) -> StatusCode {
    match outcome {
        CheckOutcome::Error { .. } => StatusCode::BAD_GATEWAY,
        _ => StatusCode::OK,
    }
}
