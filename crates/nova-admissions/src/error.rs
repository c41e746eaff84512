use crate::config::ConfigError;
use crate::credits::CreditError;
use crate::eligibility::{EligibilityValidationError, RubricError};
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

/// Failures surfaced by the service and command-line entry points.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Rubric(RubricError),
    Credit(CreditError),
    Eligibility(EligibilityValidationError),
    Io(std::io::Error),
    Server(axum::Error),
    Input(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Rubric(err) => write!(f, "scoring rubric rejected: {}", err),
            AppError::Credit(err) => write!(f, "credit estimate unavailable: {}", err),
            AppError::Eligibility(err) => write!(f, "eligibility check unavailable: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Input(detail) => write!(f, "invalid input: {}", detail),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Rubric(err) => Some(err),
            AppError::Credit(err) => Some(err),
            AppError::Eligibility(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Input(_) => None,
        }
    }
}

impl AppError {
    /// Messages meant for the person filling in a form, if this error came from one.
    pub fn form_messages(&self) -> Option<Vec<String>> {
        match self {
            AppError::Credit(err) => Some(err.messages()),
            AppError::Eligibility(err) => Some(err.messages().to_vec()),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(errors) = self.form_messages() {
            let body = Json(json!({ "errors": errors }));
            return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
        }

        let status = match self {
            AppError::Input(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<RubricError> for AppError {
    fn from(value: RubricError) -> Self {
        Self::Rubric(value)
    }
}

impl From<CreditError> for AppError {
    fn from(value: CreditError) -> Self {
        Self::Credit(value)
    }
}

impl From<EligibilityValidationError> for AppError {
    fn from(value: EligibilityValidationError) -> Self {
        Self::Eligibility(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Input(value.to_string())
    }
}
