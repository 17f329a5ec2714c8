use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

pub type AppResult<T> = Result<T, AppError>;

/// The inventory operation a database failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Initialize,
    List,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Initialize => "initialize",
            Operation::List => "list",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database connection string is missing.")]
    ConfigurationMissing,

    #[error("{operation} failed: {source}")]
    DatabaseOperationFailed {
        operation: Operation,
        #[source]
        source: sqlx::Error,
    },
}

impl AppError {
    /// Adapter for `map_err` on sqlx results.
    pub fn database(operation: Operation) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| AppError::DatabaseOperationFailed { operation, source }
    }

    /// Plain-text body sent to the caller.
    pub fn public_message(&self) -> String {
        match self {
            AppError::ConfigurationMissing => self.to_string(),
            AppError::DatabaseOperationFailed {
                operation: Operation::Initialize,
                ..
            } => "Database initialization failed.".to_string(),
            AppError::DatabaseOperationFailed { source, .. } => format!("Database error: {}", source),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::ConfigurationMissing => error!("Connection string is not configured."),
            AppError::DatabaseOperationFailed { operation, source } => {
                error!(operation = %operation, error = %source, "Database operation failed")
            }
        }

        (StatusCode::INTERNAL_SERVER_ERROR, self.public_message()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::CONTENT_TYPE;

    fn protocol_error(op: Operation) -> AppError {
        AppError::database(op)(sqlx::Error::Protocol("boom".to_string()))
    }

    #[test]
    fn missing_configuration_message() {
        assert_eq!(
            AppError::ConfigurationMissing.public_message(),
            "Database connection string is missing."
        );
    }

    #[test]
    fn initialize_failure_hides_detail() {
        assert_eq!(
            protocol_error(Operation::Initialize).public_message(),
            "Database initialization failed."
        );
    }

    #[test]
    fn other_failures_carry_detail() {
        let message = protocol_error(Operation::List).public_message();
        assert!(message.starts_with("Database error: "));
        assert!(message.contains("boom"));
    }

    #[test]
    fn every_error_maps_to_500_plain_text() {
        for err in [AppError::ConfigurationMissing, protocol_error(Operation::Delete)] {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            let content_type = response.headers().get(CONTENT_TYPE).unwrap().to_str().unwrap();
            assert!(content_type.starts_with("text/plain"));
        }
    }
}
