use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("{0} is required")]
    Validation(String),

    #[error("Startup idea {0} not found")]
    NotFound(u64),

    #[error("Failed to write to storage: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl FromStr for AppError {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(field) = s.strip_suffix(" is required") {
            return Ok(AppError::Validation(field.to_string()));
        }

        if let Some(id) = s
            .strip_prefix("Startup idea ")
            .and_then(|rest| rest.strip_suffix(" not found"))
            .and_then(|id| id.parse().ok())
        {
            return Ok(AppError::NotFound(id));
        }

        if let Some(msg) = s.strip_prefix("Failed to write to storage: ") {
            Ok(AppError::Storage(msg.to_string()))
        } else if let Some(msg) = s.strip_prefix("Internal error: ") {
            Ok(AppError::Internal(msg.to_string()))
        } else {
            Ok(AppError::Internal(s.to_string()))
        }
    }
}

impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(field) => format!("Please fill in the {field} field."),
            Self::NotFound(_) => "That startup idea no longer exists.".to_string(),
            Self::Storage(_) => "Your change was kept but could not be saved.".to_string(),
            Self::Internal(_) => "Something went wrong. Please try again.".to_string(),
        }
    }

    /// Errors the UI swallows instead of showing, e.g. an upvote on a stale card.
    pub fn is_ignorable(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(feature = "ssr")]
mod ssr_impl {
    use super::AppError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    #[derive(serde::Serialize)]
    struct ErrorResponse {
        error: String,
        message: String,
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = match &self {
                AppError::Validation(_) => StatusCode::BAD_REQUEST,
                AppError::NotFound(_) => StatusCode::NOT_FOUND,
                AppError::Storage(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            let body = ErrorResponse {
                error: self.to_string(),
                message: self.user_message(),
            };
            (status, Json(body)).into_response()
        }
    }
}
