use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;
use tracing::{error, warn};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The news provider answered with a non-"ok" status, or could not be
    /// reached or decoded at all.
    #[error("news provider error: {0}")]
    Upstream(String),

    #[error("persistence error: {0}")]
    Persistence(#[from] sqlx::Error),
}

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::Upstream(_) => "UPSTREAM_ERROR",
            Error::Persistence(_) => "PERSISTENCE_ERROR",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Error::Upstream(msg) => {
                warn!(error = %msg, "News provider request failed");
                (StatusCode::BAD_GATEWAY, msg.clone())
            }
            Error::Persistence(err) => {
                error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database unavailable".to_string(),
                )
            }
        };

        (status, Json(json!({"error": message, "code": self.code()}))).into_response()
    }
}
