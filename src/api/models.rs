use axum::{Json, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use crate::error::CompassError;

// Request structs for JSON payloads

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct CreateSupplyRequest {
    pub image: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub amount: f64,
}

#[derive(Deserialize)]
pub struct CreateTestimonialRequest {
    pub name: String,
    pub title: String,
    pub description: String,
}

// Response shapes

/// Fixed `{success, message, data?}` wrapper used by most endpoints.
/// Login and registration keep their bespoke shapes.
#[derive(Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    pub fn with_data(message: &str, data: T) -> Self {
        Envelope {
            success: true,
            message: message.to_string(),
            data: Some(data),
        }
    }

    pub fn message_only(message: &str) -> Self {
        Envelope {
            success: true,
            message: message.to_string(),
            data: None,
        }
    }
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
}

#[derive(Serialize)]
pub struct HealthStatus {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

// Newtype wrapper for CompassError to implement IntoResponse. This is the
// top-level error boundary: anything internal collapses to a generic 500.
pub struct ApiError(pub CompassError);

impl From<CompassError> for ApiError {
    fn from(err: CompassError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self.0 {
            CompassError::DuplicateUser => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "message": "User already exists" })),
            )
                .into_response(),
            CompassError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Invalid email or password" })),
            )
                .into_response(),
            CompassError::StorageError(msg) | CompassError::InternalServerError(msg) => {
                error!("Request failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "message": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
