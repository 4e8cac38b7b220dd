use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use portfolio_contact::{ContactSubmission, ValidationError};
use portfolio_notification::DeliveryError;
use serde::Serialize;

use crate::routes::AppState;

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
}

/// Failures of `POST /api/contact`, each rendered as a JSON error body
#[derive(Debug, thiserror::Error)]
pub enum ContactApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

impl IntoResponse for ContactApiError {
    fn into_response(self) -> Response {
        match self {
            ContactApiError::Validation(err) => {
                tracing::warn!(fields = ?err.fields(), "Contact submission rejected");

                (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({ "error": err.to_string() })),
                )
                    .into_response()
            }
            ContactApiError::Delivery(err) => {
                tracing::error!(error = %err, "Email send error");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({
                        "error": "Failed to send email.",
                        "details": err.to_string(),
                    })),
                )
                    .into_response()
            }
        }
    }
}

/// POST /api/contact
///
/// # Returns
/// - 200 OK: `{"success": true}` once the mail relay accepted the message
/// - 400 Bad Request: a field is missing or empty, nothing is sent
/// - 500 Internal Server Error: the relay attempt failed, with `details`
#[tracing::instrument(skip_all)]
pub async fn action(
    State(app_state): State<AppState>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<Json<ContactResponse>, ContactApiError> {
    // An unreadable body carries no field at all
    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable contact payload");
            ContactSubmission::default()
        }
    };

    let submission = submission.into_valid()?;

    app_state.relay.relay(&submission).await?;

    Ok(Json(ContactResponse { success: true }))
}
