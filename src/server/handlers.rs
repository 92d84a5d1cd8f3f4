use super::types::{ErrorResponse, ResponseStatus, RunResponse};
use crate::runner::ScriptRunner;
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub runner: Arc<dyn ScriptRunner>,
}

pub async fn execute_script(
    State(state): State<AppState>,
) -> Result<Json<RunResponse>, (StatusCode, Json<ErrorResponse>)> {
    info!("Received script trigger request");

    match state.runner.run().await {
        Ok(output) => {
            info!("Script completed, captured {} bytes of output", output.len());
            Ok(Json(RunResponse {
                status: ResponseStatus::Success,
                output,
            }))
        }
        Err(e) => {
            // Details stay in the log; the wire message is fixed.
            error!("Script execution failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    status: ResponseStatus::Error,
                    message: "Failed to execute Python script".to_string(),
                }),
            ))
        }
    }
}

pub async fn method_not_allowed() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse {
            status: ResponseStatus::Error,
            message: "Method Not Allowed".to_string(),
        }),
    )
}
