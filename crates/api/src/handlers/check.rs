use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::{error, instrument};

/// Single lookup without an explicit type; NS is used.
#[instrument(skip(state), name = "api_check_name")]
pub async fn check_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<String, (StatusCode, &'static str)> {
    run_check(&state, &name, None).await
}

/// Single lookup with an explicit record-type token.
#[instrument(skip(state), name = "api_check_name_with_type")]
pub async fn check_name_with_type(
    State(state): State<AppState>,
    Path((name, qtype)): Path<(String, String)>,
) -> Result<String, (StatusCode, &'static str)> {
    run_check(&state, &name, Some(&qtype)).await
}

async fn run_check(
    state: &AppState,
    name: &str,
    qtype: Option<&str>,
) -> Result<String, (StatusCode, &'static str)> {
    match state.check_domain.execute(name, qtype).await {
        Ok(line) => Ok(line),
        Err(e) => {
            error!(name = %name, error = %e, "Lookup failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, "lookup failed"))
        }
    }
}
