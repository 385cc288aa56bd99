use crate::ingest::{parse_domain_list, IngestError};
use crate::state::AppState;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use tracing::{error, info, instrument};

/// Multipart field name the front end posts the domain list under.
const DOMAIN_LIST_PART: &str = "domainlist";

/// Bulk check: accepts a multipart upload with a `domainlist` part holding
/// comma/newline separated names, runs the batch lookup and returns one
/// line per name with bogus results first.
#[instrument(skip_all, name = "api_upload")]
pub async fn upload_domain_list(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<String, (StatusCode, &'static str)> {
    let mut document: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!(error = %e, "Malformed multipart request");
        (StatusCode::BAD_REQUEST, "malformed multipart request")
    })? {
        if field.name() == Some(DOMAIN_LIST_PART) {
            let text = field.text().await.map_err(|e| {
                error!(error = %e, "Failed to read uploaded part");
                (StatusCode::BAD_REQUEST, "unreadable upload")
            })?;
            document = Some(text);
            break;
        }
    }

    let Some(document) = document else {
        return Err((StatusCode::BAD_REQUEST, "missing domainlist part"));
    };

    let names = match parse_domain_list(&document, state.config.upload.max_domains) {
        Ok(names) => names,
        // Over-limit uploads answer with the limit message and never reach
        // the resolver.
        Err(e @ IngestError::LimitExceeded { .. }) => {
            info!(max = state.config.upload.max_domains, "Upload over domain limit");
            return Ok(format!("{}\n", e));
        }
    };

    info!(count = names.len(), "Processing uploaded domain list");

    match state.check_batch.execute(names).await {
        Ok(lines) => {
            let mut body = lines.join("\n");
            body.push('\n');
            Ok(body)
        }
        Err(e) => {
            error!(error = %e, "Batch lookup failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, "lookup failed"))
        }
    }
}
