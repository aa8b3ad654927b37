//! Plan generation endpoint.
//!
//! POST /get-plan - Render the prompt, run the model, repair its output.

use std::time::Instant;

use axum::Json;
use axum::extract::State;
use tracing::Instrument;

use fitplan_types::plan::PlanResponse;
use fitplan_types::user::UserRequest;

use crate::http::error::AppError;
use crate::http::extractors::auth::Authenticated;
use crate::state::AppState;

/// POST /get-plan - Generate a fitness plan for the given attributes.
///
/// The API key is checked before the body is read. Unparseable model output
/// still yields 200 with `{"plan": {"raw_output": ...}}`; only a failed
/// generation call produces an error status.
pub async fn get_plan(
    State(state): State<AppState>,
    _auth: Authenticated,
    Json(user): Json<UserRequest>,
) -> Result<Json<PlanResponse>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();
    let span = tracing::info_span!("get_plan", request_id = %request_id);

    let plan = state
        .plan_service
        .generate_plan(&user)
        .instrument(span.clone())
        .await?;

    span.in_scope(|| {
        tracing::info!(
            parsed = plan.is_parsed(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Plan request completed"
        );
    });

    Ok(Json(PlanResponse { plan }))
}
