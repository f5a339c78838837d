pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::feedback::handlers as feedback;
use crate::jobs::handlers as jobs;
use crate::shortlist::handlers as shortlist;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Shortlist API
        .route("/api/v1/shortlist", post(shortlist::handle_shortlist))
        .route("/api/v1/jobs/:id/scores", get(shortlist::handle_job_scores))
        // Jobs API
        .route(
            "/api/v1/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_create_job),
        )
        .route("/api/v1/jobs/:id", get(jobs::handle_get_job))
        // Feedback API
        .route("/api/v1/feedback", post(feedback::handle_submit_feedback))
        .with_state(state)
}
