use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::config::MatchingSettings;
use crate::core::{CompatibilityEngine, CompatibilityError, ExplainabilityEngine};
use crate::models::{
    CompatibilityScore, ErrorResponse, HealthResponse, ScoreRequest, SummaryRequest,
    TopMatchesRequest, TopMatchesResponse,
};
use crate::services::ScoreCache;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: CompatibilityEngine,
    pub explainer: ExplainabilityEngine,
    pub cache: ScoreCache,
    pub matching: MatchingSettings,
}

/// Configure all compatibility routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/compatibility/score", web::post().to(score_pair))
        .route("/matches/top", web::post().to(top_matches))
        .route("/matches/explain", web::post().to(explain_match))
        .route("/matches/summary", web::post().to(summarize_matches));
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    tracing::info!("Validation failed: field_errors={:?}", errors);
    HttpResponse::BadRequest().json(ErrorResponse::bad_request(
        "Validation failed",
        errors.to_string(),
    ))
}

fn rejected(err: CompatibilityError) -> HttpResponse {
    tracing::info!("Rejected request: {}", err);
    HttpResponse::BadRequest().json(ErrorResponse::bad_request("Invalid input", err.to_string()))
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let stats = state.cache.stats().await;

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        cached_scores: stats.entries,
    })
}

/// Score a single pair
///
/// POST /api/v1/compatibility/score
///
/// Request body:
/// ```json
/// {
///   "subject": { "id": "string", "age": 30, ... },
///   "candidate": { "id": "string", "age": 32, ... }
/// }
/// ```
async fn score_pair(state: web::Data<AppState>, req: web::Json<ScoreRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let ScoreRequest { subject, candidate } = req.into_inner();

    let score = state
        .cache
        .get_or_score(&subject, &candidate, || state.engine.score(&subject, &candidate))
        .await;

    tracing::info!(
        "Scored {} -> {}: {}",
        score.subject_id,
        score.candidate_id,
        score.overall_score
    );

    HttpResponse::Ok().json(score)
}

/// Rank candidates for a subject
///
/// POST /api/v1/matches/top
///
/// Request body:
/// ```json
/// {
///   "subject": { ... },
///   "candidates": [{ ... }],
///   "limit": 3
/// }
/// ```
async fn top_matches(
    state: web::Data<AppState>,
    req: web::Json<TopMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let limit = state.matching.resolve_limit(req.limit);

    tracing::info!(
        "Finding top {} matches for {} among {} candidates",
        limit,
        req.subject.id,
        req.candidates.len()
    );

    match state.engine.top_matches(&req.subject, &req.candidates, limit) {
        Ok(matches) => HttpResponse::Ok().json(TopMatchesResponse {
            matches,
            total_candidates: req.candidates.len(),
        }),
        Err(err) => rejected(err),
    }
}

/// Explain a previously computed score
///
/// POST /api/v1/matches/explain
///
/// Request body: a compatibility score as returned by the score endpoints.
async fn explain_match(
    state: web::Data<AppState>,
    req: web::Json<CompatibilityScore>,
) -> impl Responder {
    match state.explainer.explain(&req) {
        Ok(explanation) => {
            tracing::debug!(
                "Explained {} -> {} as {:?}",
                req.subject_id,
                req.candidate_id,
                explanation.overall_assessment.tier
            );
            HttpResponse::Ok().json(explanation)
        }
        Err(err) => rejected(err),
    }
}

/// Summarize a batch of scores
///
/// POST /api/v1/matches/summary
///
/// Request body:
/// ```json
/// { "scores": [{ ... }] }
/// ```
async fn summarize_matches(
    state: web::Data<AppState>,
    req: web::Json<SummaryRequest>,
) -> impl Responder {
    match state.explainer.summarize(&req.scores) {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(err) => rejected(err),
    }
}
