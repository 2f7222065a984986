use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::core::{estimate_draft, submit_shared, scoring, SharedSession, ThinkingDelay};
use crate::error::{EstimateError, SessionError};
use crate::models::{
    ErrorResponse, FeatureWeights, HealthResponse, ModelInfoResponse, PredictRequest, PredictionResponse, SessionResponse,
    UpdateProfileRequest,
};
use crate::services::SessionStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub delay: ThinkingDelay,
}

/// Configure all prediction routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/model", web::get().to(model_info))
        .route("/predict", web::post().to(predict))
        .route("/sessions", web::post().to(create_session))
        .route("/sessions/{id}", web::get().to(get_session))
        .route("/sessions/{id}/profile", web::put().to(update_profile))
        .route("/sessions/{id}/submit", web::post().to(submit))
        .route("/sessions/{id}/reset", web::post().to(reset));
}

fn error_response(err: &SessionError) -> HttpResponse {
    let (status, error) = match err {
        SessionError::Estimate(EstimateError::MissingField { .. }) => (StatusCode::BAD_REQUEST, "missing_fields"),
        SessionError::Estimate(EstimateError::InvalidValue { .. }) => (StatusCode::BAD_REQUEST, "invalid_value"),
        SessionError::InFlight => (StatusCode::CONFLICT, "prediction_in_flight"),
        SessionError::Discarded => (StatusCode::CONFLICT, "prediction_discarded"),
    };

    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message: err.to_string(),
        status_code: status.as_u16(),
    })
}

fn session_not_found(id: &Uuid) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "session_not_found".to_string(),
        message: format!("No prediction session with id {}", id),
        status_code: 404,
    })
}

async fn snapshot(id: Uuid, session: &SharedSession) -> SessionResponse {
    let session = session.lock().await;
    SessionResponse {
        session_id: id.to_string(),
        profile: session.draft().clone(),
        result: session.result().copied().map(PredictionResponse::from),
        pending: session.is_pending(),
    }
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    tracing::trace!("Health check with {} live sessions", state.sessions.len());

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Static algorithm details
///
/// GET /api/v1/model
async fn model_info() -> impl Responder {
    let weight = scoring::as_weight;

    HttpResponse::Ok().json(ModelInfoResponse {
        name: "purchase-likelihood".to_string(),
        kind: "fixed-weight linear scoring".to_string(),
        threshold: weight(scoring::PURCHASE_THRESHOLD),
        features: vec![
            FeatureWeights {
                feature: "age".to_string(),
                buckets: vec![
                    (format!("> {}", scoring::AGE_PIVOT), weight(scoring::AGE_HIGH)),
                    (format!("<= {}", scoring::AGE_PIVOT), weight(scoring::AGE_LOW)),
                ],
            },
            FeatureWeights {
                feature: "gender".to_string(),
                buckets: vec![
                    ("Female".to_string(), weight(scoring::GENDER_FEMALE)),
                    ("Male".to_string(), weight(scoring::GENDER_MALE)),
                ],
            },
            FeatureWeights {
                feature: "education".to_string(),
                buckets: vec![
                    ("Graduate".to_string(), weight(scoring::EDUCATION_GRADUATE)),
                    ("Bachelor".to_string(), weight(scoring::EDUCATION_BACHELOR)),
                    ("High School".to_string(), weight(scoring::EDUCATION_HIGH_SCHOOL)),
                ],
            },
            FeatureWeights {
                feature: "reviewScore".to_string(),
                buckets: vec![
                    (">= 4".to_string(), weight(scoring::REVIEW_HIGH)),
                    (">= 3".to_string(), weight(scoring::REVIEW_MID)),
                    ("< 3".to_string(), weight(scoring::REVIEW_LOW)),
                ],
            },
        ],
    })
}

/// Stateless prediction endpoint
///
/// POST /api/v1/predict
///
/// Request body:
/// ```json
/// {
///   "age": 35,
///   "gender": "Female",
///   "education": "Graduate",
///   "reviewScore": 5
/// }
/// ```
async fn predict(req: web::Json<PredictRequest>) -> impl Responder {
    match estimate_draft(&req) {
        Ok(result) => {
            tracing::info!(
                "Prediction: willPurchase={}, total={:.2}",
                result.will_purchase,
                result.total_score()
            );
            HttpResponse::Ok().json(PredictionResponse::from(result))
        }
        Err(e) => {
            tracing::info!("Prediction rejected: {}", e);
            error_response(&SessionError::from(e))
        }
    }
}

/// Create an interactive session
///
/// POST /api/v1/sessions
async fn create_session(state: web::Data<AppState>) -> impl Responder {
    let (id, session) = state.sessions.create().await;
    HttpResponse::Created().json(snapshot(id, &session).await)
}

/// GET /api/v1/sessions/{id}
async fn get_session(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    let id = path.into_inner();
    match state.sessions.get(&id).await {
        Some(session) => HttpResponse::Ok().json(snapshot(id, &session).await),
        None => session_not_found(&id),
    }
}

/// Merge profile fields into a session
///
/// PUT /api/v1/sessions/{id}/profile
async fn update_profile(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<UpdateProfileRequest>,
) -> impl Responder {
    let id = path.into_inner();
    let Some(session) = state.sessions.get(&id).await else {
        return session_not_found(&id);
    };

    session.lock().await.update(req.into_inner());
    HttpResponse::Ok().json(snapshot(id, &session).await)
}

/// Submit a session's profile; responds once the thinking delay has elapsed
///
/// POST /api/v1/sessions/{id}/submit
async fn submit(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    let id = path.into_inner();
    let Some(session) = state.sessions.get(&id).await else {
        return session_not_found(&id);
    };

    match submit_shared(session, state.delay).await {
        Ok(result) => {
            tracing::info!(
                "Session {} prediction: willPurchase={}, total={:.2}",
                id,
                result.will_purchase,
                result.total_score()
            );
            HttpResponse::Ok().json(PredictionResponse::from(result))
        }
        Err(e) => {
            tracing::info!("Session {} submission rejected: {}", id, e);
            error_response(&e)
        }
    }
}

/// POST /api/v1/sessions/{id}/reset
async fn reset(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    let id = path.into_inner();
    let Some(session) = state.sessions.get(&id).await else {
        return session_not_found(&id);
    };

    session.lock().await.reset();
    tracing::debug!("Session {} reset", id);
    HttpResponse::Ok().json(snapshot(id, &session).await)
}
