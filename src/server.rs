//! HTTP boundary: JSON in, flat mesh JSON out.

use crate::config::ServerConfig;
use crate::dispatch::{self, GenerateRequest, GeneratedModel};
use crate::errors::GenerationError;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub const GENERATE_ROUTE: &str = "/api/generate-model";

pub fn app(config: ServerConfig) -> Router {
    let allow_cors = config.allow_cors;
    let router = Router::new()
        .route("/health", get(health))
        .route(GENERATE_ROUTE, post(generate_model))
        .with_state(Arc::new(config));

    if allow_cors { router.layer(cors_layer()) } else { router }
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

#[derive(Debug, Serialize, Deserialize)]
struct HealthResponse {
    status: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn payload_too_large(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            message: message.into(),
        }
    }

    fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<GenerationError> for ApiError {
    fn from(err: GenerationError) -> Self {
        if err.is_caller_error() {
            ApiError::bad_request(err.to_string())
        } else {
            ApiError::internal(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

async fn generate_model(
    State(config): State<Arc<ServerConfig>>,
    body: Bytes,
) -> Result<Json<GeneratedModel>, ApiError> {
    let request: GenerateRequest = parse_json(&body)?;
    let job = dispatch::prepare(&request.kind, request.scale(), request.resolution())?;
    enforce_sample_limit(job.sample_count(), config.max_samples)?;

    let model = tokio::task::spawn_blocking(move || job.run())
        .await
        .map_err(|err| {
            log::error!("generation task failed: {err}");
            ApiError::internal("mesh generation failed")
        })??;

    log::info!(
        "{}: {} vertices, {} faces",
        job.kind,
        model.vertices.len() / 3,
        model.faces.len() / 3
    );
    Ok(Json(model))
}

fn parse_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    if body.is_empty() {
        return Err(ApiError::bad_request("request body is required"));
    }
    serde_json::from_slice(body)
        .map_err(|err| ApiError::bad_request(format!("invalid JSON body: {err}")))
}

fn enforce_sample_limit(samples: Option<usize>, max_samples: usize) -> Result<(), ApiError> {
    match samples {
        Some(samples) if samples <= max_samples => Ok(()),
        _ => Err(ApiError::payload_too_large(format!(
            "requested segments exceed the {max_samples} sample limit"
        ))),
    }
}
