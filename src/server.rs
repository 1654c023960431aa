use std::sync::Arc;
use axum::{routing::post, Router, Json};
use tower_http::cors::{CorsLayer, Any};
use serde::Serialize;
use axum::http::StatusCode;
use tracing::{info, warn};
use crate::batch::{generate, Options};
use crate::error::{KinsfolkError, Result};
use crate::input::Form;

#[derive(Serialize, Debug)]
pub struct StatementsResponse {
    pub status: String,
    pub elapsed_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Generates the batch for one submitted form and shapes the reply.
/// Validation failures are the submitter's fault and answer 400.
pub fn respond(form: &Form, options: &Options) -> (StatusCode, StatementsResponse) {
    let started = std::time::Instant::now();
    let outcome = generate(form, options);
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    match outcome {
        Ok(batch) => {
            let body = StatementsResponse { status: "ok".into(), elapsed_ms, line_count: Some(batch.len()), statements: Some(batch.to_string()), error: None };
            (StatusCode::OK, body)
        }
        Err(e) => {
            let status = if e.is_validation() { StatusCode::BAD_REQUEST } else { StatusCode::INTERNAL_SERVER_ERROR };
            let body = StatementsResponse { status: "error".into(), elapsed_ms, line_count: None, statements: None, error: Some(e.to_string()) };
            (status, body)
        }
    }
}

pub fn router(options: Arc<Options>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::POST])
        .allow_headers(Any);
    Router::new()
        .route("/v1/statements", post(move |Json(form): Json<Form>| {
        let options = Arc::clone(&options);
        async move {
            // generation is synchronous, keep it off the reactor
            let (status, body) = tokio::task::spawn_blocking(move || respond(&form, &options))
                .await
                .map_err(|e| {
                    warn!(error=%e, "Join error");
                    (StatusCode::INTERNAL_SERVER_ERROR, "Join error")
                })?;
            match &body.error {
                None => info!(ms=body.elapsed_ms, rows=body.line_count, "statements generated"),
                Some(msg) => warn!(%msg, code=%status.as_u16(), "form rejected"),
            }
            Ok::<_, (StatusCode, &'static str)>((status, Json(body)))
        }
    }))
    .layer(cors)
}

pub async fn serve(bind: &str, options: Options) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!(%bind, "listening");
    axum::serve(listener, router(Arc::new(options)))
        .await
        .map_err(KinsfolkError::from)
}
