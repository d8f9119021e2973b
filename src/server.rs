use std::sync::Arc;
use axum::{routing::post, Router, Json};
use tower_http::cors::{CorsLayer, Any};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use axum::http::StatusCode;
use tracing::{info, warn};
use crate::bindings;
use crate::config::Config;
use crate::error::PositionHistoryError;
use crate::report::Report;

#[derive(Deserialize)]
pub struct ReportRequest {
    pub position: String,
    /// Raw SPARQL JSON results of the position metadata query.
    pub metadata: Value,
    pub mandates: Value,
    #[serde(default)]
    pub biodata: Option<Value>,
}

#[derive(Serialize)]
pub struct ReportResponse {
    pub status: String,
    pub elapsed_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<Report>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn run(req: ReportRequest, config: &Config) -> Result<Report, PositionHistoryError> {
    let metadata = bindings::from_value(req.metadata)?;
    let mandates = bindings::from_value(req.mandates)?;
    let biodata = match req.biodata {
        Some(json) => bindings::from_value(json)?,
        None => Vec::new(),
    };
    Report::from_bindings(&req.position, &metadata, &mandates, &biodata, config)
}

pub fn router(config: Arc<Config>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::POST])
        .allow_headers(Any);
    Router::new()
        .route("/v1/report", post(move |Json(req): Json<ReportRequest>| {
        let config = Arc::clone(&config);
        async move {
            // The engine is synchronous, so it runs on a blocking thread.
            let started = std::time::Instant::now();
            let position = req.position.clone();
            let for_template = Arc::clone(&config);
            let report_result = tokio::task::spawn_blocking(move || run(req, &config))
                .await
                .map_err(|e| {
                    warn!(error=%e, "Join error");
                    (StatusCode::INTERNAL_SERVER_ERROR, "Join error")
                })?;
            let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
            match report_result {
                Ok(report) => {
                    let warnings = report.warning_count();
                    info!(%position, ms=elapsed_ms, outcome=report.outcome(), warnings, "report complete");
                    let body = ReportResponse {
                        status: "ok".into(),
                        elapsed_ms,
                        warnings: Some(warnings),
                        template: report.error_template(&for_template),
                        report: Some(report),
                        error: None,
                    };
                    Ok::<_, (StatusCode, &'static str)>((StatusCode::OK, Json(body)))
                }
                Err(e) => {
                    // Anything that fails here came from the request itself.
                    let msg = format!("{e}");
                    warn!(%position, %msg, "report error");
                    let body = ReportResponse { status: "error".into(), elapsed_ms, warnings: None, template: None, report: None, error: Some(msg) };
                    Ok::<_, (StatusCode, &'static str)>((StatusCode::BAD_REQUEST, Json(body)))
                }
            }
        }
    }))
    .layer(cors)
}
