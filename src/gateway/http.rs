// HTTP handlers and route table

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use tracing::debug;

use super::dispatch::Gateway;
use super::error::GatewayError;
use super::types::{ActionRequest, ErrorBody};
use crate::runner::RunRequest;
use crate::search::SearchRequest;
use crate::storage::WriteRequest;

/// Register the HTTP surface; shared between main and tests
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/run", web::post().to(run_snippet))
        .route("/write", web::post().to(write_file))
        .route("/search", web::post().to(search_docs))
        .route("/action", web::post().to(dispatch_action));
}

/// Health check endpoint
async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "toolgate",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn run_snippet(state: web::Data<Gateway>, req: web::Json<RunRequest>) -> HttpResponse {
    respond(state.run(req.into_inner()).await)
}

async fn write_file(state: web::Data<Gateway>, req: web::Json<WriteRequest>) -> HttpResponse {
    respond(state.write(req.into_inner()).await)
}

async fn search_docs(state: web::Data<Gateway>, req: web::Json<SearchRequest>) -> HttpResponse {
    respond(state.search(req.into_inner()).await)
}

/// The single tagged-union endpoint; everything the direct endpoints
/// accept is reachable through here via `mode`.
async fn dispatch_action(
    state: web::Data<Gateway>,
    body: web::Json<serde_json::Value>,
) -> HttpResponse {
    match ActionRequest::from_value(body.into_inner()) {
        Ok(action) => respond(state.dispatch(action).await),
        Err(e) => error_response(&e),
    }
}

fn respond<T: Serialize>(result: Result<T, GatewayError>) -> HttpResponse {
    match result {
        Ok(value) => HttpResponse::Ok().json(value),
        Err(e) => error_response(&e),
    }
}

fn status_for(err: &GatewayError) -> StatusCode {
    match err.kind() {
        "timeout" => StatusCode::REQUEST_TIMEOUT,
        "already_exists" => StatusCode::CONFLICT,
        "invalid_mode" | "malformed_request" | "unsupported_language" | "invalid_scope"
        | "invalid_path" => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(err: &GatewayError) -> HttpResponse {
    let status = status_for(err);
    debug!(kind = err.kind(), status = %status, "request failed");
    HttpResponse::build(status).json(ErrorBody::from_error(err))
}
