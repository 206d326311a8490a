//! R2O Lattice HTTP Server

use axum::{
    extract::Json,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

use r2o_lattice::prelude::*;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[derive(Debug, Deserialize)]
struct ResolveRequest {
    #[serde(default)]
    grids: Vec<GridRecord>,
    #[serde(default)]
    levels: Vec<LevelRecord>,
    #[serde(default)]
    members: Vec<MemberRecord>,
    options: Option<BuildOptions>,
}

#[derive(Debug, Serialize)]
struct ResolveResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    results: Option<LatticeOutput>,
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn resolve(Json(request): Json<ResolveRequest>) -> impl IntoResponse {
    match run_resolve(request) {
        Ok(results) => (
            StatusCode::OK,
            Json(ResolveResponse {
                success: true,
                error: None,
                results: Some(results),
            }),
        ),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(ResolveResponse {
                success: false,
                error: Some(e.to_string()),
                results: None,
            }),
        ),
    }
}

fn run_resolve(request: ResolveRequest) -> LatticeResult<LatticeOutput> {
    let model = LatticeModel::from_records(request.grids, request.levels, request.members)?;
    let options = request.options.unwrap_or_default();
    let output = model.build(&options)?;
    log::info!(
        "resolved {} members ({} failed), {} nodes",
        output.report.resolved_members,
        output.report.failed_members,
        output.report.used_points
    );
    Ok(output)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/api/v1/resolve", post(resolve))
        .layer(cors);

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8087".to_string());
    let addr = format!("{}:{}", host, port);

    log::info!("R2O Lattice Server listening on http://{}", addr);
    log::info!("  Health check: GET  /health");
    log::info!("  Resolve:      POST /api/v1/resolve");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
