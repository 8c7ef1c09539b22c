// src/server.rs

use serde::Serialize;
use std::{convert::Infallible, sync::Arc, time::Instant};
use tracing::{error, info};
use warp::{
    http::StatusCode,
    reject::{MethodNotAllowed, Rejection},
    reply::{self, Reply},
    Filter,
};

use crate::sweep::Sweeper;

pub const SERVICE_NAME: &str = "vitiscraper";

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn error_reply(status: StatusCode, message: impl Into<String>) -> reply::WithStatus<reply::Json> {
    reply::with_status(
        reply::json(&ErrorResponse {
            error: message.into(),
        }),
        status,
    )
}

async fn health_check() -> Result<impl Reply, Rejection> {
    Ok(reply::json(&serde_json::json!({
        "status": "healthy",
        "service": SERVICE_NAME
    })))
}

/// Full sweep. Request-level failures become a 500 carrying the message.
async fn serve_dados(sweeper: Arc<Sweeper>) -> Result<impl Reply, Rejection> {
    let start = Instant::now();
    match sweeper.sweep().await {
        Ok(records) => {
            info!(
                records = records.len(),
                elapsed = ?start.elapsed(),
                "served /dados"
            );
            Ok(reply::with_status(reply::json(&records), StatusCode::OK))
        }
        Err(e) => {
            error!(elapsed = ?start.elapsed(), error = %e, "sweep failed");
            Ok(error_reply(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    if err.is_not_found() {
        Ok(error_reply(StatusCode::NOT_FOUND, "not found"))
    } else if err.find::<MethodNotAllowed>().is_some() {
        Ok(error_reply(
            StatusCode::METHOD_NOT_ALLOWED,
            "method not allowed",
        ))
    } else {
        error!(rejection = ?err, "unhandled rejection");
        Ok(error_reply(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("{:?}", err),
        ))
    }
}

fn with_sweeper(
    sweeper: Arc<Sweeper>,
) -> impl Filter<Extract = (Arc<Sweeper>,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&sweeper))
}

/// `GET /dados` and `GET /health`, with every rejection rendered as JSON.
pub fn routes(
    sweeper: Arc<Sweeper>,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(health_check);

    let dados = warp::path("dados")
        .and(warp::path::end())
        .and(warp::get())
        .and(with_sweeper(sweeper))
        .and_then(serve_dados);

    health.or(dados).recover(handle_rejection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn test_routes() -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
        let sweeper = Sweeper::new(&Config::default()).unwrap();
        routes(Arc::new(sweeper))
    }

    #[tokio::test]
    async fn test_health_check() {
        let resp = warp::test::request()
            .method("GET")
            .path("/health")
            .reply(&test_routes())
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], SERVICE_NAME);
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let resp = warp::test::request()
            .method("GET")
            .path("/nope")
            .reply(&test_routes())
            .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(body["error"], "not found");
    }

    #[tokio::test]
    async fn test_post_dados_is_rejected() {
        let resp = warp::test::request()
            .method("POST")
            .path("/dados")
            .reply(&test_routes())
            .await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
