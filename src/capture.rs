// src/capture.rs

//! Local capture endpoint.
//!
//! A development stand-in for the remote server that receives form
//! submissions. It records every url-encoded POST in memory and answers
//! with a small JSON receipt, so the client's happy path can be exercised
//! without touching the real destination. The forced-status query lets
//! the non-2xx path be exercised against a real listener too.

use crate::submission_id::SubmissionId;

use axum::{
    body::Body,
    extract::{Query, State},
    http::{HeaderMap, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::Span;
use url::form_urlencoded;

/* ---------------- state ---------------- */

/// Shared in-memory store of received submissions.
///
/// Cloning the state clones the handle, not the store; the router and any
/// test holding a copy observe the same submissions.
#[derive(Debug, Clone, Default)]
pub struct CaptureState {
    submissions: Arc<Mutex<Vec<CapturedSubmission>>>,
}

impl CaptureState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything received so far, in arrival order.
    pub fn submissions(&self) -> Vec<CapturedSubmission> {
        self.submissions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn record(&self, submission: CapturedSubmission) {
        self.submissions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(submission);
    }
}

/// One received form submission.
#[derive(Debug, Clone, Serialize)]
pub struct CapturedSubmission {
    pub id: SubmissionId,
    pub received_at: DateTime<Utc>,

    /// Content-Type header as sent by the client, if any.
    pub content_type: Option<String>,

    /// Raw request body, exactly as it arrived on the wire.
    pub body: String,

    /// Body decoded as form-urlencoded pairs, in wire order.
    pub fields: Vec<(String, String)>,
}

/* ---------------- server ---------------- */

pub fn router(state: CaptureState) -> Router {
    Router::new()
        .route("/", post(receive))
        .route("/submissions", get(list_submissions))
        .route("/health", get(health))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request<Body>| {
                    tracing::info_span!(
                        "http_request",
                        method = %req.method(),
                        path = %req.uri().path(),
                    )
                })
                .on_response(|res: &Response, latency: Duration, _span: &Span| {
                    tracing::info!(
                        status = res.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "request completed"
                    );
                }),
        )
        .with_state(state)
}

pub async fn serve(addr: &str) -> anyhow::Result<()> {
    let socket: SocketAddr = addr.parse()?;
    let listener = TcpListener::bind(socket).await?;

    tracing::info!("formpost capture endpoint listening on http://{}", socket);

    axum::serve(listener, router(CaptureState::new())).await?;
    Ok(())
}

/* ---------------- request models ---------------- */

#[derive(Debug, Deserialize)]
struct ReceiveQuery {
    /// Force the response status, e.g. `POST /?status=500`.
    status: Option<u16>,
}

/* ---------------- endpoints ---------------- */

async fn health() -> &'static str {
    "ok"
}

#[axum::debug_handler(state = CaptureState)]
async fn receive(
    State(state): State<CaptureState>,
    Query(query): Query<ReceiveQuery>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let content_type = headers
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());

    let fields = form_urlencoded::parse(body.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect::<Vec<_>>();

    let submission = CapturedSubmission {
        id: SubmissionId::new(),
        received_at: Utc::now(),
        content_type,
        body,
        fields,
    };
    let id = submission.id.clone();

    tracing::debug!(id = %id.0, fields = submission.fields.len(), "submission captured");
    state.record(submission);

    let status = query
        .status
        .and_then(|s| StatusCode::from_u16(s).ok())
        .unwrap_or(StatusCode::OK);

    // Statuses that forbid a body get none.
    if status == StatusCode::NO_CONTENT || status == StatusCode::NOT_MODIFIED {
        return status.into_response();
    }

    (
        status,
        Json(serde_json::json!({
            "ok": status.is_success(),
            "id": id,
        })),
    )
        .into_response()
}

async fn list_submissions(State(state): State<CaptureState>) -> Json<Vec<CapturedSubmission>> {
    Json(state.submissions())
}
