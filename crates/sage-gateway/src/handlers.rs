// SPDX-FileCopyrightText: 2026 Sage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::server::GatewayState;

/// Request body for POST /ai.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub text: String,
}

/// Response body for POST /ai.
#[derive(Debug, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Request body for POST /learn.
#[derive(Debug, Deserialize)]
pub struct LearnRequest {
    pub question: String,
    pub answer: String,
}

/// Response body for GET /health.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    /// Curated knowledge entries.
    pub entries: usize,
    /// Learned question/answer pairs.
    pub learned: usize,
    /// Interactions currently held in context memory.
    pub interactions: usize,
}

/// POST /ai
///
/// Always answers 200: resolution never fails, it degrades to a fallback.
pub async fn post_ai(
    State(state): State<GatewayState>,
    Json(body): Json<AskRequest>,
) -> Json<AskResponse> {
    let resolution = state.engine.resolve_detailed(&body.text).await;
    tracing::debug!(tier = %resolution.tier, "answered /ai request");
    Json(AskResponse {
        answer: resolution.answer,
    })
}

/// POST /learn
pub async fn post_learn(
    State(state): State<GatewayState>,
    Json(body): Json<LearnRequest>,
) -> StatusCode {
    state.engine.learn(&body.question, &body.answer).await;
    StatusCode::OK
}

/// GET /health
pub async fn get_health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    let stats = state.engine.stats().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        entries: stats.entries,
        learned: stats.learned,
        interactions: stats.interactions,
    })
}
