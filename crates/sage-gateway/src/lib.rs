// SPDX-FileCopyrightText: 2026 Sage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Sage answer engine.
//!
//! Routes:
//! - `POST /ai` resolve a question
//! - `POST /learn` teach an exact question/answer pair
//! - `GET /health` liveness plus engine counters

pub mod handlers;
pub mod server;

pub use server::{router, start_server, GatewayState};
