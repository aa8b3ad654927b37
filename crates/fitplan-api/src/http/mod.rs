//! HTTP layer for Fitplan.
//!
//! Axum-based API with two routes: the authenticated `POST /get-plan` and
//! the open `GET /ping` liveness check.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
