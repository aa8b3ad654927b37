//! Shared domain types for Fitplan.
//!
//! This crate contains the data shapes passed between the prompt builder,
//! the generation collaborator, the output repair heuristic and the HTTP
//! layer: user attributes, plan results, sampling parameters, configuration
//! and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod config;
pub mod error;
pub mod generation;
pub mod plan;
pub mod user;
