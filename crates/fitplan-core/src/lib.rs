//! Business logic and port trait definitions for Fitplan.
//!
//! This crate holds the prompt builder, the output repair heuristic and the
//! `PlanGenerator` port that the infrastructure layer implements. It depends
//! only on `fitplan-types` -- never on `fitplan-infra` or any network crate.

pub mod generation;
pub mod prompt;
pub mod repair;
pub mod service;
