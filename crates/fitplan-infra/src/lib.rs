//! Infrastructure layer for Fitplan.
//!
//! Contains the implementations behind the ports defined in `fitplan-core`:
//! the HTTP client for the text-generation inference server, the
//! configuration file loader, and shared API key resolution.

pub mod config;
pub mod generation;
pub mod secret;
