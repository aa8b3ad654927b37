//! Secret resolution.
//!
//! - `env`: shared API key from the environment, with a built-in fallback

pub mod env;
