//! Generation collaborator abstractions.
//!
//! - `PlanGenerator`: RPITIT trait for concrete model backends
//! - `BoxPlanGenerator`: object-safe wrapper for dynamic dispatch

pub mod box_generator;
pub mod generator;

pub use box_generator::BoxPlanGenerator;
pub use generator::PlanGenerator;
