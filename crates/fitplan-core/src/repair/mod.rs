//! Output repair heuristic.
//!
//! The fine-tuned model is trained to emit JSON but regularly drops the
//! opening brace of each day object, wraps the payload in a list, or leaves
//! stray whitespace between days. [`repair`] runs every [`RepairStep`] in
//! [`RepairStep::PIPELINE`] order and then tries to parse the result.
//!
//! This is a syntactic patch for one narrow failure shape, not a
//! grammar-aware repair. Output that is malformed in any other way (truncated
//! text, badly unbalanced braces) ends up as [`PlanResult::RawFallback`].

pub mod step;

pub use step::RepairStep;

use fitplan_types::plan::PlanResult;

/// Apply every patch in order and return the patched text without parsing.
pub fn repair_text(raw: &str) -> String {
    RepairStep::PIPELINE
        .iter()
        .fold(raw.to_string(), |text, step| {
            let patched = step.apply(text);
            tracing::trace!(step = %step, len = patched.len(), "applied repair step");
            patched
        })
}

/// Patch raw model output and parse it.
///
/// Never fails: text that still does not parse is returned as
/// [`PlanResult::RawFallback`] carrying the patched text.
pub fn repair(raw: &str) -> PlanResult {
    let text = repair_text(raw);
    match serde_json::from_str(&text) {
        Ok(value) => PlanResult::Parsed(value),
        Err(err) => {
            tracing::debug!(
                error = %err,
                line = err.line(),
                column = err.column(),
                "repaired model output still not valid JSON, returning raw text"
            );
            PlanResult::raw_fallback(text)
        }
    }
}
