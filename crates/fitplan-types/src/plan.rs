//! Plan result types returned to API callers.
//!
//! The model is asked for JSON but does not reliably produce it, so a plan is
//! either the parsed value or the patched text that still failed to parse.

use serde::Serialize;
use serde_json::Value;

/// Outcome of repairing one model output.
///
/// Serialized untagged: a parsed plan is emitted as the JSON value itself,
/// a fallback as `{"raw_output": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PlanResult {
    /// The patched text parsed as JSON. The shape is whatever the model chose.
    Parsed(Value),
    /// The patched text did not parse; carries the text after all patches.
    RawFallback { raw_output: String },
}

impl PlanResult {
    /// Build a fallback result from patched text.
    pub fn raw_fallback(text: impl Into<String>) -> Self {
        PlanResult::RawFallback {
            raw_output: text.into(),
        }
    }

    /// Whether the model output was turned into structured data.
    pub fn is_parsed(&self) -> bool {
        matches!(self, PlanResult::Parsed(_))
    }

    /// The unparsed text, if this is a fallback.
    pub fn raw_output(&self) -> Option<&str> {
        match self {
            PlanResult::Parsed(_) => None,
            PlanResult::RawFallback { raw_output } => Some(raw_output),
        }
    }
}

/// Response body of `POST /get-plan`.
#[derive(Debug, Clone, Serialize)]
pub struct PlanResponse {
    pub plan: PlanResult,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parsed_serializes_as_value() {
        let result = PlanResult::Parsed(json!({"day1": {"workout": "run"}}));
        let out = serde_json::to_value(&result).unwrap();
        assert_eq!(out, json!({"day1": {"workout": "run"}}));
    }

    #[test]
    fn test_fallback_serializes_as_raw_output() {
        let result = PlanResult::raw_fallback("{not json");
        let out = serde_json::to_value(&result).unwrap();
        assert_eq!(out, json!({"raw_output": "{not json"}));
    }

    #[test]
    fn test_accessors() {
        let parsed = PlanResult::Parsed(json!([1, 2]));
        assert!(parsed.is_parsed());
        assert!(parsed.raw_output().is_none());

        let raw = PlanResult::raw_fallback("x");
        assert!(!raw.is_parsed());
        assert_eq!(raw.raw_output(), Some("x"));
    }

    #[test]
    fn test_plan_response_wraps_plan() {
        let resp = PlanResponse {
            plan: PlanResult::raw_fallback("{oops}"),
        };
        let out = serde_json::to_value(&resp).unwrap();
        assert_eq!(out, json!({"plan": {"raw_output": "{oops}"}}));
    }
}
