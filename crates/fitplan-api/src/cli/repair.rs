//! `fitplan repair` -- run the output repair heuristic on saved model output.

use anyhow::Result;

use fitplan_core::repair;

/// Repair `raw` and render the result for printing.
///
/// With `text_only`, returns the patched text as-is. Otherwise returns the
/// pretty-printed JSON the API would put under `plan`.
pub fn render(raw: &str, text_only: bool) -> Result<String> {
    if text_only {
        return Ok(repair::repair_text(raw));
    }

    let plan = repair::repair(raw);
    if !plan.is_parsed() {
        tracing::warn!("Output could not be parsed, printing raw_output fallback");
    }
    Ok(serde_json::to_string_pretty(&plan)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_render_parsed() {
        let out = render(r#""day1": "run": "5k"}}"#, false).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value, json!({"day1": {"run": "5k"}}));
    }

    #[test]
    fn test_render_fallback() {
        let out = render("not json", false).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value, json!({"raw_output": "{not json}"}));
    }

    #[test]
    fn test_render_text_only() {
        let out = render("[\"day1\": 1]", true).unwrap();
        assert_eq!(out, "{\"day1\": { 1}");
    }
}
