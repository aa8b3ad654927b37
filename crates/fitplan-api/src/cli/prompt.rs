//! `fitplan prompt` -- show the prompt the model would receive.

use anyhow::{Context, Result};

use fitplan_core::prompt::PromptBuilder;
use fitplan_types::user::UserRequest;

/// Parse a user request JSON and render its prompt.
pub fn render(input: &str) -> Result<String> {
    let user: UserRequest =
        serde_json::from_str(input).context("input is not a valid user request")?;
    Ok(PromptBuilder::build(&user))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prompt() {
        let input = r#"{"age": 40, "height": 165, "weight": 60.5, "bmi": 22.2,
            "activity_level": "sedentary", "fitness_goal": "fat loss"}"#;
        let prompt = render(input).unwrap();
        assert!(prompt.contains("    age: 40\n"));
        assert!(prompt.contains("    height: 165.0\n"));
        assert!(prompt.contains("    fitness_level: sedentary\n"));
    }

    #[test]
    fn test_render_rejects_bad_input() {
        let err = render(r#"{"age": 40}"#).unwrap_err();
        assert!(err.to_string().contains("not a valid user request"));
    }
}
