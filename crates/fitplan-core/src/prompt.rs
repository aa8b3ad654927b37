//! Prompt builder for the fitness-plan model.
//!
//! The adapter was fine-tuned on prompts of exactly this shape, so the
//! layout (leading newline, four-space indent, label order) is fixed:
//!
//! ```text
//!
//!     age: 30
//!     weight: 82.5
//!     height: 180.0
//!     bmi: 25.5
//!     fitness_level: moderate
//!     fitness_goal: muscle gain
//!
//! ```

use fitplan_types::user::UserRequest;

const INDENT: &str = "    ";

/// Builds the model prompt from user attributes.
pub struct PromptBuilder;

impl PromptBuilder {
    /// Render `user` into the fixed template. Never fails.
    ///
    /// Values are substituted verbatim: no escaping, no validation. The
    /// `fitness_level` label is fed from `activity_level`.
    pub fn build(user: &UserRequest) -> String {
        let lines = [
            ("age", user.age.to_string()),
            ("weight", format_float(user.weight)),
            ("height", format_float(user.height)),
            ("bmi", format_float(user.bmi)),
            ("fitness_level", user.activity_level.clone()),
            ("fitness_goal", user.fitness_goal.clone()),
        ];

        let mut prompt = String::from("\n");
        for (label, value) in lines {
            prompt.push_str(INDENT);
            prompt.push_str(label);
            prompt.push_str(": ");
            prompt.push_str(&value);
            prompt.push('\n');
        }
        prompt.push_str(INDENT);
        prompt
    }
}

/// Render a float the way the training prompts did.
///
/// Uses the shortest round-trip digits. Whole numbers keep a single decimal
/// (`70.0`). Magnitudes below `1e-4` or at least `1e16` switch to exponent
/// notation with a signed, two-digit minimum exponent (`1e-05`, `1.5e+16`).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{value:e}");
    if let Some((mantissa, exponent)) = scientific.split_once('e') {
        if let Ok(exponent) = exponent.parse::<i32>() {
            if value != 0.0 && !(-4..16).contains(&exponent) {
                let sign = if exponent < 0 { '-' } else { '+' };
                return format!("{mantissa}e{sign}{:02}", exponent.abs());
            }
        }
    }

    let plain = format!("{value}");
    if plain.contains('.') {
        plain
    } else {
        format!("{plain}.0")
    }
}
