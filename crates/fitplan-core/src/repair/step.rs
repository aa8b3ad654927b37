//! Individual text patches applied to raw model output.
//!
//! Every step targets one malformation observed in the fine-tuned model's
//! output. Steps never inspect whether their defect is actually present
//! beyond the literal pattern they match.

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Matches a day key followed by its colon, e.g. `"day12":`.
static DAY_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""day(\d+)":"#).expect("day key pattern is valid"));

/// Separator artifact between one day's closing brace and the next day key.
const SPACED_DAY_SEPARATOR: &str = "},  \"day";
const DAY_SEPARATOR: &str = "},\"day";

/// One patch in the repair pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairStep {
    Trim,
    StripListWrapper,
    OpenDayObjects,
    CollapseDaySeparator,
    EnsureLeadingBrace,
    EnsureTrailingBrace,
}

impl RepairStep {
    /// The fixed order in which steps run.
    pub const PIPELINE: [RepairStep; 6] = [
        RepairStep::Trim,
        RepairStep::StripListWrapper,
        RepairStep::OpenDayObjects,
        RepairStep::CollapseDaySeparator,
        RepairStep::EnsureLeadingBrace,
        RepairStep::EnsureTrailingBrace,
    ];

    /// The output defect this step targets.
    pub fn defect(&self) -> &'static str {
        match self {
            RepairStep::Trim => "leading or trailing whitespace around the payload",
            RepairStep::StripListWrapper => "payload wrapped in a JSON list",
            RepairStep::OpenDayObjects => "day key emitted without the opening brace of its object",
            RepairStep::CollapseDaySeparator => "double space between a closing brace and the next day key",
            RepairStep::EnsureLeadingBrace => "missing opening brace of the top-level object",
            RepairStep::EnsureTrailingBrace => "missing closing brace of the top-level object",
        }
    }

    /// Apply this step to `text`.
    pub fn apply(&self, text: String) -> String {
        match self {
            RepairStep::Trim => {
                let trimmed = text.trim();
                if trimmed.len() == text.len() {
                    text
                } else {
                    trimmed.to_string()
                }
            }
            RepairStep::StripListWrapper => {
                // Each side is stripped independently, balanced or not.
                let mut slice = text.as_str();
                if let Some(rest) = slice.strip_prefix('[') {
                    slice = rest;
                }
                if let Some(rest) = slice.strip_suffix(']') {
                    slice = rest;
                }
                if slice.len() == text.len() {
                    text
                } else {
                    slice.to_string()
                }
            }
            RepairStep::OpenDayObjects => match DAY_KEY.replace_all(&text, r#""day${1}": {"#) {
                Cow::Borrowed(_) => text,
                Cow::Owned(patched) => patched,
            },
            RepairStep::CollapseDaySeparator => {
                if text.contains(SPACED_DAY_SEPARATOR) {
                    text.replace(SPACED_DAY_SEPARATOR, DAY_SEPARATOR)
                } else {
                    text
                }
            }
            RepairStep::EnsureLeadingBrace => {
                if text.starts_with('{') {
                    text
                } else {
                    format!("{{{text}")
                }
            }
            RepairStep::EnsureTrailingBrace => {
                if text.ends_with('}') {
                    text
                } else {
                    let mut text = text;
                    text.push('}');
                    text
                }
            }
        }
    }
}

impl fmt::Display for RepairStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepairStep::Trim => write!(f, "trim"),
            RepairStep::StripListWrapper => write!(f, "strip_list_wrapper"),
            RepairStep::OpenDayObjects => write!(f, "open_day_objects"),
            RepairStep::CollapseDaySeparator => write!(f, "collapse_day_separator"),
            RepairStep::EnsureLeadingBrace => write!(f, "ensure_leading_brace"),
            RepairStep::EnsureTrailingBrace => write!(f, "ensure_trailing_brace"),
        }
    }
}
