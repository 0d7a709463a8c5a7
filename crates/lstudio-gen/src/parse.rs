//! Validation of structured explanation replies
//!
//! The reply must look like a JSON object before it is parsed, and then every
//! step is checked field by field. A step with a blank title or blank content
//! rejects the whole reply rather than reaching the viewer half-empty.

use serde_json::{Map, Value};

use lstudio_core::{InteractiveExplanation, InteractiveStep, StepIcon};

use crate::error::GenerationError;

const STEPS_KEY: &str = "interactive_steps";
const CONTENT_KEY: &str = "interactive_content";

/// Parse a reply into an explanation for `strategy`
///
/// The result carries id 0; the caller stamps its own identity on it.
pub fn parse_interactive(
    raw: &str,
    strategy: &str,
) -> Result<InteractiveExplanation, GenerationError> {
    let body = strip_code_fence(raw);
    if !body.starts_with('{') || !body.ends_with('}') {
        return Err(GenerationError::NotAnObject);
    }

    let value: Value =
        serde_json::from_str(body).map_err(|e| GenerationError::MalformedJson(e.to_string()))?;
    let object = value.as_object().ok_or(GenerationError::NotAnObject)?;

    let steps = parse_steps(object)?;
    if !steps.is_empty() {
        return Ok(InteractiveExplanation::steps(0, strategy, steps));
    }

    match optional_string(object, CONTENT_KEY)? {
        Some(content) if !content.is_empty() => {
            Ok(InteractiveExplanation::text(0, strategy, content))
        }
        _ => Err(GenerationError::invalid_shape(format!(
            "reply has neither \"{STEPS_KEY}\" nor \"{CONTENT_KEY}\""
        ))),
    }
}

/// Remove a surrounding Markdown code fence (```` ```json ... ``` ````)
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(inner) = trimmed
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
    else {
        return trimmed;
    };
    // Drop the info string ("json") on the opening line
    match inner.find('\n') {
        Some(newline) => inner[newline + 1..].trim(),
        None => inner.trim(),
    }
}

fn parse_steps(object: &Map<String, Value>) -> Result<Vec<InteractiveStep>, GenerationError> {
    match object.get(STEPS_KEY) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(index, item)| parse_step(index + 1, item))
            .collect(),
        Some(_) => Err(GenerationError::invalid_shape(format!(
            "\"{STEPS_KEY}\" is not an array"
        ))),
    }
}

fn parse_step(number: usize, item: &Value) -> Result<InteractiveStep, GenerationError> {
    let step = item
        .as_object()
        .ok_or_else(|| GenerationError::invalid_shape(format!("step {number} is not an object")))?;

    let title = required_string(step, "title", number)?;
    let content = required_string(step, "content", number)?;
    let icon = match step.get("icon") {
        None | Some(Value::Null) => StepIcon::Default,
        Some(Value::String(tag)) => StepIcon::from_tag(tag),
        Some(_) => {
            return Err(GenerationError::invalid_shape(format!(
                "step {number} has a non-string icon"
            )))
        }
    };

    Ok(InteractiveStep {
        title,
        icon,
        content,
    })
}

fn required_string(
    step: &Map<String, Value>,
    field: &str,
    number: usize,
) -> Result<String, GenerationError> {
    match step.get(field) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        Some(Value::String(_)) => Err(GenerationError::invalid_shape(format!(
            "step {number} has a blank {field}"
        ))),
        Some(_) => Err(GenerationError::invalid_shape(format!(
            "step {number} has a non-string {field}"
        ))),
        None => Err(GenerationError::invalid_shape(format!(
            "step {number} is missing {field}"
        ))),
    }
}

fn optional_string(
    object: &Map<String, Value>,
    field: &str,
) -> Result<Option<String>, GenerationError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.trim().to_string())),
        Some(_) => Err(GenerationError::invalid_shape(format!(
            "\"{field}\" is not a string"
        ))),
    }
}
