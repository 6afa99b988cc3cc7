//! Response Extractor — recovers the JSON object a model wrapped in prose or code fences.
//!
//! Scans for top-level brace blocks with a brace stack that skips over JSON
//! string literals, so braces inside values and trailing example blocks do not
//! corrupt the match. The first block that decodes as an object wins.

use serde_json::Value;
use thiserror::Error;

use crate::roadmap::models::RoadmapResult;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ExtractionError(pub String);

/// Returns the first JSON object found in `text`.
///
/// Falls back to decoding the whole trimmed text when no balanced block exists,
/// so the decoder's own message is reported for plain non-JSON answers.
pub fn extract_json(text: &str) -> Result<Value, ExtractionError> {
    let block = find_object(text)?;
    serde_json::from_str(block).map_err(|e| ExtractionError(e.to_string()))
}

/// Extracts the JSON object from model output and decodes it as a roadmap.
///
/// Decodes straight from the matched slice so the model's key order survives.
pub fn extract_roadmap(text: &str) -> Result<RoadmapResult, ExtractionError> {
    let block = find_object(text)?;
    serde_json::from_str(block).map_err(|e| ExtractionError(e.to_string()))
}

/// The slice of `text` holding the first JSON object.
fn find_object(text: &str) -> Result<&str, ExtractionError> {
    let mut first_error: Option<String> = None;

    for block in brace_blocks(text) {
        match serde_json::from_str::<Value>(block) {
            Ok(Value::Object(_)) => return Ok(block),
            Ok(_) => {}
            Err(e) => {
                first_error.get_or_insert_with(|| e.to_string());
            }
        }
    }

    if let Some(message) = first_error {
        return Err(ExtractionError(message));
    }

    let trimmed = text.trim();
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(_)) => Ok(trimmed),
        Ok(other) => Err(ExtractionError(format!(
            "expected a JSON object, found {}",
            json_kind(&other)
        ))),
        Err(e) => Err(ExtractionError(e.to_string())),
    }
}

/// Top-level `{ ... }` slices of `text`, left to right, in one linear pass.
///
/// A brace that never closes is abandoned: the blocks closed directly inside
/// it are promoted to top level in its place.
fn brace_blocks(text: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    // Open braces, each with the blocks closed directly inside it.
    let mut open: Vec<(usize, Vec<&str>)> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (i, byte) in text.bytes().enumerate() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match byte {
            b'"' if !open.is_empty() => in_string = true,
            b'{' => open.push((i, Vec::new())),
            b'}' => {
                if let Some((start, _)) = open.pop() {
                    let block = &text[start..=i];
                    match open.last_mut() {
                        Some((_, children)) => children.push(block),
                        None => blocks.push(block),
                    }
                }
            }
            _ => {}
        }
    }

    blocks.extend(open.into_iter().flat_map(|(_, children)| children));
    blocks
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
