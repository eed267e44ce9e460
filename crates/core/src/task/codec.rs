//! Stored-board codec
//!
//! Persisted state is untrusted: it may come from an older schema, be hand
//! edited, or be truncated. Decoding validates each record and drops the
//! ones that cannot be repaired instead of failing the whole load.

use std::collections::HashSet;

use serde_json::{Map, Value};
use tracing::warn;

use super::model::Task;
use crate::stage::StageSet;
use crate::{Error, Result};

/// Serialize a task collection into the stored-board format
pub fn encode_tasks(tasks: &[Task]) -> Result<String> {
    Ok(serde_json::to_string(tasks)?)
}

/// Parse and sanitize a stored board
///
/// Fails only when `raw` is not JSON or not a JSON array. Individual bad
/// records are dropped with a warning.
pub fn decode_tasks(raw: &str, stages: &StageSet) -> Result<Vec<Task>> {
    let value: Value = serde_json::from_str(raw)?;
    let Value::Array(records) = value else {
        return Err(Error::InvalidInput(
            "Stored tasks are not a list".to_string(),
        ));
    };

    let mut seen = HashSet::new();
    let mut tasks = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        match sanitize_record(record, stages) {
            Ok(task) => {
                if seen.insert(task.id.clone()) {
                    tasks.push(task);
                } else {
                    warn!("Dropping stored task {}: duplicate id {}", index, task.id);
                }
            }
            Err(reason) => warn!("Dropping stored task {}: {}", index, reason),
        }
    }

    Ok(tasks)
}

fn sanitize_record(record: &Value, stages: &StageSet) -> std::result::Result<Task, String> {
    let Some(fields) = record.as_object() else {
        return Err("not an object".to_string());
    };

    let stage = stage_field(fields).ok_or_else(|| "missing status".to_string())?;
    if !stages.contains(stage) {
        return Err(format!("unknown status {:?}", stage));
    }

    let id = match fields.get("id") {
        Some(Value::String(id)) if !id.is_empty() => id,
        _ => return Err("missing id".to_string()),
    };

    let title = match fields.get("title") {
        Some(Value::String(title)) => title.trim(),
        _ => return Err("missing title".to_string()),
    };
    if title.is_empty() {
        return Err("blank title".to_string());
    }

    let description = match fields.get("description") {
        Some(Value::String(description)) => description.as_str(),
        _ => "",
    };

    let is_priority = fields.get("isPriority").is_some_and(is_truthy);

    Ok(Task {
        id: id.clone(),
        title: title.to_string(),
        description: description.to_string(),
        stage: stage.to_string(),
        is_priority,
    })
}

/// `status` is canonical; `stage` is accepted as an alias
fn stage_field(fields: &Map<String, Value>) -> Option<&str> {
    fields
        .get("status")
        .and_then(Value::as_str)
        .or_else(|| fields.get("stage").and_then(Value::as_str))
}

/// Truthiness of a stored flag: non-empty strings, non-zero numbers and
/// any array or object count as set
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
        Value::Null => false,
    }
}
