//! Response Interpreter — strict JSON decoding with a raw-text fallback.
//!
//! The extraction schema is advisory: whatever JSON the model returns is passed
//! through untouched. `summarize` only reads the decoded value for display.

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

/// Placeholder the prompt asks for when a scalar field is absent.
pub const NOT_FOUND_SENTINEL: &str = "No idea";

/// Outcome of interpreting a model answer. Both branches are normal results.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Interpretation {
    /// The answer decoded as JSON.
    Structured(Value),
    /// The answer was not JSON and is shown verbatim.
    Raw(String),
}

pub fn interpret(raw: &str) -> Interpretation {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => Interpretation::Structured(value),
        Err(e) => {
            warn!("Model answer is not valid JSON ({e}); falling back to raw text");
            Interpretation::Raw(raw.to_string())
        }
    }
}

/// The ten keys the extraction prompt asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeField {
    Name,
    Email,
    Phone,
    LinkedIn,
    Skills,
    Education,
    Experience,
    Projects,
    Certifications,
    Languages,
}

impl ResumeField {
    pub const ALL: [ResumeField; 10] = [
        ResumeField::Name,
        ResumeField::Email,
        ResumeField::Phone,
        ResumeField::LinkedIn,
        ResumeField::Skills,
        ResumeField::Education,
        ResumeField::Experience,
        ResumeField::Projects,
        ResumeField::Certifications,
        ResumeField::Languages,
    ];

    /// JSON key as spelled in the prompt.
    pub fn key(self) -> &'static str {
        match self {
            ResumeField::Name => "Name",
            ResumeField::Email => "Email",
            ResumeField::Phone => "Phone",
            ResumeField::LinkedIn => "LinkedIn",
            ResumeField::Skills => "Skills",
            ResumeField::Education => "Education",
            ResumeField::Experience => "Experience",
            ResumeField::Projects => "Projects",
            ResumeField::Certifications => "Certifications",
            ResumeField::Languages => "Languages",
        }
    }

    pub fn is_list(self) -> bool {
        !matches!(
            self,
            ResumeField::Name | ResumeField::Email | ResumeField::Phone | ResumeField::LinkedIn
        )
    }
}

/// Display row for one of the ten fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSummary {
    pub field: &'static str,
    pub is_list: bool,
    pub found: bool,
    pub values: Vec<String>,
}

/// One row per known field. Empty when the decoded value is not an object.
pub fn summarize(value: &Value) -> Vec<FieldSummary> {
    let Some(object) = value.as_object() else {
        return Vec::new();
    };

    ResumeField::ALL
        .iter()
        .map(|&field| {
            let values = object.get(field.key()).map(display_values).unwrap_or_default();
            FieldSummary {
                field: field.key(),
                is_list: field.is_list(),
                found: !values.is_empty(),
                values,
            }
        })
        .collect()
}

/// Flattens a field value into display strings, dropping sentinels and blanks.
fn display_values(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(display_scalar).collect(),
        other => display_scalar(other).into_iter().collect(),
    }
}

fn display_scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty() && s != NOT_FOUND_SENTINEL).then(|| s.to_string())
        }
        other => Some(other.to_string()),
    }
}
