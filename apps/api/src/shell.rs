//! Interaction Shell — sequences ingest → preview → prompt → model → interpret.
//!
//! `run` is a pure function of (upload, trigger) plus the injected model.
//! Nothing is remembered between calls; the browser re-posts the file.

use serde::Serialize;
use tracing::info;

use crate::assemble::{assemble, preview, PREVIEW_CHAR_LIMIT};
use crate::errors::AppError;
use crate::ingest::{ingest_upload, UploadedFile};
use crate::interpret::{interpret, summarize, FieldSummary, Interpretation};
use crate::llm_client::ExtractionModel;
use crate::prompts::build_prompt;

/// What the page should show after one pass through the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ShellView {
    /// No file selected yet.
    Idle,
    /// The file type is not one of txt, docx, pdf. The model was not called.
    Unsupported { file_name: String },
    Preview {
        file_name: String,
        preview: String,
        truncated: bool,
    },
    Extracted {
        file_name: String,
        preview: String,
        truncated: bool,
        result: Interpretation,
        /// Per-field display rows; empty for the raw-text branch.
        summary: Vec<FieldSummary>,
    },
}

pub async fn run(
    upload: Option<UploadedFile>,
    trigger: bool,
    model: &dyn ExtractionModel,
) -> Result<ShellView, AppError> {
    let Some(upload) = upload else {
        return Ok(ShellView::Idle);
    };
    let file_name = upload.file_name.clone();

    let segments = match ingest_upload(&upload).await? {
        Some(segments) if !segments.is_empty() => segments,
        _ => return Ok(ShellView::Unsupported { file_name }),
    };

    let full_text = assemble(&segments);
    let shown = preview(&full_text).to_string();
    let truncated = shown.len() < full_text.len();

    if !trigger {
        return Ok(ShellView::Preview {
            file_name,
            preview: shown,
            truncated,
        });
    }

    info!(
        "Extracting '{file_name}': {} chars (preview limit {PREVIEW_CHAR_LIMIT})",
        full_text.chars().count()
    );
    let prompt = build_prompt(&full_text);
    let answer = model.complete(&prompt).await?;
    let result = interpret(&answer);
    let summary = match &result {
        Interpretation::Structured(value) => summarize(value),
        Interpretation::Raw(_) => Vec::new(),
    };

    Ok(ShellView::Extracted {
        file_name,
        preview: shown,
        truncated,
        result,
        summary,
    })
}
