//! POST /api/v1/resume — one pass of the extraction pipeline per request.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::errors::AppError;
use crate::ingest::UploadedFile;
use crate::shell::{self, ShellView};
use crate::state::AppState;

/// What the client asked for alongside the upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    Preview,
    Extract,
}

impl Action {
    fn parse(value: &str) -> Result<Self, AppError> {
        match value.trim() {
            "" | "preview" => Ok(Action::Preview),
            "extract" => Ok(Action::Extract),
            other => Err(AppError::Validation(format!(
                "action must be 'preview' or 'extract', got '{other}'"
            ))),
        }
    }
}

/// Multipart fields:
/// - `file`: the resume (optional; absent means idle)
/// - `action`: `preview` (default) or `extract`
pub async fn handle_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ShellView>), AppError> {
    let (upload, action) = read_form(multipart).await?;

    let view = shell::run(upload, action == Action::Extract, state.model.as_ref()).await?;

    let status = match view {
        ShellView::Unsupported { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        _ => StatusCode::OK,
    };
    Ok((status, Json(view)))
}

async fn read_form(mut multipart: Multipart) -> Result<(Option<UploadedFile>, Action), AppError> {
    let mut upload = None;
    let mut action = Action::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read file: {e}")))?;
                // Browsers send an empty part when no file is selected.
                if !file_name.is_empty() {
                    debug!("Received '{file_name}' ({} bytes)", bytes.len());
                    upload = Some(UploadedFile { file_name, bytes });
                }
            }
            "action" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read action: {e}")))?;
                action = Action::parse(&value)?;
            }
            other => {
                field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Could not read field '{other}': {e}"))
                })?;
            }
        }
    }

    Ok((upload, action))
}
