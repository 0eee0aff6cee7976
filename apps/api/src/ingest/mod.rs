//! Document Ingestor — turns an uploaded file into ordered text segments.
//!
//! Dispatch is on the exact, case-sensitive suffix of the declared file name.
//! Parsing is CPU-bound and must run inside `tokio::task::spawn_blocking`
//! (see [`ingest_upload`]).

mod loaders;

use std::io::Write;
use std::path::Path;

use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, info};

/// One upload as received from the client. Lives for a single request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub bytes: Bytes,
}

/// One unit of extracted text: a PDF page, or the whole body of a DOCX/TXT file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSegment {
    /// Zero-based position of this segment in the source document.
    pub index: usize,
    pub text: String,
}

/// Formats the ingestor knows how to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Text,
}

impl DocumentKind {
    /// Suffix match is exact: `resume.PDF` is not a PDF.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        if file_name.ends_with(".pdf") {
            Some(DocumentKind::Pdf)
        } else if file_name.ends_with(".docx") {
            Some(DocumentKind::Docx)
        } else if file_name.ends_with(".txt") {
            Some(DocumentKind::Text)
        } else {
            None
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            DocumentKind::Pdf => ".pdf",
            DocumentKind::Docx => ".docx",
            DocumentKind::Text => ".txt",
        }
    }
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("temporary storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF could not be read: {0}")]
    Pdf(String),

    #[error("DOCX could not be read: {0}")]
    Docx(String),

    #[error("text file is not valid UTF-8")]
    Encoding,

    #[error("document loader aborted: {0}")]
    Aborted(String),
}

/// Loads `bytes` as the format implied by `file_name`.
///
/// Returns `Ok(None)` for unsupported suffixes. The bytes are staged in a
/// temporary file that is removed when this function returns, whatever the
/// outcome.
pub fn ingest(bytes: &[u8], file_name: &str) -> Result<Option<Vec<DocumentSegment>>, IngestError> {
    ingest_in(&std::env::temp_dir(), bytes, file_name)
}

/// [`ingest`] with the staging file created under `staging_dir`.
pub fn ingest_in(
    staging_dir: &Path,
    bytes: &[u8],
    file_name: &str,
) -> Result<Option<Vec<DocumentSegment>>, IngestError> {
    let Some(kind) = DocumentKind::from_file_name(file_name) else {
        info!("Unsupported upload '{file_name}'");
        return Ok(None);
    };

    let mut staged = tempfile::Builder::new()
        .prefix("resume-")
        .suffix(kind.suffix())
        .tempfile_in(staging_dir)?;
    staged.write_all(bytes)?;
    staged.flush()?;
    debug!(
        "Staged {} bytes of '{file_name}' at {}",
        bytes.len(),
        staged.path().display()
    );

    let texts = match kind {
        DocumentKind::Pdf => loaders::load_pdf(staged.path())?,
        DocumentKind::Docx => loaders::load_docx(staged.path())?,
        DocumentKind::Text => loaders::load_text(staged.path())?,
    };

    let segments: Vec<DocumentSegment> = texts
        .into_iter()
        .enumerate()
        .map(|(index, text)| DocumentSegment { index, text })
        .collect();

    for segment in &segments {
        debug!("Segment {}: {} chars", segment.index, segment.text.len());
    }
    info!(
        "Ingested '{file_name}' as {kind:?}: {} segment(s)",
        segments.len()
    );
    Ok(Some(segments))
}

/// Runs [`ingest`] on the blocking pool. A loader panic surfaces as
/// `IngestError::Aborted` instead of taking the worker down.
pub async fn ingest_upload(
    upload: &UploadedFile,
) -> Result<Option<Vec<DocumentSegment>>, IngestError> {
    let bytes = upload.bytes.clone();
    let file_name = upload.file_name.clone();

    tokio::task::spawn_blocking(move || ingest(&bytes, &file_name))
        .await
        .map_err(|e| IngestError::Aborted(e.to_string()))?
}
