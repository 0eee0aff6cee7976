use askama::Template;
use axum::response::Html;

use crate::assemble::PREVIEW_CHAR_LIMIT;
use crate::errors::AppError;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    pub title: &'a str,
    pub accept: &'a str,
    pub preview_limit: usize,
    pub version: &'a str,
}

/// GET /
/// Serves the single-page UI. All pipeline work happens in `POST /api/v1/resume`.
pub async fn index() -> Result<Html<String>, AppError> {
    let page = IndexPage {
        title: "Resume Parser",
        accept: ".txt,.docx,.pdf",
        preview_limit: PREVIEW_CHAR_LIMIT,
        version: env!("CARGO_PKG_VERSION"),
    };
    Ok(Html(page.render()?))
}
