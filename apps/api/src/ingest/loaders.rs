use std::path::Path;

use docx_rs::{
    DocumentChild, InsertChild, Paragraph, ParagraphChild, Run, RunChild, Table, TableCellContent,
    TableChild, TableRowChild,
};

use super::IngestError;

/// One string per page, in page order.
pub(super) fn load_pdf(path: &Path) -> Result<Vec<String>, IngestError> {
    // pdf-extract panics on some malformed fonts and streams.
    let pages = std::panic::catch_unwind(|| pdf_extract::extract_text_by_pages(path))
        .map_err(|_| IngestError::Aborted("PDF loader panicked".to_string()))?
        .map_err(|e| IngestError::Pdf(e.to_string()))?;
    Ok(pages)
}

/// The whole document body as a single string, one line per paragraph.
/// Table cells are read row by row; hyperlink and inserted runs are kept.
pub(super) fn load_docx(path: &Path) -> Result<Vec<String>, IngestError> {
    let data = std::fs::read(path)?;
    let docx = docx_rs::read_docx(&data).map_err(|e| IngestError::Docx(e.to_string()))?;

    let mut text = String::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(p) => push_paragraph(&mut text, p),
            DocumentChild::Table(t) => push_table(&mut text, t),
            _ => {}
        }
    }

    Ok(vec![text])
}

fn push_paragraph(text: &mut String, paragraph: &Paragraph) {
    push_paragraph_children(text, &paragraph.children);
    text.push('\n');
}

fn push_paragraph_children(text: &mut String, children: &[ParagraphChild]) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(text, run),
            ParagraphChild::Hyperlink(link) => push_paragraph_children(text, &link.children),
            ParagraphChild::Insert(insert) => {
                for child in &insert.children {
                    if let InsertChild::Run(run) = child {
                        push_run(text, run);
                    }
                }
            }
            _ => {}
        }
    }
}

fn push_run(text: &mut String, run: &Run) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }
}

fn push_table(text: &mut String, table: &Table) {
    for row in &table.rows {
        let TableChild::TableRow(row) = row else {
            continue;
        };
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell else {
                continue;
            };
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(p) => push_paragraph(text, p),
                    TableCellContent::Table(t) => push_table(text, t),
                    _ => {}
                }
            }
        }
    }
}

pub(super) fn load_text(path: &Path) -> Result<Vec<String>, IngestError> {
    let data = std::fs::read(path)?;
    let text = String::from_utf8(data).map_err(|_| IngestError::Encoding)?;
    Ok(vec![text])
}
