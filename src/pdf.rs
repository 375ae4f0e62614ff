use lopdf::Document;
use thiserror::Error;

use crate::pages;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("failed to parse PDF: {0}")]
    Parse(#[source] lopdf::Error),
    #[error("failed to extract text from page {page}: {source}")]
    Extract {
        page: u32,
        #[source]
        source: lopdf::Error,
    },
}

/// Extract plain text for the pages selected by `page_range`.
///
/// Pages come out in ascending order regardless of token order, separated by
/// a blank line. A range that selects no pages yields a diagnostic string,
/// not an error; bytes that are not a PDF at all yield `PdfError::Parse`.
pub fn extract_text(bytes: &[u8], page_range: &str) -> Result<String, PdfError> {
    let document = Document::load_mem(bytes).map_err(PdfError::Parse)?;
    let num_pages = document.get_pages().len() as u32;

    let selected = pages::resolve(page_range, num_pages);
    if selected.is_empty() {
        return Ok(format!(
            "No valid pages selected (range: \"{page_range}\", total pages: {num_pages})"
        ));
    }

    let mut chunks = Vec::with_capacity(selected.len());
    for page in selected {
        let text = document
            .extract_text(&[page])
            .map_err(|source| PdfError::Extract { page, source })?;
        chunks.push(text.trim_end().to_string());
    }

    Ok(chunks.join("\n\n"))
}
