//! Document-to-text extraction behind a pluggable trait.
//!
//! Default: `PdfTextExtractor` (pdf-extract). `AppState` holds an
//! `Arc<dyn TextExtractor>` so handlers never depend on the PDF backend directly.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("document is empty")]
    EmptyDocument,

    #[error("{0}")]
    Decode(String),

    #[error("extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Turns a binary document into plain text: each page's text followed by a newline.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, document: Bytes) -> Result<String, ExtractionError>;
}

/// PDF text extraction backed by `pdf-extract`.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, document: Bytes) -> Result<String, ExtractionError> {
        if document.is_empty() {
            return Err(ExtractionError::EmptyDocument);
        }

        // Decoding is CPU-bound; keep it off the async executor.
        let pages = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem_by_pages(&document).map_err(|e| e.to_string())
        })
        .await?
        .map_err(ExtractionError::Decode)?;

        debug!(pages = pages.len(), "PDF text extracted");
        Ok(join_pages(&pages))
    }
}

fn join_pages(pages: &[String]) -> String {
    pages.iter().fold(String::new(), |mut text, page| {
        text.push_str(page);
        text.push('\n');
        text
    })
}
