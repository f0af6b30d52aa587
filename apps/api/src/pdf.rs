// PDF text extraction collaborator. A thin wrapper so handlers never touch
// the pdf-extract API directly.

use anyhow::{Context, Result};

/// Extracts the concatenated per-page text from an in-memory PDF.
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(bytes).context("failed to extract text from PDF bytes")
}
