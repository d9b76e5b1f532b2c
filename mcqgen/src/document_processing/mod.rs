// Document Processing Module
//
// Pulls plain text out of uploaded documents so it can be handed to the
// question generator.
//
// Main components:
// - upload: the uploaded file handle (a name plus a single read)
// - extractors: PDF and plain text readers
// - utils: locating supported documents on disk
//
// Usage:
//   1. Wrap the upload in something implementing `UploadedFile`
//   2. Call `extract_text`; the suffix of the upload's name picks the extractor

pub mod extractors;
pub mod upload;
pub mod utils;

pub use extractors::{pdf_support_available, PdfExtractor, TxtExtractor};
pub use upload::{FileContent, NamedReader, TextUpload, UploadedFile};
pub use utils::find_documents;

use std::fmt;

use tracing::{debug, warn};

use crate::{Error, Result};

/// Formats accepted by [`extract_text`], keyed on the upload's file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Txt,
}

impl DocumentFormat {
    /// Detect the format from the case-insensitive suffix of `name`
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        if name.ends_with(".pdf") {
            Some(DocumentFormat::Pdf)
        } else if name.ends_with(".txt") {
            Some(DocumentFormat::Txt)
        } else {
            None
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Pdf => f.write_str("PDF"),
            DocumentFormat::Txt => f.write_str("text"),
        }
    }
}

/// Extract the text content of an uploaded document.
///
/// Unsupported names are rejected before the handle is read. The handle is
/// borrowed for one sequential read and is never closed here.
pub fn extract_text<F>(file: &mut F) -> Result<String>
where
    F: UploadedFile + ?Sized,
{
    let Some(format) = DocumentFormat::from_name(file.name()) else {
        return Err(Error::UnsupportedFormat {
            name: file.name().to_string(),
        });
    };
    debug!(name = file.name(), %format, "extracting document text");

    let result = match format {
        DocumentFormat::Pdf => PdfExtractor::extract(file),
        DocumentFormat::Txt => TxtExtractor::extract(file),
    };

    match &result {
        Ok(text) => debug!(name = file.name(), chars = text.chars().count(), "extracted document text"),
        Err(err) => warn!(name = file.name(), error = %err, "document extraction failed"),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_name() {
        assert_eq!(DocumentFormat::from_name("paper.pdf"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_name("SCAN.PDF"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_name("notes.Txt"), Some(DocumentFormat::Txt));
        assert_eq!(DocumentFormat::from_name("notes.docx"), None);
        assert_eq!(DocumentFormat::from_name("pdf"), None);
        assert_eq!(DocumentFormat::from_name(""), None);
    }

    #[test]
    fn test_format_display_matches_error_messages() {
        assert_eq!(DocumentFormat::Pdf.to_string(), "PDF");
        assert_eq!(DocumentFormat::Txt.to_string(), "text");
    }
}
