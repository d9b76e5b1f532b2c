// Utilities for the MCQ generation workflow: pull plain text out of an
// uploaded document, and flatten a generated quiz into display rows.

use document_processing::DocumentFormat;

// Boxed cause chained behind `Error::ExtractionFailed`
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// The crate's error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unsupported file format: only .pdf and .txt files supported")]
    UnsupportedFormat { name: String },
    #[error("PDF support is not installed; rebuild with the `pdf` feature to read PDF files")]
    DependencyMissing,
    #[error("error reading the {format} file")]
    ExtractionFailed {
        format: DocumentFormat,
        #[source]
        source: BoxError,
    },
}

impl Error {
    pub(crate) fn extraction(format: DocumentFormat, source: impl Into<BoxError>) -> Self {
        Error::ExtractionFailed {
            format,
            source: source.into(),
        }
    }
}

impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub mod document_processing;
pub mod quiz;

pub use document_processing::{extract_text, FileContent, NamedReader, TextUpload, UploadedFile};
pub use quiz::{build_table, ParseFailure, QuizRow};
