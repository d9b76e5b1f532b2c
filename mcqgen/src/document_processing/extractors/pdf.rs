// PDF extraction module
//
// Backed by the optional `pdf-extract` crate (cargo feature `pdf`). Builds
// without the feature still accept `.pdf` uploads but answer them with
// `Error::DependencyMissing`.

use crate::document_processing::UploadedFile;
use crate::{Error, Result};

/// Whether this build can read PDF files
pub fn pdf_support_available() -> bool {
    cfg!(feature = "pdf")
}

pub struct PdfExtractor;

impl PdfExtractor {
    /// Extract the text of every page, concatenated in document order
    ///
    /// Pages without extractable text contribute an empty string, so an
    /// image-only PDF yields `Ok("")`.
    pub fn extract<F>(file: &mut F) -> Result<String>
    where
        F: UploadedFile + ?Sized,
    {
        #[cfg(feature = "pdf")]
        {
            use crate::document_processing::DocumentFormat;

            let bytes = file
                .read()
                .map_err(|e| Error::extraction(DocumentFormat::Pdf, e))?
                .into_bytes();

            let pages =
                read_pages(&bytes).map_err(|e| Error::extraction(DocumentFormat::Pdf, e))?;
            tracing::debug!(pages = pages.len(), bytes = bytes.len(), "read PDF pages");

            Ok(pages.concat())
        }

        #[cfg(not(feature = "pdf"))]
        {
            let _ = file;
            Err(Error::DependencyMissing)
        }
    }
}

/// The only place that talks to the PDF reader.
///
/// `pdf-extract` panics on some malformed documents instead of returning an
/// error, so the call runs under `catch_unwind`.
#[cfg(feature = "pdf")]
fn read_pages(bytes: &[u8]) -> std::result::Result<Vec<String>, crate::BoxError> {
    use std::panic::{self, AssertUnwindSafe};

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    }));

    match result {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(Box::new(e)),
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            Err(format!("PDF reader panicked: {reason}").into())
        }
    }
}
