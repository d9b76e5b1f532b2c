// Plain text extractor
use crate::document_processing::{DocumentFormat, UploadedFile};
use crate::{Error, Result};

pub struct TxtExtractor;

impl TxtExtractor {
    /// Read the whole upload and decode it as UTF-8
    ///
    /// Text content is returned unchanged; byte content must be valid UTF-8.
    pub fn extract<F>(file: &mut F) -> Result<String>
    where
        F: UploadedFile + ?Sized,
    {
        let content = file
            .read()
            .map_err(|e| Error::extraction(DocumentFormat::Txt, e))?;

        content
            .into_text()
            .map_err(|e| Error::extraction(DocumentFormat::Txt, e))
    }
}
