// Extractors for the supported upload formats

pub mod pdf;
pub mod txt;

pub use pdf::{pdf_support_available, PdfExtractor};
pub use txt::TxtExtractor;
