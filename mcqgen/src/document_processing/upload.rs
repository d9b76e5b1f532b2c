// Uploaded file handles
//
// An upload is anything with a name (used only to pick the extractor) and a
// single read that yields either raw bytes or already-decoded text.

use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::Path;
use std::string::FromUtf8Error;

/// What a single read of an upload produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Bytes(Vec<u8>),
    Text(String),
}

impl FileContent {
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            FileContent::Bytes(bytes) => bytes,
            FileContent::Text(text) => text.into_bytes(),
        }
    }

    /// Decode as UTF-8; text content passes through unchanged
    pub fn into_text(self) -> Result<String, FromUtf8Error> {
        match self {
            FileContent::Bytes(bytes) => String::from_utf8(bytes),
            FileContent::Text(text) => Ok(text),
        }
    }
}

/// A caller-owned upload borrowed for the duration of one extraction
pub trait UploadedFile {
    /// Name used for suffix dispatch; may be empty
    fn name(&self) -> &str;

    /// Read the full contents
    fn read(&mut self) -> io::Result<FileContent>;
}

impl<T: UploadedFile + ?Sized> UploadedFile for &mut T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn read(&mut self) -> io::Result<FileContent> {
        (**self).read()
    }
}

/// Any reader paired with a display name
pub struct NamedReader<R> {
    name: String,
    reader: R,
}

impl<R: Read> NamedReader<R> {
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        Self {
            name: name.into(),
            reader,
        }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl NamedReader<File> {
    /// Open a file on disk, named after the path's file name
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self::new(name, file))
    }
}

impl NamedReader<Cursor<Vec<u8>>> {
    /// Wrap an in-memory upload
    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(name, Cursor::new(bytes.into()))
    }
}

impl<R: Read> UploadedFile for NamedReader<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&mut self) -> io::Result<FileContent> {
        let mut bytes = Vec::new();
        self.reader.read_to_end(&mut bytes)?;
        Ok(FileContent::Bytes(bytes))
    }
}

/// An upload whose content arrives already decoded, e.g. from a text form field
#[derive(Debug, Clone)]
pub struct TextUpload {
    pub name: String,
    pub text: String,
}

impl TextUpload {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

impl UploadedFile for TextUpload {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&mut self) -> io::Result<FileContent> {
        Ok(FileContent::Text(self.text.clone()))
    }
}
