//! Error handling for the resume screener

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeScreenerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("DOCX extraction error: {0}")]
    DocxExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Blacklist error: {0}")]
    Blacklist(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ResumeScreenerError>;

/// Zip archive failures only surface while reading DOCX containers
impl From<zip::result::ZipError> for ResumeScreenerError {
    fn from(err: zip::result::ZipError) -> Self {
        ResumeScreenerError::DocxExtraction(err.to_string())
    }
}

impl From<quick_xml::Error> for ResumeScreenerError {
    fn from(err: quick_xml::Error) -> Self {
        ResumeScreenerError::DocxExtraction(err.to_string())
    }
}
