//! Input manager for handling different file types

use crate::error::{Result, ResumeScreenerError};
use crate::input::file_detector::{FileType, SUPPORTED_EXTENSIONS};
use crate::input::text_extractor::{
    DocxExtractor, LegacyDocExtractor, MarkdownExtractor, PdfExtractor, PlainTextExtractor,
    TextExtractor,
};
use log::{debug, info};
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Default)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    pub async fn extract_text(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ResumeScreenerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let bytes = fs::read(path).await?;
        let name = path.to_string_lossy();
        self.extract_bytes(&name, &bytes)
    }

    /// Extract text from an in-memory upload, routed by the file name's extension
    pub fn extract_bytes(&self, file_name: &str, bytes: &[u8]) -> Result<String> {
        let file_type = FileType::from_path(Path::new(file_name));

        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", file_name);
                PdfExtractor.extract(bytes)?
            }
            FileType::Docx => {
                info!("Extracting text from DOCX: {}", file_name);
                DocxExtractor.extract(bytes)?
            }
            FileType::Doc => LegacyDocExtractor.extract(bytes)?,
            FileType::Text => {
                info!("Reading plain text file: {}", file_name);
                PlainTextExtractor.extract(bytes)?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", file_name);
                MarkdownExtractor.extract(bytes)?
            }
            FileType::Unknown => {
                return Err(ResumeScreenerError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    file_name
                )));
            }
        };

        debug!("Extracted {} characters from {}", text.chars().count(), file_name);
        Ok(text)
    }
}

/// Expand the given paths into the resume files to screen.
///
/// Files are taken as given. Directories contribute their supported files
/// (one level deep, sorted by name). Duplicates keep their first position.
pub async fn discover_resumes(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut resumes = Vec::new();

    for path in paths {
        let metadata = fs::metadata(path).await.map_err(|_| {
            ResumeScreenerError::InvalidInput(format!("Path does not exist: {}", path.display()))
        })?;

        if metadata.is_dir() {
            let mut found = Vec::new();
            let mut entries = fs::read_dir(path).await?;
            while let Some(entry) = entries.next_entry().await? {
                let entry_path = entry.path();
                if entry.file_type().await?.is_file()
                    && FileType::from_path(&entry_path).is_supported()
                {
                    found.push(entry_path);
                }
            }
            found.sort();
            info!("Found {} resumes in {}", found.len(), path.display());
            resumes.extend(found);
        } else {
            resumes.push(path.clone());
        }
    }

    let mut seen = std::collections::HashSet::new();
    resumes.retain(|path| seen.insert(path.clone()));
    Ok(resumes)
}

/// Validate file extension
pub fn validate_file_extension(path: &Path) -> std::result::Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if FileType::from_extension(ext).is_supported() {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    SUPPORTED_EXTENSIONS.join(", ")
                ))
            }
        }
        None => Err(format!("File has no extension: {}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_discover_resumes_in_directory() {
        let dir = TempDir::new().unwrap();
        for name in ["b.pdf", "a.docx", "notes.xlsx", "c.txt"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.pdf")).unwrap();

        let found = discover_resumes(&[dir.path().to_path_buf()]).await.unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.docx", "b.pdf", "c.txt"]);
    }

    #[tokio::test]
    async fn test_discover_resumes_dedups_and_rejects_missing() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("cv.txt");
        std::fs::write(&file, b"x").unwrap();

        let found = discover_resumes(&[file.clone(), dir.path().to_path_buf()]).await.unwrap();
        assert_eq!(found, vec![file]);

        let missing = discover_resumes(&[dir.path().join("gone.pdf")]).await;
        assert!(matches!(missing, Err(ResumeScreenerError::InvalidInput(_))));
    }

    #[test]
    fn test_extract_bytes_routes_by_extension() {
        let manager = InputManager::new();
        let text = manager.extract_bytes("upload.TXT", b"Acme Corp").unwrap();
        assert_eq!(text, "Acme Corp");

        assert!(matches!(
            manager.extract_bytes("upload.xyz", b"Acme Corp"),
            Err(ResumeScreenerError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("cv.pdf")).is_ok());
        assert!(validate_file_extension(Path::new("cv.DOC")).is_ok());
        assert!(validate_file_extension(Path::new("cv.xlsx")).is_err());
        assert!(validate_file_extension(Path::new("cv")).is_err());
    }
}
