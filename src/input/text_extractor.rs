//! Text extraction from various file formats

use crate::error::{Result, ResumeScreenerError};
use pulldown_cmark::{html, Parser};
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;
use std::io::{Cursor, Read};

/// Extracts plain text from the raw bytes of one document
pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            ResumeScreenerError::PdfExtraction(format!("Failed to extract text from PDF: {}", e))
        })
    }
}

/// Reads `word/document.xml` out of the DOCX container, one line per paragraph
pub struct DocxExtractor;

const DOCX_BODY: &str = "word/document.xml";

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
        let mut xml = String::new();
        archive
            .by_name(DOCX_BODY)
            .map_err(|e| {
                ResumeScreenerError::DocxExtraction(format!("Missing {}: {}", DOCX_BODY, e))
            })?
            .read_to_string(&mut xml)?;

        self.paragraph_text(&xml)
    }
}

impl DocxExtractor {
    fn paragraph_text(&self, xml: &str) -> Result<String> {
        let mut reader = Reader::from_str(xml);
        let mut paragraphs = Vec::new();
        let mut current = String::new();
        let mut in_text_run = false;

        loop {
            match reader.read_event()? {
                Event::Start(e) if e.name().as_ref() == b"w:t" => in_text_run = true,
                Event::End(e) => match e.name().as_ref() {
                    b"w:t" => in_text_run = false,
                    b"w:p" => paragraphs.push(std::mem::take(&mut current)),
                    _ => {}
                },
                Event::Empty(e) => match e.name().as_ref() {
                    b"w:tab" => current.push('\t'),
                    b"w:br" | b"w:cr" => current.push('\n'),
                    b"w:p" => paragraphs.push(String::new()),
                    _ => {}
                },
                Event::Text(t) if in_text_run => current.push_str(&t.unescape()?),
                Event::Eof => break,
                _ => {}
            }
        }

        if !current.is_empty() {
            paragraphs.push(current);
        }

        Ok(paragraphs.join("\n"))
    }
}

/// Old binary `.doc` files are recognized so they can be reported, never read
pub struct LegacyDocExtractor;

impl TextExtractor for LegacyDocExtractor {
    fn extract(&self, _bytes: &[u8]) -> Result<String> {
        Err(ResumeScreenerError::UnsupportedFormat(
            "legacy .doc files cannot be read; convert to .docx or .pdf".to_string(),
        ))
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let markdown_content = String::from_utf8_lossy(bytes);

        let parser = Parser::new(&markdown_content);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        Ok(self.html_to_text(&html_output))
    }
}

impl MarkdownExtractor {
    fn html_to_text(&self, html: &str) -> String {
        let text = html
            .replace("<br />", "\n")
            .replace("</p>", "\n")
            .replace("</li>", "\n");

        // Decode entities only after tags are stripped.
        let tag_regex = Regex::new(r"<[^>]*>").expect("Invalid tag regex");
        let clean_text = tag_regex
            .replace_all(&text, "")
            .replace("&nbsp;", " ")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&");

        clean_text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
