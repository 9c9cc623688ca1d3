use crate::domain::model::DocumentKind;
use crate::domain::ports::TextExtractor;
use crate::utils::error::{MatcherError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::Read;
use std::path::Path;

const DOCX_BODY: &str = "word/document.xml";

/// Page-by-page PDF text; blank pages are skipped, each kept page ends with `\n`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path)?;

        // pdf-extract 遇到壞檔可能 panic
        let pages = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(&bytes))
            .map_err(|_| MatcherError::PdfError {
                message: format!("parser aborted on '{}'", path.display()),
            })?
            .map_err(|e| MatcherError::PdfError {
                message: format!("'{}': {}", path.display(), e),
            })?;

        let mut text = String::new();
        for page in pages.iter().filter(|page| !page.trim().is_empty()) {
            text.push_str(page);
            text.push('\n');
        }

        tracing::debug!("📑 Extracted {} chars from {} PDF pages", text.len(), pages.len());
        Ok(text)
    }
}

/// Paragraph text of a Word document, one paragraph per line.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let file = std::fs::File::open(path)?;
        let mut archive = zip::ZipArchive::new(file)?;

        let mut xml = String::new();
        archive
            .by_name(DOCX_BODY)
            .map_err(|_| MatcherError::DocxError {
                message: format!("'{}' has no {}", path.display(), DOCX_BODY),
            })?
            .read_to_string(&mut xml)?;

        let paragraphs = docx_paragraphs(&xml)?;
        tracing::debug!("📝 Extracted {} DOCX paragraphs", paragraphs.len());
        Ok(paragraphs.join("\n"))
    }
}

/// Text of the top-level body paragraphs, in document order.
/// Paragraphs nested in tables and text boxes are left out.
pub fn docx_paragraphs(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    let mut paragraphs = Vec::new();
    // 目前所在的元素路徑 (local name)
    let mut path: Vec<Vec<u8>> = Vec::new();
    let mut current: Option<String> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                let name = e.local_name().as_ref().to_vec();
                if name == b"p" && path.last().is_some_and(|n| n == b"body") {
                    current = Some(String::new());
                } else if in_body_run(&path) {
                    push_run_break(&name, &mut current);
                }
                path.push(name);
            }
            Event::Empty(ref e) => {
                let name = e.local_name();
                if name.as_ref() == b"p" && path.last().is_some_and(|n| n == b"body") {
                    paragraphs.push(String::new());
                } else if in_body_run(&path) {
                    push_run_break(name.as_ref(), &mut current);
                }
            }
            Event::End(_) => {
                if path.pop().is_some_and(|n| n == b"p") && path.last().is_some_and(|n| n == b"body") {
                    if let Some(paragraph) = current.take() {
                        paragraphs.push(paragraph);
                    }
                }
            }
            Event::Text(ref e) if in_body_text(&path) => {
                if let Some(paragraph) = current.as_mut() {
                    paragraph.push_str(&e.unescape()?);
                }
            }
            Event::CData(ref e) if in_body_text(&path) => {
                if let Some(paragraph) = current.as_mut() {
                    paragraph.push_str(&String::from_utf8_lossy(e));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}

fn path_ends_with(path: &[Vec<u8>], tail: &[&[u8]]) -> bool {
    path.len() >= tail.len()
        && path[path.len() - tail.len()..]
            .iter()
            .zip(tail)
            .all(|(a, b)| a.as_slice() == *b)
}

// A run directly in a body paragraph, or in a hyperlink inside one.
fn in_body_run(path: &[Vec<u8>]) -> bool {
    path_ends_with(path, &[b"body", b"p", b"r"]) || path_ends_with(path, &[b"body", b"p", b"hyperlink", b"r"])
}

fn in_body_text(path: &[Vec<u8>]) -> bool {
    path.last().is_some_and(|n| n == b"t") && in_body_run(&path[..path.len() - 1])
}

// Tabs and breaks only count inside a run; <w:tabs><w:tab/> in paragraph properties is layout.
fn push_run_break(name: &[u8], current: &mut Option<String>) {
    let Some(paragraph) = current.as_mut() else {
        return;
    };
    match name {
        b"tab" => paragraph.push('\t'),
        b"br" | b"cr" => paragraph.push('\n'),
        _ => {}
    }
}

/// Lower-cased text of a PDF or DOCX file, chosen by extension.
pub fn extract_text(path: &Path) -> Result<String> {
    let text = match DocumentKind::from_path(path)? {
        DocumentKind::Pdf => PdfExtractor.extract(path)?,
        DocumentKind::Docx => DocxExtractor.extract(path)?,
    };
    Ok(text.to_lowercase())
}
