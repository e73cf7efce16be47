//! Plain-text extraction from `.docx` files.
//!
//! A `.docx` file is a zip container; the text lives in the
//! `word/document.xml` part as character runs (`w:t`) inside paragraphs
//! (`w:p`). Walking the XML once collects body and table text alike,
//! since table cells hold ordinary paragraphs. Paragraph ends become
//! newlines; explicit tabs and line breaks are preserved.

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use async_trait::async_trait;
use quick_xml::events::Event;
use quick_xml::Reader;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::{LoadError, LoadResult};
use crate::traits::loader::DocumentLoader;

/// Part of the container that carries the document body.
const DOCUMENT_PART: &str = "word/document.xml";

/// Loads `.docx` files into plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxLoader;

impl DocxLoader {
    /// Create a new loader.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentLoader for DocxLoader {
    async fn load(&self, path: &Path) -> LoadResult<String> {
        let bytes = tokio::fs::read(path).await?;
        extract_text(Cursor::new(bytes))
    }

    fn name(&self) -> &str {
        "docx"
    }
}

/// Extract plain text from a `.docx` container.
fn extract_text<R: Read + Seek>(reader: R) -> LoadResult<String> {
    let mut archive = ZipArchive::new(reader)?;

    let mut part = match archive.by_name(DOCUMENT_PART) {
        Ok(part) => part,
        Err(ZipError::FileNotFound) => {
            return Err(LoadError::MissingDocumentPart {
                path: DOCUMENT_PART.to_string(),
            })
        }
        Err(e) => return Err(e.into()),
    };

    let mut xml = String::new();
    part.read_to_string(&mut xml)?;

    document_text(&xml)
}

/// Collect character runs from the document XML.
fn document_text(xml: &str) -> LoadResult<String> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if e.local_name().as_ref() == b"t" {
                    in_run_text = true;
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_run_text = false,
                b"p" => text.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"tab" => text.push('\t'),
                b"br" | b"cr" => text.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_run_text => text.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}
