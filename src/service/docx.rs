//! DOCX 容器解析：DOCX 為 ZIP 封裝的 OOXML，正文在 word/document.xml

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::error::ConvertError;

#[derive(Debug, Clone, PartialEq)]
pub struct DocxParagraph {
    pub text: String,
    /// Heading1~Heading3 樣式對應 1~3，其餘為 None
    pub heading: Option<u8>,
}

#[derive(Debug)]
pub struct DocxDocument {
    pub paragraphs: Vec<DocxParagraph>,
}

impl DocxDocument {
    pub fn parse(bytes: &[u8]) -> Result<Self, ConvertError> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| ConvertError::ConverterFailure(format!("not an OOXML container: {}", e)))?;

        let mut xml = Vec::new();
        archive
            .by_name("word/document.xml")
            .map_err(|_| ConvertError::ConverterFailure("word/document.xml missing".to_string()))?
            .read_to_end(&mut xml)
            .map_err(|e| ConvertError::ConverterFailure(e.to_string()))?;

        parse_document_xml(&xml)
    }
}

pub fn parse_document_xml(xml: &[u8]) -> Result<DocxDocument, ConvertError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut paragraphs = Vec::new();
    let mut in_paragraph = false;
    let mut in_text = false;
    let mut current_text = String::new();
    let mut current_style: Option<String> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"p" => {
                    in_paragraph = true;
                    current_text.clear();
                    current_style = None;
                }
                b"t" if in_paragraph => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"pStyle" if in_paragraph => {
                    for attr in e.attributes().filter_map(|a| a.ok()) {
                        if attr.key.as_ref() == b"w:val" || attr.key.as_ref() == b"val" {
                            if let Ok(val) = String::from_utf8(attr.value.to_vec()) {
                                current_style = Some(val);
                            }
                        }
                    }
                }
                b"tab" if in_paragraph => current_text.push('\t'),
                b"br" if in_paragraph => current_text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(ref e)) => {
                if in_text {
                    if let Ok(text) = e.unescape() {
                        current_text.push_str(&text);
                    }
                }
            }
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => {
                    if in_paragraph {
                        paragraphs.push(DocxParagraph {
                            text: std::mem::take(&mut current_text),
                            heading: current_style.as_deref().and_then(heading_level),
                        });
                        in_paragraph = false;
                        current_style = None;
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ConvertError::ConverterFailure(format!(
                    "malformed document.xml: {}",
                    e
                )))
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(DocxDocument { paragraphs })
}

// Word 內建標題樣式 id 形如 Heading1；只認前三層，與輸出的字級對應
fn heading_level(style_id: &str) -> Option<u8> {
    let lower = style_id.to_lowercase();
    match lower.as_str() {
        "heading1" | "heading 1" => Some(1),
        "heading2" | "heading 2" => Some(2),
        "heading3" | "heading 3" => Some(3),
        _ => None,
    }
}
