use log::info;

use crate::error::ConvertError;
use crate::models::text::{TextRenderInput, TextRenderOutput};
use crate::service::pdf::{self, StyledLine, BODY_FONT_SIZE};
use crate::service::traits::i_service::TextServiceTrait;

pub struct TextRenderService;

impl TextRenderService {
    pub fn new() -> Self {
        TextRenderService
    }
}

impl Default for TextRenderService {
    fn default() -> Self {
        Self::new()
    }
}

impl TextServiceTrait for TextRenderService {
    fn render_text(&self, input: TextRenderInput) -> Result<TextRenderOutput, ConvertError> {
        let text = decode_text(&input.bytes)?;
        let lines: Vec<StyledLine> = pdf::wrap_text(&text, BODY_FONT_SIZE)
            .into_iter()
            .map(StyledLine::body)
            .collect();

        info!("文字檔排版：{}，共 {} 行", input.name, lines.len());
        Ok(TextRenderOutput {
            pdf_bytes: pdf::compose(&input.name, &lines),
        })
    }
}

// 解碼順序：先嚴格 UTF-8，失敗再退回 Latin-1；含 NUL 視為二進位內容
pub fn decode_text(bytes: &[u8]) -> Result<String, ConvertError> {
    if bytes.contains(&0) {
        return Err(ConvertError::EncodingError(
            "content contains NUL bytes".to_string(),
        ));
    }
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(text.to_string()),
        Err(_) => Ok(bytes.iter().map(|&b| b as char).collect()),
    }
}
