use crate::error::ConvertError;
use crate::models::file::InputItem;
use std::path::Path;

#[derive(Clone)]
pub struct ConversionInput {
    pub items: Vec<InputItem>,
}

#[derive(Debug)]
pub struct ConversionOutput {
    pub results: Vec<ConversionResult>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionStatus {
    Ok,
    Failed,
}

// 每個輸入項目對應一筆（封存檔對應多筆）轉換結果，建立後不再修改
#[derive(Debug)]
pub struct ConversionResult {
    pub original_name: String,
    pub output_name: String,
    pub status: ConversionStatus,
    pub error_reason: Option<String>,
    pub pdf_bytes: Option<Vec<u8>>,
}

impl ConversionResult {
    pub fn ok(original_name: impl Into<String>, pdf_bytes: Vec<u8>) -> Self {
        let original_name = original_name.into();
        let output_name = default_output_name(&original_name);
        ConversionResult {
            original_name,
            output_name,
            status: ConversionStatus::Ok,
            error_reason: None,
            pdf_bytes: Some(pdf_bytes),
        }
    }

    pub fn failed(original_name: impl Into<String>, error: &ConvertError) -> Self {
        let original_name = original_name.into();
        let output_name = default_output_name(&original_name);
        ConversionResult {
            original_name,
            output_name,
            status: ConversionStatus::Failed,
            error_reason: Some(error.to_string()),
            pdf_bytes: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == ConversionStatus::Ok
    }
}

// 輸出檔名一律攤平為主檔名 + .pdf，封存內的目錄層級不保留
pub fn default_output_name(original_name: &str) -> String {
    let stem = Path::new(original_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    format!("{}.pdf", stem)
}
