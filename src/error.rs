use thiserror::Error;

// 轉換錯誤分類，全部為單一項目範圍：任何一項失敗都不會中斷整個批次
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("unsupported format")]
    UnsupportedFormat,

    #[error("archive corrupt: {0}")]
    ArchiveCorrupt(String),

    #[error("converter unavailable: {0}")]
    ConverterUnavailable(String),

    #[error("converter timeout after {0}s")]
    ConverterTimeout(u64),

    #[error("converter failure: {0}")]
    ConverterFailure(String),

    #[error("encoding error: {0}")]
    EncodingError(String),
}
