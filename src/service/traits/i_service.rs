use crate::error::ConvertError;
use crate::models::archive::{ArchiveExpandInput, ArchiveExpandOutput};
use crate::models::office::{OfficeRenderInput, OfficeRenderOutput};
use crate::models::text::{TextRenderInput, TextRenderOutput};

// Archive 服務接口，負責展開壓縮檔
pub trait ArchiveServiceTrait: Send + Sync {
    /// 將 ZIP 位元組展開為依封存順序排列的檔案項目（單層，不遞迴）
    /// # 參數
    /// - input: 封存檔名稱與位元組
    /// # 回傳
    /// - 成功時返回封存內的檔案項目，無法開啟時返回 ArchiveCorrupt
    fn expand_archive(&self, input: ArchiveExpandInput) -> Result<ArchiveExpandOutput, ConvertError>;
}

// Office 服務接口，負責 DOC/DOCX 轉 PDF
pub trait OfficeServiceTrait: Send + Sync {
    /// 將 Office 文件位元組轉換為 PDF 位元組
    /// # 參數
    /// - input: 文件名稱、位元組與格式
    /// # 回傳
    /// - 成功時返回 PDF 位元組，失敗時返回對應的轉換錯誤
    fn render_office(&self, input: OfficeRenderInput) -> Result<OfficeRenderOutput, ConvertError>;
}

// Text 服務接口，負責純文字轉 PDF
pub trait TextServiceTrait: Send + Sync {
    /// 將純文字位元組排版為 PDF 位元組
    /// # 參數
    /// - input: 文字檔名稱與位元組
    /// # 回傳
    /// - 成功時返回 PDF 位元組，解碼失敗時返回 EncodingError
    fn render_text(&self, input: TextRenderInput) -> Result<TextRenderOutput, ConvertError>;
}
