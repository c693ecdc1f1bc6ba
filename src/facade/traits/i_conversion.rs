use crate::models::conversion::{ConversionInput, ConversionOutput};

// Facade 接口，負責協調整個批次的轉換流程
pub trait ConversionFacadeTrait: Send + Sync {
    /// 依序處理批次中的每個項目：展開封存、逐項轉換、收集結果
    /// # 參數
    /// - input: 批次輸入項目（依序）
    /// # 回傳
    /// - 批次結果：每個輸入項目至少對應一筆結果，單項失敗不中斷批次
    fn execute_conversion(&self, input: ConversionInput) -> ConversionOutput;
}
