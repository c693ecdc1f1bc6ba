use clap::{Parser, ValueEnum};
use std::io;
use std::path::Path;

#[derive(Parser, Clone)]
#[command(
    name = "file_to_pdf",
    about = "將文件或目錄批次轉換為 PDF",
    long_about = "一個將 Word 文件（.doc/.docx）、純文字檔（.txt）與包含上述檔案的 ZIP 壓縮檔批次轉換為 PDF 的工具。\n支援個別輸出每個 PDF，或將全部成功結果打包為單一 ZIP 下載檔。\n不帶參數執行即進入互動模式。使用 `--help` 查看詳細用法。",
    arg_required_else_help = true
)]
pub struct Cli {
    pub input: String,
    #[arg(short, long, default_value = "output")]
    pub output: String,
    #[arg(long, default_value = "individual")]
    pub mode: Mode,
    #[arg(long, default_value = "*", value_delimiter = ',')]
    pub include: Vec<String>,
    #[arg(long, value_delimiter = ',')]
    pub exclude: Option<Vec<String>>,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    #[arg(long)]
    pub max_size: Option<f64>,
    #[arg(long, default_value = "info", value_parser = ["info", "warn", "error"])]
    pub log_level: String,
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Debug)]
pub enum Mode {
    /// 每個成功轉換的 PDF 個別寫入輸出目錄
    Individual,
    /// 所有成功轉換的 PDF 打包為單一 ZIP
    Packaged,
}

pub fn validate_input_path(input: &str) -> io::Result<&Path> {
    let path = Path::new(input);
    if !path.exists() {
        log::error!("輸入路徑不存在：{}", input);
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("輸入路徑 '{}' 不存在", input),
        ));
    }
    Ok(path)
}

pub fn is_valid_pattern(pattern: &str) -> bool {
    let invalid_chars = ['/', '\\', ':', '?', '"', '<', '>', '|'];
    !pattern.is_empty() && !pattern.contains(&invalid_chars[..])
}

pub fn validate_file_patterns(include: &[String], exclude: &Option<Vec<String>>) -> io::Result<()> {
    for pattern in include {
        if !is_valid_pattern(pattern) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("無效的包含模式: {}", pattern),
            ));
        }
    }
    if let Some(exclude_patterns) = exclude {
        for pattern in exclude_patterns {
            if !is_valid_pattern(pattern) {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("無效的排除模式: {}", pattern),
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_pattern() {
        assert!(is_valid_pattern("*.txt"));
        assert!(!is_valid_pattern(""));
        assert!(!is_valid_pattern("a/b"));
        assert!(!is_valid_pattern("a?b"));
    }

    #[test]
    fn test_validate_file_patterns() {
        let include = vec!["*.txt".to_string()];
        assert!(validate_file_patterns(&include, &None).is_ok());

        let bad_exclude = Some(vec!["a|b".to_string()]);
        assert!(validate_file_patterns(&include, &bad_exclude).is_err());
    }

    #[test]
    fn test_validate_input_path_missing() {
        assert!(validate_input_path("/definitely/not/here").is_err());
    }
}
