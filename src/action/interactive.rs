use dialoguer::{Confirm, Input, Select};
use std::io;
use std::path::Path;

use crate::action::cli::run_conversion;
use crate::config::config::Mode;
use crate::config::ports::{AppConfig, ConfigPort};
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::utils::utils::setup_logging;

pub fn process_interactive_mode() -> io::Result<String> {
    println!("=== 歡迎使用互動模式 ===");
    let use_default_config = get_default_config_option()?;
    let input = get_input_path()?;
    let output = get_output_path()?;

    let config_port: Box<dyn ConfigPort> = if use_default_config {
        println!("使用預設配置：個別輸出模式，包含所有檔案");
        setup_logging("info")?;
        Box::new(DefaultConfigAdapter::new(input, output))
    } else {
        Box::new(InteractiveConfigAdapter::new(input, output))
    };

    let config_service = ConfigService::new(config_port);
    let config = config_service.get_config()?;

    run_conversion(&config)
}

pub fn get_default_config_option() -> io::Result<bool> {
    Confirm::new()
        .with_prompt("是否使用預設配置？（個別輸出模式，僅需指定輸入和輸出路徑）")
        .default(true)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("預設配置選擇失敗: {}", e)))
}

pub fn get_input_path() -> io::Result<String> {
    Input::new()
        .with_prompt("請輸入檔案或目錄路徑（例如：./report.docx 或 ./mydir）")
        .validate_with(|input: &String| -> Result<(), String> {
            if Path::new(input).exists() {
                Ok(())
            } else {
                Err(format!("路徑 '{}' 不存在", input))
            }
        })
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

pub fn get_output_path() -> io::Result<String> {
    Input::new()
        .with_prompt("輸入輸出目錄（例如：./output，預設為 output）")
        .default("output".to_string())
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

pub fn get_output_mode() -> io::Result<Mode> {
    let selection = Select::new()
        .with_prompt("選擇輸出模式（使用方向鍵選擇，按 Enter 確認）")
        .items(&[
            "個別 - 每個成功的 PDF 個別寫入輸出目錄",
            "打包 - 所有成功的 PDF 打包為單一 ZIP",
        ])
        .default(0)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("輸出模式選擇失敗: {}", e)))?;
    Ok(if selection == 1 {
        Mode::Packaged
    } else {
        Mode::Individual
    })
}

pub fn get_file_patterns() -> io::Result<(Vec<String>, Option<Vec<String>>)> {
    let include = Input::new()
        .with_prompt("輸入包含模式（例如：*.docx,*.txt，預設為 *）")
        .default("*".to_string())
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("包含模式輸入失敗: {}", e)))?
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect::<Vec<String>>();

    let exclude = Input::new()
        .with_prompt("輸入排除模式（例如：*.bak，預設為空）")
        .default("".to_string())
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("排除模式輸入失敗: {}", e)))?
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect::<Vec<String>>();

    Ok((include, if exclude.is_empty() { None } else { Some(exclude) }))
}

pub fn get_max_size_option() -> io::Result<Option<f64>> {
    Ok(None)
}

pub fn get_no_progress_option() -> io::Result<bool> {
    Ok(false)
}

pub fn get_log_level_option() -> io::Result<String> {
    Ok("info".to_string())
}

// 互動配置適配器
pub struct InteractiveConfigAdapter {
    input: String,
    output: String,
}

impl InteractiveConfigAdapter {
    pub fn new(input: String, output: String) -> Self {
        InteractiveConfigAdapter { input, output }
    }
}

impl ConfigPort for InteractiveConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        let mode = get_output_mode()?;
        let (include, exclude) = get_file_patterns()?;
        let no_progress = get_no_progress_option()?;
        let max_size = get_max_size_option()?;
        let log_level = get_log_level_option()?;

        setup_logging(&log_level)?;

        Ok(AppConfig {
            input: self.input.clone(),
            output: self.output.clone(),
            mode,
            include,
            exclude,
            no_progress,
            max_size,
        })
    }
}
