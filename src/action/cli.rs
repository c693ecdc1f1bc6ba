use std::fs;
use std::io;
use std::path::Path;

use clap::Parser;
use log::{info, warn};

use crate::action::interactive::process_interactive_mode;
use crate::config::config::{validate_file_patterns, validate_input_path, Cli, Mode};
use crate::config::ports::{AppConfig, ConfigPort};
use crate::facade::conversion_facade::ConversionFacade;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::ConversionInput;
use crate::service::config_service::ConfigService;
use crate::utils::file::{build_batch, collect_files};
use crate::utils::utils::{create_progress_bar, create_regex_sets, format_file_size, setup_logging};
use crate::utils::zip::{package_file_name, package_results};

pub fn process_args(args: Vec<String>) -> io::Result<String> {
    if args.len() == 1 {
        process_interactive_mode()
    } else {
        process_cli_mode()
    }
}

pub fn process_cli_mode() -> io::Result<String> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level)?;

    let config_port: Box<dyn ConfigPort> = Box::new(CliConfigAdapter::new(cli));
    let config_service = ConfigService::new(config_port);
    let config = config_service.get_config()?;

    run_conversion(&config)
}

/// 完整轉換流程：收集檔案、組批次、執行管線、寫出結果
pub fn run_conversion(config: &AppConfig) -> io::Result<String> {
    let input_path = validate_input_path(&config.input)?;
    let (include_set, exclude_set) = create_regex_sets(
        &config.include,
        config.exclude.as_deref().unwrap_or(&[]),
    );

    let files = collect_files(input_path, &include_set, &exclude_set, config.max_size)?;
    if files.is_empty() {
        warn!("無符合條件的檔案可處理");
        return Ok(config.output.clone());
    }

    let items = build_batch(input_path, &files)?;
    info!(
        "開始批次轉換，輸入路徑：{}，輸出目錄：{}，共 {} 個檔案",
        config.input,
        config.output,
        items.len()
    );

    let facade = ConversionFacade::with_default_services();
    let output = facade.execute_conversion(ConversionInput { items });

    fs::create_dir_all(&config.output)?;
    write_results(config, &output.results)?;

    Ok(config.output.clone())
}

fn write_results(
    config: &AppConfig,
    results: &[crate::models::conversion::ConversionResult],
) -> io::Result<()> {
    let converted = results.iter().filter(|r| r.is_ok()).count();
    if converted == 0 {
        warn!("沒有任何檔案成功轉換，略過輸出");
        return Ok(());
    }

    match config.mode {
        Mode::Individual => {
            let pb = create_progress_bar(converted as u64, config.no_progress);
            for result in results {
                if let Some(ref pdf_bytes) = result.pdf_bytes {
                    pb.set_message(format!("寫入：{}", result.output_name));
                    fs::write(Path::new(&config.output).join(&result.output_name), pdf_bytes)?;
                    info!(
                        "生成 PDF：{}/{}，大小：{}",
                        config.output,
                        result.output_name,
                        format_file_size(pdf_bytes.len())
                    );
                    pb.inc(1);
                }
            }
            pb.finish_with_message("寫入完成");
        }
        Mode::Packaged => {
            let zip_buffer = package_results(results)?;
            let zip_name = package_file_name();
            fs::write(Path::new(&config.output).join(&zip_name), &zip_buffer)?;
            info!(
                "生成下載 ZIP：{}/{}，大小：{}",
                config.output,
                zip_name,
                format_file_size(zip_buffer.len())
            );
        }
    }

    info!("批次結果：{}/{} 個檔案轉換成功", converted, results.len());
    Ok(())
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        // 驗證輸入路徑
        validate_input_path(&self.cli.input)?;
        // 驗證檔案模式
        validate_file_patterns(&self.cli.include, &self.cli.exclude)?;

        Ok(AppConfig {
            input: self.cli.input.clone(),
            output: self.cli.output.clone(),
            mode: self.cli.mode,
            include: self.cli.include.clone(),
            exclude: self.cli.exclude.clone(),
            no_progress: self.cli.no_progress,
            max_size: self.cli.max_size,
        })
    }
}
