use std::io;

use crate::config::config::Mode;
use crate::config::ports::{AppConfig, ConfigPort};

// 配置服務，負責選擇適當的配置適配器
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        self.config_port.get_config()
    }
}

// 預設配置適配器
pub struct DefaultConfigAdapter {
    input: String,
    output: String,
}

impl DefaultConfigAdapter {
    pub fn new(input: String, output: String) -> Self {
        DefaultConfigAdapter { input, output }
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        Ok(AppConfig {
            input: self.input.clone(),
            output: self.output.clone(),
            mode: Mode::Individual, // 個別輸出模式
            include: vec!["*".to_string()],
            exclude: None,
            no_progress: false,
            max_size: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_adapter_fills_defaults() {
        let service = ConfigService::new(Box::new(DefaultConfigAdapter::new(
            "./in".to_string(),
            "./out".to_string(),
        )));
        let config = service.get_config().unwrap();
        assert_eq!(config.input, "./in");
        assert_eq!(config.output, "./out");
        assert_eq!(config.mode, Mode::Individual);
        assert_eq!(config.include, vec!["*".to_string()]);
        assert!(config.exclude.is_none());
    }
}
