use std::io;

use crate::config::config::Mode;

// 應用配置結構體，封裝所有參數
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input: String,
    pub output: String,
    pub mode: Mode,
    pub include: Vec<String>,
    pub exclude: Option<Vec<String>>,
    pub no_progress: bool,
    pub max_size: Option<f64>,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}
