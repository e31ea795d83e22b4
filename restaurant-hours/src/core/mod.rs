//! 核心模块 - 配置与启动环境

pub mod config;

pub use config::Config;

use crate::utils::logger::init_logger_with_file;

/// 设置环境: 加载 `.env`，读取配置，初始化日志
pub fn setup_environment() -> Config {
    let dotenv_loaded = dotenv::dotenv().is_ok();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    if dotenv_loaded {
        tracing::debug!("Loaded environment from .env");
    }
    config
}
