use crate::utils::{AppError, AppResult};

/// 配置 - 所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖（启动时先加载 `.env`）：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DATABASE_URL | sqlite:restaurants.db | SQLite 数据库地址 |
/// | CSV_PATH | data/rest_hours.csv | 营业时间 CSV 文件 |
/// | DB_MAX_CONNECTIONS | 5 | 连接池大小 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (未设置) | 日志目录，未设置时输出到 stderr |
///
/// # 示例
///
/// ```ignore
/// DATABASE_URL=sqlite::memory: LOG_LEVEL=debug cargo run -- open --day Sun --time 00:01
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite 数据库地址
    pub database_url: String,
    /// 营业时间 CSV 文件路径
    pub csv_path: String,
    /// 连接池最大连接数
    pub db_max_connections: u32,
    /// 日志级别: trace | debug | info | warn | error
    pub log_level: String,
    /// 日志目录 (按天滚动)
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:restaurants.db".into()),
            csv_path: std::env::var("CSV_PATH").unwrap_or_else(|_| "data/rest_hours.csv".into()),
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|p| p.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(5),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(database_url: impl Into<String>, csv_path: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.database_url = database_url.into();
        config.csv_path = csv_path.into();
        config
    }

    /// 校验配置，仅支持 SQLite
    pub fn validate(&self) -> AppResult<()> {
        if !self.database_url.starts_with("sqlite:") {
            return Err(AppError::config(format!(
                "DATABASE_URL must be a sqlite: url, got '{}'",
                self.database_url
            )));
        }
        if self.csv_path.trim().is_empty() {
            return Err(AppError::config("CSV_PATH cannot be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_sources() {
        let config = Config::with_overrides("sqlite::memory:", "/tmp/hours.csv");
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.csv_path, "/tmp/hours.csv");
        assert!(config.db_max_connections > 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_other_databases() {
        let config = Config::with_overrides("postgres://localhost/hours", "data/rest_hours.csv");
        assert!(matches!(config.validate(), Err(AppError::Config(_))));

        let config = Config::with_overrides("sqlite::memory:", " ");
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }
}
