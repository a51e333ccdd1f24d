use std::path::{Component, Path, PathBuf};

use clap::Parser;
use thiserror::Error;

/// Top-level entries of the source tree the data directory may not live in
const PROTECTED_DIRS: &[&str] = &["src", "shared", "coffee-server", "target"];

/// Lowest port an unprivileged server may bind
const MIN_PORT: u16 = 1024;

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过命令行参数或环境变量设置 (`.env` 会先被加载)：
///
/// | 参数 | 环境变量 | 默认值 | 说明 |
/// |------|----------|--------|------|
/// | --port | HTTP_PORT | 8080 | HTTP 服务端口 (>= 1024) |
/// | --dir | DATA_DIR | data | 数据目录 |
/// | --log-level | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | --log-json | LOG_JSON | false | JSON 格式日志 |
/// | --log-dir | LOG_DIR | - | 日志文件目录 (按天滚动) |
/// | --environment | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// DATA_DIR=/srv/coffee HTTP_PORT=9090 cargo run -p coffee-server
/// cargo run -p coffee-server -- --port 9090 --dir ./data
/// ```
#[derive(Debug, Clone, Parser)]
#[command(name = "coffee-server", version, about = "Coffee shop inventory, menu and order service")]
pub struct Config {
    /// HTTP API 服务端口
    #[arg(long = "port", env = "HTTP_PORT", default_value_t = 8080)]
    pub http_port: u16,

    /// 数据目录 (inventory.json, menu_items.json, orders.json)
    #[arg(long = "dir", env = "DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// 日志级别
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// JSON 格式日志
    #[arg(long, env = "LOG_JSON")]
    pub log_json: bool,

    /// 日志文件目录
    #[arg(long, env = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// 运行环境: development | staging | production
    #[arg(long, env = "ENVIRONMENT", default_value = "development")]
    pub environment: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("port {0} is reserved, use 1024 or above")]
    PortTooLow(u16),

    #[error("data directory cannot be empty")]
    EmptyDataDir,

    #[error("data directory {0} cannot contain '..'")]
    ParentTraversal(PathBuf),

    #[error("data directory cannot be the working directory")]
    WorkingDirectory,

    #[error("data directory cannot be inside the source tree ({0})")]
    SourceTree(String),

    #[error("cannot resolve working directory: {0}")]
    Io(#[from] std::io::Error),
}

impl Config {
    /// Configuration with defaults for everything but port and data directory
    ///
    /// 常用于测试场景
    pub fn with_overrides(data_dir: impl Into<PathBuf>, http_port: u16) -> Self {
        Self {
            http_port,
            data_dir: data_dir.into(),
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
            environment: "development".into(),
        }
    }

    /// Validate against the current working directory
    pub fn validate(&self) -> Result<(), ConfigError> {
        let cwd = std::env::current_dir()?;
        self.validate_in(&cwd)
    }

    /// Validate with an explicit working directory
    pub fn validate_in(&self, cwd: &Path) -> Result<(), ConfigError> {
        if self.http_port < MIN_PORT {
            return Err(ConfigError::PortTooLow(self.http_port));
        }

        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyDataDir);
        }
        if self
            .data_dir
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(ConfigError::ParentTraversal(self.data_dir.clone()));
        }

        let resolved: PathBuf = cwd
            .join(&self.data_dir)
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect();
        let cwd: PathBuf = cwd.components().filter(|c| !matches!(c, Component::CurDir)).collect();

        if resolved == cwd {
            return Err(ConfigError::WorkingDirectory);
        }
        if let Some(dir) = PROTECTED_DIRS.iter().find(|dir| resolved.starts_with(cwd.join(dir))) {
            return Err(ConfigError::SourceTree((*dir).to_string()));
        }

        Ok(())
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cwd() -> PathBuf {
        PathBuf::from("/srv/hot-coffee")
    }

    #[test]
    fn test_defaults() {
        let config = Config::parse_from(["coffee-server"]);
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert!(config.validate_in(&cwd()).is_ok());
    }

    #[test]
    fn test_cli_flags() {
        let config = Config::parse_from(["coffee-server", "--port", "9090", "--dir", "store"]);
        assert_eq!(config.http_port, 9090);
        assert_eq!(config.data_dir, PathBuf::from("store"));
    }

    #[test]
    fn test_port_below_1024_is_rejected() {
        let config = Config::with_overrides("data", 80);
        assert!(matches!(config.validate_in(&cwd()), Err(ConfigError::PortTooLow(80))));
        assert!(Config::with_overrides("data", 1024).validate_in(&cwd()).is_ok());
    }

    #[test]
    fn test_data_dir_rules() {
        let check = |dir: &str| Config::with_overrides(dir, 8080).validate_in(&cwd());

        assert!(matches!(check(""), Err(ConfigError::EmptyDataDir)));
        assert!(matches!(check("../elsewhere"), Err(ConfigError::ParentTraversal(_))));
        assert!(matches!(check("data/../.."), Err(ConfigError::ParentTraversal(_))));
        assert!(matches!(check("."), Err(ConfigError::WorkingDirectory)));
        assert!(matches!(check("./"), Err(ConfigError::WorkingDirectory)));
        assert!(matches!(check("/srv/hot-coffee"), Err(ConfigError::WorkingDirectory)));
        assert!(matches!(check("src"), Err(ConfigError::SourceTree(_))));
        assert!(matches!(check("./shared/data"), Err(ConfigError::SourceTree(_))));
        assert!(matches!(check("target/tmp"), Err(ConfigError::SourceTree(_))));
        assert!(matches!(check("/srv/hot-coffee/coffee-server"), Err(ConfigError::SourceTree(_))));

        assert!(check("data").is_ok());
        assert!(check("./data/store").is_ok());
        assert!(check("/var/lib/coffee").is_ok());
        assert!(check("srcdata").is_ok());
    }
}
