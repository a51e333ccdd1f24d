use thiserror::Error;

use super::ConfigError;
use crate::store::StoreError;

/// 启动和运行期间的致命错误
///
/// Request-scoped failures are `AppError`s and never reach this type.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("存储错误: {0}")]
    Store(#[from] StoreError),

    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),
}

/// 服务器 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
