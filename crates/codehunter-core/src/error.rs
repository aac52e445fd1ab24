//! 错误类型（仅配置加载等外围流程使用；检测本身从不报错）
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodehunterError {
    /// 读取配置文件失败
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 配置文件 TOML 解析失败
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// 配置内容不合法
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CodehunterError>;
