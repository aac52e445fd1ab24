//! 会话配置（TOML）
//!
//! 只影响交互外壳（退出词、是否提示二次解码、输出格式），检测顺序不可配置。
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{CodehunterError, Result};

/// 默认配置文件路径（不存在时使用内置默认值）
pub const DEFAULT_CONFIG_PATH: &str = "./codehunter.toml";

/// 结果输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// 交互会话配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// 退出词（大小写不敏感）
    pub quit_words: Vec<String>,
    /// 命中后是否询问“再解码一次”
    pub offer_redecode: bool,
    pub output: OutputFormat,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            quit_words: vec!["quit".into(), "exit".into(), "q".into()],
            offer_redecode: true,
            output: OutputFormat::Text,
        }
    }
}

impl SessionConfig {
    /// 判断输入是否为退出词
    pub fn is_quit_word(&self, input: &str) -> bool {
        self.quit_words.iter().any(|w| w.eq_ignore_ascii_case(input))
    }

    /// 从 TOML 文本解析并校验
    pub fn from_toml_str(txt: &str, path: &Path) -> Result<Self> {
        let cfg: SessionConfig =
            toml::from_str(txt).map_err(|source| CodehunterError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// 加载配置：
    /// - 显式路径：文件必须存在
    /// - 未指定路径：默认路径存在则读取，否则使用内置默认值
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let p = PathBuf::from(DEFAULT_CONFIG_PATH);
                if !p.is_file() {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
                p
            }
        };
        let txt =
            std::fs::read_to_string(&path).map_err(|source| CodehunterError::ConfigRead {
                path: path.clone(),
                source,
            })?;
        let cfg = Self::from_toml_str(&txt, &path)?;
        debug!(?path, "config loaded");
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        if self.quit_words.iter().any(|w| w.trim().is_empty()) {
            return Err(CodehunterError::InvalidConfig(
                "quit_words must not contain empty entries".into(),
            ));
        }
        Ok(())
    }
}
