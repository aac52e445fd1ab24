//! 文本编码识别与解码核心库
//!
//! 设计要点：
//! - 六个相互独立的检测器（Base64、Hex、Binary、URL、ROT13、Morse），均为纯函数。
//! - 分派器按固定优先级依次尝试，返回首个命中；全部不命中时返回 Unknown 与原文。
//! - 检测不产生错误：不匹配就是 `None`，错误类型只用于配置加载等外围流程。

mod config;
mod detect;
mod detectors;
mod error;
mod morse;
mod patterns;
mod types;

pub use config::{OutputFormat, SessionConfig, DEFAULT_CONFIG_PATH};
pub use detect::{detect_all, detect_encoding, redecode};
pub use detectors::{
    detect_base64, detect_binary, detect_hex, detect_morse, detect_rot13, detect_url_encoding,
    Detector, DETECTORS,
};
pub use error::{CodehunterError, Result};
pub use types::{DetectionResult, Encoding};
