//! 公共类型（对外暴露）
use serde::{Serialize, Serializer};
use std::fmt;

/// 编码类型标签
///
/// 顺序即分派器的尝试顺序（Unknown 为兜底，不参与尝试）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    Base64,
    Hex,
    Binary,
    UrlEncoding,
    Rot13,
    Morse,
    Unknown,
}

impl Encoding {
    /// 对外输出的标签文本（与交互输出、JSON 保持一致）
    pub fn label(self) -> &'static str {
        match self {
            Encoding::Base64 => "Base64",
            Encoding::Hex => "Hex",
            Encoding::Binary => "Binary",
            Encoding::UrlEncoding => "URL Encoding",
            Encoding::Rot13 => "ROT13",
            Encoding::Morse => "Morse",
            Encoding::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Encoding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// 检测结果：(标签, 解码文本)
///
/// 不变量：`encoding == Unknown` 时 `decoded` 与原始输入完全一致。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectionResult {
    #[serde(rename = "label")]
    pub encoding: Encoding,
    pub decoded: String,
}

impl DetectionResult {
    pub(crate) fn new(encoding: Encoding, decoded: impl Into<String>) -> Self {
        Self { encoding, decoded: decoded.into() }
    }

    /// 兜底结果：原样返回输入
    pub fn unknown(input: &str) -> Self {
        Self::new(Encoding::Unknown, input)
    }

    pub fn is_unknown(&self) -> bool {
        self.encoding == Encoding::Unknown
    }

    pub fn label(&self) -> &'static str {
        self.encoding.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_encoding_label_has_space() {
        assert_eq!(Encoding::UrlEncoding.label(), "URL Encoding");
        assert_eq!(Encoding::UrlEncoding.to_string(), "URL Encoding");
    }

    #[test]
    fn serializes_label_and_decoded() {
        let r = DetectionResult::new(Encoding::Rot13, "Hello");
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v, serde_json::json!({ "label": "ROT13", "decoded": "Hello" }));
    }

    #[test]
    fn unknown_keeps_input() {
        let r = DetectionResult::unknown("abc 123");
        assert!(r.is_unknown());
        assert_eq!(r.decoded, "abc 123");
    }
}
