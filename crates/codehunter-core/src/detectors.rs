//! 检测器集合（每种编码一个纯函数）
//!
//! 约定：
//! - 输入只读借用，不做任何修改。
//! - 形状不符、解码失败、校验不过一律返回 `None`（软否定），从不返回错误。
//! - 命中时返回 `Some(DetectionResult)`，标签固定为该检测器对应的编码。
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use percent_encoding::percent_decode_str;
use tracing::trace;

use crate::morse;
use crate::patterns::{
    clean_binary, clean_hex, is_all_alphabetic, looks_like_base64, looks_like_binary,
    looks_like_hex, looks_like_morse,
};
use crate::types::{DetectionResult, Encoding};

/// 检测器函数签名
pub type Detector = fn(&str) -> Option<DetectionResult>;

/// 固定优先级的检测器链：Base64 → Hex → Binary → URL → ROT13 → Morse
///
/// 顺序决定歧义输入的归属，不可配置。
pub static DETECTORS: &[(Encoding, Detector)] = &[
    (Encoding::Base64, detect_base64),
    (Encoding::Hex, detect_hex),
    (Encoding::Binary, detect_binary),
    (Encoding::UrlEncoding, detect_url_encoding),
    (Encoding::Rot13, detect_rot13),
    (Encoding::Morse, detect_morse),
];

/// Base64：严格解码 + UTF-8 严格校验 + 重新编码必须与输入逐字节一致
pub fn detect_base64(text: &str) -> Option<DetectionResult> {
    if !looks_like_base64(text) {
        return None;
    }
    let bytes = match STANDARD.decode(text) {
        Ok(b) => b,
        Err(e) => {
            trace!(error = %e, "base64: decode rejected");
            return None;
        }
    };
    // 非规范编码（例如填充位不为零）解码后再编码会得到不同的串
    if STANDARD.encode(&bytes) != text {
        trace!("base64: re-encoding differs from input");
        return None;
    }
    let decoded = String::from_utf8(bytes).ok()?;
    Some(DetectionResult::new(Encoding::Base64, decoded))
}

/// 十六进制：去空格/冒号、转小写后按字节对解码，要求严格 UTF-8
pub fn detect_hex(text: &str) -> Option<DetectionResult> {
    let cleaned = clean_hex(text);
    if !looks_like_hex(&cleaned) {
        return None;
    }
    let bytes = match hex::decode(&cleaned) {
        Ok(b) => b,
        Err(e) => {
            trace!(error = %e, "hex: decode rejected");
            return None;
        }
    };
    let decoded = String::from_utf8(bytes).ok()?;
    Some(DetectionResult::new(Encoding::Hex, decoded))
}

/// 二进制：每 8 位直接映射为一个码点（0..=255），不做多字节 UTF-8 组合
///
/// 结果中出现除 `\n` `\r` `\t` 外的控制字符则视为不可读，拒绝。
pub fn detect_binary(text: &str) -> Option<DetectionResult> {
    let cleaned = clean_binary(text);
    if !looks_like_binary(&cleaned) {
        return None;
    }
    let mut decoded = String::with_capacity(cleaned.len() / 8);
    for group in cleaned.as_bytes().chunks(8) {
        let bits = std::str::from_utf8(group).ok()?;
        let ch = char::from(u8::from_str_radix(bits, 2).ok()?);
        if is_control(ch) && !matches!(ch, '\n' | '\r' | '\t') {
            trace!(code_point = ch as u32, "binary: non-printable group");
            return None;
        }
        decoded.push(ch);
    }
    Some(DetectionResult::new(Encoding::Binary, decoded))
}

/// URL 编码：必须含 `%`；`+` 保持原样；解码后须有变化且不含控制字符
///
/// 非法转义（如 `%zz`）原样保留；解码字节中的非法 UTF-8 序列替换为 U+FFFD。
pub fn detect_url_encoding(text: &str) -> Option<DetectionResult> {
    if !text.contains('%') {
        return None;
    }
    let decoded = percent_decode_str(text).decode_utf8_lossy();
    if decoded == text || decoded.chars().any(is_control) {
        return None;
    }
    Some(DetectionResult::new(Encoding::UrlEncoding, decoded.into_owned()))
}

/// ROT13：输入须全为字母；变换后与原文相同则不算命中
pub fn detect_rot13(text: &str) -> Option<DetectionResult> {
    if !is_all_alphabetic(text) {
        return None;
    }
    let rotated = rot13(text);
    if rotated == text {
        return None;
    }
    Some(DetectionResult::new(Encoding::Rot13, rotated))
}

/// 摩尔斯：按单个空格切分查表，未知 token 直接丢弃
///
/// 解码结果须非空且至少含一个字母或数字。
pub fn detect_morse(text: &str) -> Option<DetectionResult> {
    if !looks_like_morse(text) {
        return None;
    }
    let decoded: String = text.split(' ').filter_map(morse::lookup).collect();
    if decoded.is_empty() || !decoded.chars().any(char::is_alphanumeric) {
        return None;
    }
    Some(DetectionResult::new(Encoding::Morse, decoded))
}

/// 凯撒 13 位替换，大小写分别处理；非 ASCII 字母原样保留
pub(crate) fn rot13(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'a'..='z' => (((c as u8 - b'a') + 13) % 26 + b'a') as char,
            'A'..='Z' => (((c as u8 - b'A') + 13) % 26 + b'A') as char,
            _ => c,
        })
        .collect()
}

fn is_control(c: char) -> bool {
    (c as u32) < 32
}
