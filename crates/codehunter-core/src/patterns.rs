//! 预筛：各检测器的字符集正则（进程内懒编译，只读共享）
//!
//! 预筛只判断“形状”是否可能属于某种编码，真正的解码与校验在 detectors.rs 中完成。

use lazy_static::lazy_static;
use regex::Regex;
use unicode_general_category::{get_general_category, GeneralCategory};

lazy_static! {
    /// Base64 字母表（含填充符）
    pub(crate) static ref BASE64_CHARSET: Regex =
        Regex::new(r"^[A-Za-z0-9+/=]+$").expect("base64 charset pattern");
    /// 清洗后的十六进制串（小写）
    pub(crate) static ref HEX_DIGITS: Regex =
        Regex::new(r"^[0-9a-f]+$").expect("hex digits pattern");
    /// 清洗后的二进制串
    pub(crate) static ref BINARY_DIGITS: Regex =
        Regex::new(r"^[01]+$").expect("binary digits pattern");
    /// 摩尔斯码允许的字符：点、划、空格、斜杠
    pub(crate) static ref MORSE_CHARSET: Regex =
        Regex::new(r"^[.\- /]*$").expect("morse charset pattern");
}

/// Base64 形状：长度为 4 的倍数且只含 Base64 字母表字符
pub(crate) fn looks_like_base64(text: &str) -> bool {
    text.len() % 4 == 0 && BASE64_CHARSET.is_match(text)
}

/// 十六进制清洗：去掉空格与冒号并转小写
pub(crate) fn clean_hex(text: &str) -> String {
    text.chars()
        .filter(|&c| c != ' ' && c != ':')
        .flat_map(char::to_lowercase)
        .collect()
}

/// 清洗后的十六进制形状：非空、仅含 [0-9a-f]、偶数长度
pub(crate) fn looks_like_hex(cleaned: &str) -> bool {
    cleaned.len() % 2 == 0 && HEX_DIGITS.is_match(cleaned)
}

/// 二进制清洗：只去掉空格（冒号等其它分隔符不接受）
pub(crate) fn clean_binary(text: &str) -> String {
    text.chars().filter(|&c| c != ' ').collect()
}

/// 清洗后的二进制形状：非空、仅含 0/1、长度为 8 的倍数
pub(crate) fn looks_like_binary(cleaned: &str) -> bool {
    cleaned.len() % 8 == 0 && BINARY_DIGITS.is_match(cleaned)
}

/// 摩尔斯形状（空串也视为形状合法，由解码结果非空的条件再过滤）
pub(crate) fn looks_like_morse(text: &str) -> bool {
    MORSE_CHARSET.is_match(text)
}

/// ROT13 前提：非空且全部为字母
///
/// 字母指通用类别 Lu/Ll/Lt/Lm/Lo；字母数字（Nl）与组合记号不算。
pub(crate) fn is_all_alphabetic(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_letter)
}

fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_shape_requires_multiple_of_four() {
        assert!(looks_like_base64("SGVsbG8="));
        assert!(!looks_like_base64("SGVsbG8"));
        assert!(!looks_like_base64(""));
        assert!(!looks_like_base64("SGV sbG8"));
    }

    #[test]
    fn hex_cleaning_drops_separators_and_case() {
        assert_eq!(clean_hex("48:65 6C"), "48656c");
        assert!(looks_like_hex(&clean_hex("48:65 6C")));
        assert!(!looks_like_hex("486"));
        assert!(!looks_like_hex(""));
        assert!(!looks_like_hex("zz"));
    }

    #[test]
    fn binary_cleaning_keeps_colons() {
        assert_eq!(clean_binary("0100 1000"), "01001000");
        assert!(looks_like_binary("01001000"));
        assert!(!looks_like_binary(&clean_binary("0100:1000")));
        assert!(!looks_like_binary("0100100"));
    }

    #[test]
    fn morse_charset_rejects_letters() {
        assert!(looks_like_morse(".... . / -"));
        assert!(!looks_like_morse(".... x"));
    }

    #[test]
    fn alphabetic_accepts_non_ascii_letters() {
        assert!(is_all_alphabetic("Straße"));
        assert!(!is_all_alphabetic("Hello World"));
        assert!(!is_all_alphabetic(""));
    }

    #[test]
    fn alphabetic_excludes_letter_numbers_and_marks() {
        // Ⅻ 为 Nl，ा 为 Mc，U+0345 为 Mn：均不是字母类别
        assert!(!is_all_alphabetic("A\u{216b}"));
        assert!(!is_all_alphabetic("a\u{93e}"));
        assert!(!is_all_alphabetic("Uryyb\u{345}"));
        // ǅ 为 Lt，ʰ 为 Lm，中 为 Lo
        assert!(is_all_alphabetic("\u{1c5}\u{2b0}\u{4e2d}"));
    }
}
