//! 摩尔斯码表（固定，26 个字母 + 10 个数字 + 单词分隔）
use lazy_static::lazy_static;
use std::collections::HashMap;

/// (点划序列, 字符)
const MORSE_TABLE: &[(&str, char)] = &[
    (".-", 'A'), ("-...", 'B'), ("-.-.", 'C'), ("-..", 'D'), (".", 'E'),
    ("..-.", 'F'), ("--.", 'G'), ("....", 'H'), ("..", 'I'), (".---", 'J'),
    ("-.-", 'K'), (".-..", 'L'), ("--", 'M'), ("-.", 'N'), ("---", 'O'),
    (".--.", 'P'), ("--.-", 'Q'), (".-.", 'R'), ("...", 'S'), ("-", 'T'),
    ("..-", 'U'), ("...-", 'V'), (".--", 'W'), ("-..-", 'X'), ("-.--", 'Y'),
    ("--..", 'Z'),
    ("-----", '0'), (".----", '1'), ("..---", '2'), ("...--", '3'), ("....-", '4'),
    (".....", '5'), ("-....", '6'), ("--...", '7'), ("---..", '8'), ("----.", '9'),
    ("/", ' '), (" ", ' '),
];

lazy_static! {
    static ref MORSE_LOOKUP: HashMap<&'static str, char> = MORSE_TABLE.iter().copied().collect();
}

/// 查找单个 token；未知 token 返回 None（调用方将其丢弃）
pub(crate) fn lookup(token: &str) -> Option<char> {
    MORSE_LOOKUP.get(token).copied()
}
