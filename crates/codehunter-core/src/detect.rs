//! 分派主流程：按固定优先级依次尝试检测器，返回首个命中
use tracing::debug;

use crate::detectors::DETECTORS;
use crate::types::DetectionResult;

/// 检测并解码输入文本
///
/// 按 Base64 → Hex → Binary → URL → ROT13 → Morse 的顺序尝试，返回第一个命中；
/// 全部不命中时返回 `Unknown` 且解码文本为原始输入。此函数不会失败。
pub fn detect_encoding(text: &str) -> DetectionResult {
    for (encoding, detector) in DETECTORS {
        if let Some(result) = detector(text) {
            debug!(%encoding, input_len = text.len(), "detector matched");
            return result;
        }
    }
    debug!(input_len = text.len(), "no detector matched");
    DetectionResult::unknown(text)
}

/// 列出所有命中的检测器结果（按优先级排序），便于人工排查歧义输入
///
/// 首个元素（若存在）与 `detect_encoding` 的结果一致。
pub fn detect_all(text: &str) -> Vec<DetectionResult> {
    DETECTORS
        .iter()
        .filter_map(|(_, detector)| detector(text))
        .collect()
}

/// 对上一次的解码结果再做一次检测（仅一层，不递归）
///
/// `previous` 为 Unknown，或再次检测后文本没有变化时返回 `None`。
pub fn redecode(previous: &DetectionResult) -> Option<DetectionResult> {
    if previous.is_unknown() {
        return None;
    }
    let next = detect_encoding(&previous.decoded);
    if next.decoded == previous.decoded {
        debug!("re-decode produced no change");
        return None;
    }
    Some(next)
}
