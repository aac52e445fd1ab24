use codehunter_core::{detect_binary, detect_encoding, DetectionResult, Encoding};

fn check(input: &str, label: &str, decoded: &str) {
    let r = detect_encoding(input);
    assert_eq!(r.label(), label, "label for {input:?}");
    assert_eq!(r.decoded, decoded, "decoded text for {input:?}");
}

#[test]
fn base64_scenario() {
    check("SGVsbG8=", "Base64", "Hello");
}

#[test]
fn hex_scenario() {
    check("48656c6c6f", "Hex", "Hello");
}

#[test]
fn url_scenario() {
    check("Hello%20World", "URL Encoding", "Hello World");
}

#[test]
fn url_decoding_replaces_invalid_utf8() {
    check("caf%E9", "URL Encoding", "caf\u{fffd}");
    check("%ff%fe", "URL Encoding", "\u{fffd}\u{fffd}");
}

#[test]
fn rot13_scenario() {
    check("Uryyb", "ROT13", "Hello");
}

#[test]
fn morse_scenario() {
    check(".... . .-.. .-.. ---", "Morse", "HELLO");
}

#[test]
fn unknown_scenarios_return_input_unchanged() {
    check("just plain text", "Unknown", "just plain text");
    check("Unknown-no-pattern-text", "Unknown", "Unknown-no-pattern-text");
    check("", "Unknown", "");
}

#[test]
fn hex_outranks_rot13() {
    check("dead", "Hex", "\u{7ad}");
}

#[test]
fn space_separated_binary_is_claimed_by_hex_first() {
    // 去掉空格后的 0/1 串同时是偶数长度的十六进制串，且 0x00/0x01/0x10/0x11 都是合法 UTF-8，
    // 因此分派器按优先级归为 Hex；单独调用二进制检测器仍能得到原文。
    let input = "01001000 01100101 01101100 01101100 01101111";
    let r = detect_encoding(input);
    assert_eq!(r.encoding, Encoding::Hex);
    assert!(r.decoded.chars().all(|c| matches!(c, '\u{0}' | '\u{1}' | '\u{10}' | '\u{11}')));
    assert_eq!(detect_binary(input).map(|r| r.decoded), Some("Hello".to_string()));
}

#[test]
fn base64_outranks_hex_and_rot13() {
    // "MTIz" 不是十六进制；"abcd" 作为 Base64 解码得到非法 UTF-8，落到 ROT13
    check("MTIz", "Base64", "123");
    check("abcd", "ROT13", "nopq");
}

#[test]
fn rot13_needs_letter_categories_only() {
    for input in ["A\u{216b}", "a\u{93e}", "Uryyb\u{345}"] {
        assert_eq!(detect_encoding(input), DetectionResult::unknown(input));
    }
}

#[test]
fn unknown_invariant_holds_for_mixed_inputs() {
    for input in ["%0a", "/", "-.-.-.-.-", "SGk=SGk=", "ÄÖ", "hello world!"] {
        let r = detect_encoding(input);
        assert_eq!(r, DetectionResult::unknown(input));
    }
}
