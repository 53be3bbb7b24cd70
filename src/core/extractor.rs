use crate::core::rules::PREFECTURES;
use regex::Regex;
use std::sync::LazyLock;

/// 常見的建築物／店名關鍵字
pub const BUILDING_KEYWORDS: [&str; 8] =
    ["店", "ビル", "マンション", "アパート", "ホテル", "学校", "病院", "公園"];

static MUNICIPALITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([^\s\x{3000}]+?[市区町村郡])").expect("valid municipality pattern")
});

fn is_address_break(c: char) -> bool {
    c.is_whitespace() || c == '(' || c == '（'
}

/// Pulls the address out of text that may also carry a building or shop name.
///
/// Starts at the first prefecture found and stops at the first space or opening
/// parenthesis. Without a prefecture, the first municipality token is returned; with
/// neither, the text comes back unchanged.
pub fn extract_address(text: &str) -> String {
    for pref in PREFECTURES {
        if let Some(idx) = text.find(pref) {
            let tail = &text[idx..];
            let end = tail.find(is_address_break).unwrap_or(tail.len());
            return tail[..end].to_string();
        }
    }

    if let Some(caps) = MUNICIPALITY_PATTERN.captures(text) {
        return caps[1].to_string();
    }

    text.to_string()
}

/// Suggests a cleaner input when the text looks like a building name rather than an address.
pub fn suggest_address_format(text: &str) -> Option<String> {
    if !BUILDING_KEYWORDS.iter().any(|keyword| text.contains(keyword)) {
        return None;
    }

    let extracted = extract_address(text);
    if extracted != text {
        Some(format!("住所部分のみの入力を推奨 / Try the address part only: {}", extracted))
    } else {
        Some("番地までの住所を入力してください / Enter a full street address, e.g. 東京都渋谷区○○町1-2-3".to_string())
    }
}
