use crate::core::rules::RuleSet;
use crate::domain::model::ParsedAddress;
use crate::domain::ports::RoadWidthSource;
use regex::Regex;
use std::sync::LazyLock;

pub const WHITELIST_ROAD_WIDTH: f64 = 12.0;
pub const RESTRICTED_ROAD_WIDTH: f64 = 2.5;

static CITY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?[市区町村])").expect("valid city pattern"));

static TOWN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)[0-9０-９一二三四五六七八九十丁目番地]").expect("valid town pattern")
});

/// 去除所有空白（含全形空白）並轉小寫
pub fn normalize(address: &str) -> String {
    address
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn contains_any(text: &str, keywords: &[String]) -> bool {
    keywords
        .iter()
        .any(|keyword| text.contains(&keyword.to_lowercase()))
}

/// Splits what is left after the prefecture into `(city, town)`.
fn split_city_town(remainder: &str) -> (String, String) {
    let (city, after_city) = match CITY_PATTERN.captures(remainder) {
        Some(caps) => {
            let city = &caps[1];
            (city.to_string(), &remainder[city.len()..])
        }
        None => (String::new(), remainder),
    };

    let town = match TOWN_PATTERN.captures(after_city) {
        Some(caps) => caps[1].to_string(),
        None => after_city.to_string(),
    };

    (city, town)
}

/// Classifies a raw address into zone flags and an assumed road width.
///
/// Whitelisted addresses get 12.0 m even when a restricted keyword also appears;
/// restricted ones get 2.5 m; everything else takes its width from `widths`.
/// Never fails, even on empty input.
pub fn classify<W>(address: &str, rules: &RuleSet, widths: &mut W) -> ParsedAddress
where
    W: RoadWidthSource + ?Sized,
{
    let normalized = normalize(address);

    let mut prefecture = String::new();
    let mut remainder = normalized.clone();
    for pref in &rules.prefectures {
        let needle = pref.to_lowercase();
        if normalized.contains(&needle) {
            prefecture = pref.clone();
            remainder = normalized.replacen(&needle, "", 1);
            break;
        }
    }

    let (city, town) = split_city_town(&remainder);

    let in_restricted = contains_any(&normalized, &rules.restricted_zones);
    let in_whitelist = contains_any(&normalized, &rules.whitelist_zones);

    let road_width = if in_whitelist {
        WHITELIST_ROAD_WIDTH
    } else if in_restricted {
        RESTRICTED_ROAD_WIDTH
    } else {
        widths.sample_width().max(0.0)
    };

    tracing::debug!(
        "Classified '{}': prefecture='{}' restricted={} whitelist={} width={}",
        normalized,
        prefecture,
        in_restricted,
        in_whitelist,
        road_width
    );

    ParsedAddress {
        full: address.to_string(),
        normalized,
        prefecture,
        city,
        town,
        remainder,
        in_restricted,
        in_whitelist,
        road_width: round_to_tenth(road_width),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{FixedWidth, RandomWidth};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_normalize_strips_full_width_space() {
        assert_eq!(normalize(" 東京都\u{3000}中央区 Ginza 1 "), "東京都中央区ginza1");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_whitelist_wins_over_restricted() {
        let rules = RuleSet::default();
        let parsed = classify("鶴見区 祇園", &rules, &mut FixedWidth(3.0));
        assert!(parsed.in_whitelist);
        assert!(parsed.in_restricted);
        assert_eq!(parsed.road_width, 12.0);
    }

    #[test]
    fn test_restricted_width() {
        let rules = RuleSet::default();
        let parsed = classify("京都府京都市東山区祇園町", &rules, &mut FixedWidth(6.0));
        assert!(parsed.in_restricted);
        assert!(!parsed.in_whitelist);
        assert_eq!(parsed.road_width, 2.5);
    }

    #[test]
    fn test_prefecture_removed_from_remainder() {
        let rules = RuleSet::default();
        let parsed = classify("神奈川県横浜市鶴見区大黒ふ頭1-2-3", &rules, &mut FixedWidth(4.0));
        assert_eq!(parsed.prefecture, "神奈川県");
        assert_eq!(parsed.remainder, "横浜市鶴見区大黒ふ頭1-2-3");
        assert_eq!(parsed.city, "横浜市");
        assert_eq!(parsed.town, "鶴見区大黒ふ頭");
        assert_eq!(parsed.full, "神奈川県横浜市鶴見区大黒ふ頭1-2-3");
    }

    #[test]
    fn test_prefecture_table_order_breaks_ties() {
        let rules = RuleSet::default();
        // 京都府 は 東京都 より先に照合される
        let parsed = classify("東京都港区 京都府出身", &rules, &mut FixedWidth(4.0));
        assert_eq!(parsed.prefecture, "京都府");
        assert_eq!(parsed.remainder, "東京都港区出身");

        let parsed = classify("大阪府大阪市 神奈川県人会", &rules, &mut FixedWidth(4.0));
        assert_eq!(parsed.prefecture, "神奈川県");
    }

    #[test]
    fn test_no_prefecture_keeps_remainder() {
        let rules = RuleSet::default();
        let parsed = classify("Some Street 5", &rules, &mut FixedWidth(4.0));
        assert_eq!(parsed.prefecture, "");
        assert_eq!(parsed.remainder, "somestreet5");
        assert_eq!(parsed.remainder, parsed.normalized);
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let mut rules = RuleSet::default();
        rules.whitelist_zones.push("DaikokuPier".to_string());
        let parsed = classify("DAIKOKU PIER, Yokohama", &rules, &mut FixedWidth(2.0));
        assert!(parsed.in_whitelist);
    }

    #[test]
    fn test_sampled_width_is_rounded() {
        let rules = RuleSet::default();
        let parsed = classify("大阪府大阪市北区", &rules, &mut FixedWidth(3.46));
        assert_eq!(parsed.road_width, 3.5);
    }

    #[test]
    fn test_random_width_stays_in_range() {
        let rules = RuleSet::default();
        let mut widths = RandomWidth::new(StdRng::seed_from_u64(7));
        for _ in 0..500 {
            let parsed = classify("埼玉県川口市", &rules, &mut widths);
            assert!(parsed.road_width >= 2.0 && parsed.road_width <= 7.0);
        }
    }

    #[test]
    fn test_empty_input_still_classifies() {
        let rules = RuleSet::default();
        let parsed = classify("", &rules, &mut FixedWidth(5.0));
        assert_eq!(parsed.normalized, "");
        assert_eq!(parsed.road_width, 5.0);
    }
}
