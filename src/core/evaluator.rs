use crate::domain::model::{AccessibilityResult, ParsedAddress};

/// 40HQ 拖車所需最小道路寬度（公尺）
pub const MIN_ROAD_WIDTH_M: f64 = 3.5;

pub const WHITELIST_REASON: &str = "港湾工業地区に位置、道路幅12m以上、40HQ対応可能";
pub const RESTRICTED_REASON: &str = "祇園/銀座などの古街/商業歩行街、コンテナ車進入不可";

pub fn evaluate(parsed: &ParsedAddress) -> AccessibilityResult {
    if parsed.in_whitelist {
        return AccessibilityResult {
            can_reach: true,
            reason: WHITELIST_REASON.to_string(),
        };
    }

    if parsed.in_restricted {
        return AccessibilityResult {
            can_reach: false,
            reason: RESTRICTED_REASON.to_string(),
        };
    }

    let can_reach = parsed.road_width >= MIN_ROAD_WIDTH_M;
    let reason = if can_reach {
        format!("道路幅{}m、40HQ対応可能", parsed.road_width)
    } else {
        format!("最近道路幅{}m、コンテナ車進入不可", parsed.road_width)
    };

    AccessibilityResult { can_reach, reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classifier::classify;
    use crate::core::rules::RuleSet;
    use crate::domain::ports::FixedWidth;

    fn parsed_with_width(width: f64) -> ParsedAddress {
        classify("埼玉県川口市本町4-1", &RuleSet::default(), &mut FixedWidth(width))
    }

    #[test]
    fn test_whitelist_reachable() {
        let parsed = classify("大黒ふ頭", &RuleSet::default(), &mut FixedWidth(2.0));
        let result = evaluate(&parsed);
        assert!(result.can_reach);
        assert!(result.reason.contains("12m"));
    }

    #[test]
    fn test_restricted_unreachable() {
        let parsed = classify("祇園", &RuleSet::default(), &mut FixedWidth(7.0));
        let result = evaluate(&parsed);
        assert!(!result.can_reach);
        assert_eq!(result.reason, RESTRICTED_REASON);
    }

    #[test]
    fn test_whitelist_beats_restricted_keyword() {
        let parsed = classify("鶴見区 祇園", &RuleSet::default(), &mut FixedWidth(2.0));
        assert!(parsed.in_whitelist && parsed.in_restricted);

        let result = evaluate(&parsed);
        assert!(result.can_reach);
        assert_eq!(result.reason, WHITELIST_REASON);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let result = evaluate(&parsed_with_width(3.5));
        assert!(result.can_reach);
        assert_eq!(result.reason, "道路幅3.5m、40HQ対応可能");
    }

    #[test]
    fn test_narrow_road() {
        let result = evaluate(&parsed_with_width(3.4));
        assert!(!result.can_reach);
        assert_eq!(result.reason, "最近道路幅3.4m、コンテナ車進入不可");
    }

    #[test]
    fn test_whole_number_width_formatting() {
        let result = evaluate(&parsed_with_width(5.0));
        assert_eq!(result.reason, "道路幅5m、40HQ対応可能");
    }
}
