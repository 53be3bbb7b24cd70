use crate::domain::model::CheckReport;
use crate::utils::error::Result;
use std::fmt::Write;

pub const NO_PORT_LABEL: &str = "港湾データなし / No port data available";

/// Bilingual plain-text rendering of one report.
pub fn render_text(report: &CheckReport) -> String {
    let mut out = String::new();
    let verdict = if report.accessibility.can_reach {
        "可能 / Yes"
    } else {
        "不可能 / No"
    };

    // String への書き込みは失敗しない
    let _ = writeln!(out, "住所 / Address: {}", report.address);
    let _ = writeln!(out, "整箱到達可能か / FCL Accessibility: {}", verdict);
    let _ = writeln!(out, "理由 / Reason: {}", report.accessibility.reason);

    match &report.nearest_port {
        Some(port) => {
            let _ = writeln!(out, "最寄り港 / Nearest Port: {} ({})", port.name, port.code);
            let _ = writeln!(
                out,
                "距離 / Distance: 約{}km、予想牽引時間 / Est. Haul Time: {}",
                port.distance_km, port.estimated_time
            );
        }
        None => {
            let _ = writeln!(out, "最寄り港 / Nearest Port: {}", NO_PORT_LABEL);
        }
    }

    if let Some(suggestion) = &report.suggestion {
        let _ = writeln!(out, "ヒント / Hint: {}", suggestion);
    }

    out
}

pub fn render_json(reports: &[CheckReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}
