use crate::domain::model::CheckReport;
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    address: &'a str,
    can_reach: bool,
    reason: &'a str,
    road_width_m: f64,
    prefecture: &'a str,
    lat: f64,
    lng: f64,
    port_name: &'a str,
    port_code: &'a str,
    distance_km: Option<f64>,
    estimated_time: &'a str,
}

impl<'a> From<&'a CheckReport> for ReportRow<'a> {
    fn from(report: &'a CheckReport) -> Self {
        let port = report.nearest_port.as_ref();
        Self {
            address: &report.address,
            can_reach: report.accessibility.can_reach,
            reason: &report.accessibility.reason,
            road_width_m: report.parsed.road_width,
            prefecture: &report.parsed.prefecture,
            lat: report.coordinate.lat,
            lng: report.coordinate.lng,
            port_name: port.map(|p| p.name.as_str()).unwrap_or(""),
            port_code: port.map(|p| p.code.as_str()).unwrap_or(""),
            distance_km: port.map(|p| p.distance_km),
            estimated_time: port.map(|p| p.estimated_time.as_str()).unwrap_or(""),
        }
    }
}

/// 每份報告輸出一列 CSV
pub fn write_reports_csv<W: Write>(writer: W, reports: &[CheckReport]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for report in reports {
        csv_writer.serialize(ReportRow::from(report))?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn save_reports_csv<P: AsRef<Path>>(path: P, reports: &[CheckReport]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = std::fs::File::create(path)?;
    write_reports_csv(file, reports)?;
    tracing::debug!("Wrote {} report rows to {}", reports.len(), path.display());
    Ok(())
}
