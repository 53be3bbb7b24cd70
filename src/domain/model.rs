use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// 港口目錄中的一筆資料，欄位名稱與 ports.json 一致
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortRecord {
    pub name: String,
    pub code: String,
    pub lat: f64,
    pub lng: f64,
}

impl PortRecord {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedAddress {
    pub full: String,
    pub normalized: String,
    pub prefecture: String,
    pub city: String,
    pub town: String,
    pub remainder: String,
    pub in_restricted: bool,
    pub in_whitelist: bool,
    /// 公尺，四捨五入到小數一位
    pub road_width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessibilityResult {
    pub can_reach: bool,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearestPortResult {
    pub name: String,
    pub code: String,
    pub distance_km: f64,
    pub estimated_time: String,
}

/// 單一地址的完整檢查結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub address: String,
    pub parsed: ParsedAddress,
    pub coordinate: Coordinate,
    pub accessibility: AccessibilityResult,
    /// 港口目錄為空時為 None
    pub nearest_port: Option<NearestPortResult>,
    pub suggestion: Option<String>,
}
