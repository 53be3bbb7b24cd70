use crate::domain::model::Coordinate;
use crate::utils::error::{CheckError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};

/// 47 都道府県。先頭の 4 件は照合の優先順（東京都より京都府が先）、残りは JIS 順
pub const PREFECTURES: [&str; 47] = [
    "神奈川県", "京都府", "東京都", "大阪府",
    "北海道", "青森県", "岩手県", "宮城県", "秋田県", "山形県", "福島県",
    "茨城県", "栃木県", "群馬県", "埼玉県", "千葉県",
    "新潟県", "富山県", "石川県", "福井県", "山梨県", "長野県", "岐阜県",
    "静岡県", "愛知県", "三重県", "滋賀県", "兵庫県",
    "奈良県", "和歌山県", "鳥取県", "島根県", "岡山県", "広島県", "山口県",
    "徳島県", "香川県", "愛媛県", "高知県", "福岡県", "佐賀県", "長崎県",
    "熊本県", "大分県", "宮崎県", "鹿児島県", "沖縄県",
];

/// 古街・歩行者天国など、コンテナ車が入れない地区
pub const RESTRICTED_ZONES: [&str; 5] = ["祇園", "銀座", "東山区", "谷中", "国際通り"];

/// 港湾・工業地区
pub const WHITELIST_ZONES: [&str; 2] = ["大黒ふ頭", "鶴見区"];

pub const FALLBACK_COORDINATE: Coordinate = Coordinate::new(35.6895, 139.6917);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoAlias {
    pub keywords: Vec<String>,
    pub lat: f64,
    pub lng: f64,
}

impl GeoAlias {
    fn new(keywords: &[&str], lat: f64, lng: f64) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            lat,
            lng,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

/// Ordered keyword tables driving classification and geocoding.
///
/// Built once at startup and only read afterwards. Every list is ordered: the first
/// prefecture or geocode alias that matches wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    pub prefectures: Vec<String>,
    pub restricted_zones: Vec<String>,
    pub whitelist_zones: Vec<String>,
    pub geocode_aliases: Vec<GeoAlias>,
    pub fallback: Coordinate,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            prefectures: PREFECTURES.iter().map(|p| p.to_string()).collect(),
            restricted_zones: RESTRICTED_ZONES.iter().map(|z| z.to_string()).collect(),
            whitelist_zones: WHITELIST_ZONES.iter().map(|z| z.to_string()).collect(),
            geocode_aliases: vec![
                GeoAlias::new(&["横浜", "Yokohama"], 35.4518, 139.6857),
                GeoAlias::new(&["京都", "Kyoto"], 35.0116, 135.7681),
                GeoAlias::new(&["銀座", "Ginza"], 35.6716, 139.7644),
            ],
            fallback: FALLBACK_COORDINATE,
        }
    }
}

fn validate_coordinate(field_name: &str, coordinate: Coordinate) -> Result<()> {
    validate_range(&format!("{}.lat", field_name), coordinate.lat, -90.0, 90.0)?;
    validate_range(&format!("{}.lng", field_name), coordinate.lng, -180.0, 180.0)
}

impl Validate for RuleSet {
    fn validate(&self) -> Result<()> {
        let keyword_lists = [
            ("rules.prefectures", &self.prefectures),
            ("rules.restricted_zones", &self.restricted_zones),
            ("rules.whitelist_zones", &self.whitelist_zones),
        ];
        for (field, keywords) in keyword_lists {
            for keyword in keywords.iter() {
                validate_non_empty_string(field, keyword)?;
            }
        }

        for (index, alias) in self.geocode_aliases.iter().enumerate() {
            let field = format!("rules.geocode_aliases[{}]", index);
            if alias.keywords.is_empty() {
                return Err(CheckError::ConfigValidationError {
                    field,
                    message: "alias needs at least one keyword".to_string(),
                });
            }
            for keyword in &alias.keywords {
                validate_non_empty_string(&field, keyword)?;
            }
            validate_coordinate(&field, alias.coordinate())?;
        }

        validate_coordinate("rules.fallback", self.fallback)
    }
}
