use crate::core::classifier::round_to_tenth;
use crate::domain::model::{Coordinate, NearestPortResult, PortRecord};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// 拖車平均時速 30km/h
pub const HAUL_SPEED_KMH: f64 = 30.0;
/// 餘數公里換算分鐘的係數，僅在時速 30 時成立
pub const MINUTES_PER_KM: f64 = 2.0;

/// Great-circle distance in kilometers on a spherical Earth.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin() * (d_lat / 2.0).sin()
        + lat1.to_radians().cos()
            * lat2.to_radians().cos()
            * (d_lon / 2.0).sin()
            * (d_lon / 2.0).sin();
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

pub fn distance_between(a: Coordinate, b: Coordinate) -> f64 {
    haversine_km(a.lat, a.lng, b.lat, b.lng)
}

/// Formats the estimated haul time, e.g. `"1時間30分"` or `"45分"`.
pub fn haul_time_label(distance_km: f64) -> String {
    let hours = (distance_km / HAUL_SPEED_KMH).floor();
    let minutes = ((distance_km % HAUL_SPEED_KMH) * MINUTES_PER_KM).round();
    if hours > 0.0 {
        format!("{}時間{}分", hours as u64, minutes as u64)
    } else {
        format!("{}分", minutes as u64)
    }
}

/// Picks the closest port in catalog order; ties keep the earlier record.
///
/// Returns `None` for an empty catalog.
pub fn nearest_port(from: Coordinate, ports: &[PortRecord]) -> Option<NearestPortResult> {
    let mut nearest: Option<&PortRecord> = None;
    let mut min_dist = f64::INFINITY;
    for port in ports {
        let dist = distance_between(from, port.coordinate());
        if dist < min_dist {
            min_dist = dist;
            nearest = Some(port);
        }
    }

    let port = nearest?;
    Some(NearestPortResult {
        name: port.name.clone(),
        code: port.code.clone(),
        distance_km: round_to_tenth(min_dist),
        estimated_time: haul_time_label(min_dist),
    })
}
