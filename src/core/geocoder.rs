use crate::core::rules::RuleSet;
use crate::domain::model::Coordinate;

/// Keyword geocoding: checks the raw text (not normalized, case-sensitive) against the
/// alias table in order, falling back to `rules.fallback` when nothing matches.
pub fn geocode(address: &str, rules: &RuleSet) -> Coordinate {
    for alias in &rules.geocode_aliases {
        if let Some(keyword) = alias.keywords.iter().find(|k| address.contains(k.as_str())) {
            tracing::debug!("Geocoded via alias '{}'", keyword);
            return alias.coordinate();
        }
    }

    tracing::debug!("No geocode alias matched, using fallback coordinate");
    rules.fallback
}
