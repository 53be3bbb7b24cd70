use crate::adapters::catalog::{source_from_location, PortCatalog};
use crate::core::rules::RuleSet;
use crate::core::{classifier, distance, evaluator, extractor, geocoder};
use crate::domain::model::{CheckReport, PortRecord};
use crate::domain::ports::{ConfigProvider, RoadWidthSource};
use crate::utils::error::{CheckError, Result};

/// Runs the whole accessibility check for one address at a time.
pub struct FclChecker<W: RoadWidthSource> {
    catalog: PortCatalog,
    rules: RuleSet,
    widths: W,
}

impl<W: RoadWidthSource> FclChecker<W> {
    pub fn new(catalog: PortCatalog, rules: RuleSet, widths: W) -> Self {
        Self {
            catalog,
            rules,
            widths,
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C, widths: W) -> Result<Self> {
        let source = source_from_location(config.catalog_source(), config.catalog_timeout())?;
        tracing::debug!("Port catalog source: {}", source.describe());
        Ok(Self::new(PortCatalog::new(source), config.rules(), widths))
    }

    pub fn catalog(&self) -> &PortCatalog {
        &self.catalog
    }

    pub async fn check(&mut self, address: &str) -> Result<CheckReport> {
        let address = address.trim();
        if address.is_empty() {
            return Err(CheckError::EmptyAddress);
        }

        let ports = self.catalog.ports().await;
        Ok(Self::check_with_ports(&self.rules, &mut self.widths, address, ports))
    }

    /// Checks every non-blank address in order; fails only when none is left.
    ///
    /// The catalog is loaded at most once per batch, so a failing source degrades once.
    pub async fn check_batch<S: AsRef<str>>(&mut self, addresses: &[S]) -> Result<Vec<CheckReport>> {
        let pending: Vec<&str> = addresses
            .iter()
            .enumerate()
            .filter_map(|(index, address)| {
                let address = address.as_ref().trim();
                if address.is_empty() {
                    tracing::debug!("Skipping blank address at position {}", index + 1);
                    None
                } else {
                    Some(address)
                }
            })
            .collect();

        if pending.is_empty() {
            return Err(CheckError::EmptyAddress);
        }

        let ports = self.catalog.ports().await;
        let reports: Vec<CheckReport> = pending
            .into_iter()
            .map(|address| Self::check_with_ports(&self.rules, &mut self.widths, address, ports))
            .collect();

        tracing::info!("Checked {} addresses", reports.len());
        Ok(reports)
    }

    fn check_with_ports(
        rules: &RuleSet,
        widths: &mut W,
        address: &str,
        ports: &[PortRecord],
    ) -> CheckReport {
        tracing::info!("🔎 Checking address: {}", address);

        let parsed = classifier::classify(address, rules, widths);
        let coordinate = geocoder::geocode(address, rules);
        let accessibility = evaluator::evaluate(&parsed);
        let nearest_port = distance::nearest_port(coordinate, ports);

        match &nearest_port {
            Some(port) => tracing::debug!(
                "Nearest port {} ({}) at {}km",
                port.name,
                port.code,
                port.distance_km
            ),
            None => tracing::warn!("No ports available, skipping nearest-port lookup"),
        }

        tracing::info!(
            "{} {} - {}",
            if accessibility.can_reach { "✅" } else { "❌" },
            address,
            accessibility.reason
        );

        CheckReport {
            address: address.to_string(),
            parsed,
            coordinate,
            accessibility,
            nearest_port,
            suggestion: extractor::suggest_address_format(address),
        }
    }
}
