use crate::core::rules::RuleSet;
use crate::domain::model::PortRecord;
use crate::utils::error::Result;
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;

/// Where the port catalog comes from (local file, HTTP endpoint, ...).
#[async_trait]
pub trait PortSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<PortRecord>>;

    fn describe(&self) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn catalog_source(&self) -> &str;
    fn catalog_timeout(&self) -> Duration;
    fn rules(&self) -> RuleSet;
}

/// Supplies a road width for addresses outside any known zone.
pub trait RoadWidthSource {
    fn sample_width(&mut self) -> f64;
}

pub const RANDOM_WIDTH_MIN: f64 = 2.0;
pub const RANDOM_WIDTH_MAX: f64 = 7.0;

/// Uniform draw from `[2.0, 7.0)`.
#[derive(Debug, Clone)]
pub struct RandomWidth<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomWidth<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RoadWidthSource for RandomWidth<R> {
    fn sample_width(&mut self) -> f64 {
        self.rng.gen_range(RANDOM_WIDTH_MIN..RANDOM_WIDTH_MAX)
    }
}

/// Always returns the same width; used by tests and `--road-width`.
#[derive(Debug, Clone, Copy)]
pub struct FixedWidth(pub f64);

impl RoadWidthSource for FixedWidth {
    fn sample_width(&mut self) -> f64 {
        self.0
    }
}

impl<W: RoadWidthSource + ?Sized> RoadWidthSource for Box<W> {
    fn sample_width(&mut self) -> f64 {
        (**self).sample_width()
    }
}
