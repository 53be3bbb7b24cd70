pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, OutputFormat};

pub use adapters::catalog::{FilePortSource, HttpPortSource, PortCatalog, StaticPortSource};
pub use config::Settings;
pub use core::{checker::FclChecker, rules::RuleSet};
pub use domain::model::{
    AccessibilityResult, CheckReport, Coordinate, NearestPortResult, ParsedAddress, PortRecord,
};
pub use domain::ports::{FixedWidth, RandomWidth, RoadWidthSource};
pub use utils::error::{CheckError, Result};
