pub mod checker;
pub mod classifier;
pub mod distance;
pub mod evaluator;
pub mod extractor;
pub mod geocoder;
pub mod report;
pub mod rules;

pub use crate::domain::model::{
    AccessibilityResult, CheckReport, Coordinate, NearestPortResult, ParsedAddress, PortRecord,
};
pub use crate::domain::ports::{ConfigProvider, PortSource, RoadWidthSource};
pub use crate::utils::error::Result;
