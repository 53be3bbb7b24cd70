// Adapters layer: concrete implementations for external systems (port catalog sources, CSV export).

pub mod catalog;
pub mod export;
