//! Application services (use cases).
//!
//! The per-event pipeline (normalize, select, evaluate) and the multi-sport
//! scanner that drives it against an [`OddsFeed`](crate::port::outbound::feed::OddsFeed).

pub mod detector;
pub mod evaluator;
pub mod normalize;
pub mod scanner;
pub mod selector;

pub use detector::{ArbitrageDetector, DetectionConfig};
pub use scanner::{ScanReport, Scanner, SportOutcome, SportScan};
