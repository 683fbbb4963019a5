// src/lib.rs
// Public library surface for integration tests (and the demo binary).

pub mod breakdown;
pub mod config;
pub mod engine;
pub mod format;
pub mod gauge;
pub mod segments;
pub mod share;
pub mod snapshot;
pub mod splits;

// ---- Re-exports for stable public API ----
pub use crate::breakdown::{Breakdown, EfficiencyBuckets};
pub use crate::config::{EngineConfig, PenaltyMidpoints};
pub use crate::engine::compute;
pub use crate::gauge::{ArcPoint, GaugeSpec};
pub use crate::segments::{SegmentProfile, SegmentProfiles};
pub use crate::snapshot::{InputSnapshot, PayCycle, PenaltyBand, Segment};
pub use crate::splits::SplitWeights;
