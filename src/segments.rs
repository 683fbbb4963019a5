//! # Segment Profiles
//!
//! This module provides the mapping from a customer-segment tag (Council vs.
//! Enterprise) to its fixed weighting multipliers:
//!
//! - Loads from JSON config (one profile per segment tag).
//! - Total lookup over the closed segment enum; no error path.
//! - Includes a built-in `default_seed()` used when no config is found.
//!
//! Councils weight compliance and record-keeping higher; enterprises weight
//! manual-processing savings higher. Profiles are immutable for the process
//! lifetime once loaded.

use serde::Deserialize;
use std::{fs, path::Path};
use tracing::warn;

use crate::snapshot::Segment;

/// Per-segment weighting multipliers applied to their savings buckets.
/// All factors in the built-in seed are >= 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SegmentProfile {
    pub manual_factor: f64,
    pub compliance_factor: f64,
    pub record_factor: f64,
}

/// The full profile table, loaded from JSON or defaults.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SegmentProfiles {
    pub council: SegmentProfile,
    pub enterprise: SegmentProfile,
}

impl Default for SegmentProfiles {
    fn default() -> Self {
        Self::default_seed()
    }
}

impl SegmentProfiles {
    /// Load the table from a JSON file.
    /// Falls back to `default_seed()` on any read or parse error.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(s) => serde_json::from_str(&s).unwrap_or_else(|e| {
                warn!(error = %e, "segment profile config unparsable, using seed");
                Self::default_seed()
            }),
            Err(_) => Self::default_seed(),
        }
    }

    /// Total lookup: every segment tag has exactly one profile.
    pub fn profile_for(&self, segment: Segment) -> SegmentProfile {
        match segment {
            Segment::Council => self.council,
            Segment::Enterprise => self.enterprise,
        }
    }

    /// Built-in seed used as fallback if no config is found.
    pub(crate) fn default_seed() -> Self {
        Self {
            council: SegmentProfile {
                manual_factor: 1.0,
                compliance_factor: 1.3,
                record_factor: 1.2,
            },
            enterprise: SegmentProfile {
                manual_factor: 1.2,
                compliance_factor: 1.0,
                record_factor: 1.0,
            },
        }
    }
}
