//! Engine configuration: split ratios, penalty-band midpoints, record-keeping
//! damping, and the segment profile table.
//!
//! Loaded once at startup from TOML (`config/roi.toml` by default, overridable
//! via `ROI_CONFIG_PATH`); every field has a built-in default so a missing
//! file is not an error. The engine itself only ever sees the resolved
//! `EngineConfig` value.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::segments::SegmentProfiles;
use crate::snapshot::PenaltyBand;
use crate::splits::SplitWeights;

pub const DEFAULT_CONFIG_PATH: &str = "config/roi.toml";
pub const ENV_CONFIG_PATH: &str = "ROI_CONFIG_PATH";

/// Fixed dollar midpoints per penalty band.
///
/// The Low band is defined over $0-$10,000, so its midpoint is $5,000.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PenaltyMidpoints {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl Default for PenaltyMidpoints {
    fn default() -> Self {
        Self {
            low: 5_000.0,
            medium: 20_000.0,
            high: 65_000.0,
        }
    }
}

impl PenaltyMidpoints {
    /// Total lookup over the closed band enum.
    pub fn midpoint(&self, band: PenaltyBand) -> f64 {
        match band {
            PenaltyBand::Low => self.low,
            PenaltyBand::Medium => self.medium,
            PenaltyBand::High => self.high,
        }
    }
}

/// Everything the engine needs besides the snapshot itself.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Split driving the headline hours-saved figures.
    pub headline_split: SplitWeights,
    /// Split behind the by-category detail view. Distinct from the headline
    /// split; the two are never blended.
    pub detail_split: SplitWeights,
    pub penalty_midpoints: PenaltyMidpoints,
    /// Damping constant on record-keeping savings. 1.0 = off.
    pub record_damping: f64,
    pub segments: SegmentProfiles,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            headline_split: SplitWeights::HEADLINE,
            detail_split: SplitWeights::DETAIL,
            penalty_midpoints: PenaltyMidpoints::default(),
            record_damping: 1.0,
            segments: SegmentProfiles::default_seed(),
        }
    }
}

static DEFAULT_CONFIG: Lazy<EngineConfig> = Lazy::new(EngineConfig::default);

impl EngineConfig {
    /// The built-in configuration, built once.
    pub fn builtin() -> &'static EngineConfig {
        &DEFAULT_CONFIG
    }

    /// Load from a TOML file; errors carry context for the caller to report.
    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        use anyhow::Context as _;
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading engine config {}", path.display()))?;
        let mut cfg: EngineConfig = toml::from_str(&raw)
            .with_context(|| format!("parsing engine config {}", path.display()))?;
        cfg.headline_split = cfg.headline_split.normalized();
        cfg.detail_split = cfg.detail_split.normalized();
        Ok(cfg)
    }

    /// Resolve the config path (`ROI_CONFIG_PATH` or the default location)
    /// and load it, falling back to the built-in defaults with a warning.
    pub fn load_or_default() -> Self {
        let path = std::env::var(ENV_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
        if !path.exists() {
            return *Self::builtin();
        }
        match Self::from_path(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!(error = %e, path = %path.display(), "engine config unusable, using defaults");
                *Self::builtin()
            }
        }
    }
}
