//! # Input Snapshot
//!
//! Immutable value object holding one complete set of calculator inputs.
//! The presentation layer owns exactly one snapshot per page session and
//! replaces it wholesale on every field change; the engine never mutates it.
//!
//! Bounds are enforced at the form boundary, not here. `clamped()` is the
//! engine-side safety net: percentages land in [0,100] and rates/hours are
//! floored at zero, so the engine stays total over whatever arrives.

use serde::{Deserialize, Serialize};

/// Pay-run cadence. The four cadences the product supports; each maps to a
/// fixed number of runs per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayCycle {
    Weekly,
    Fortnightly,
    SemiMonthly,
    Monthly,
}

impl PayCycle {
    pub fn runs_per_year(self) -> f64 {
        match self {
            PayCycle::Weekly => 52.0,
            PayCycle::Fortnightly => 26.0,
            PayCycle::SemiMonthly => 24.0,
            PayCycle::Monthly => 12.0,
        }
    }
}

/// Compliance-penalty exposure tier. Each tier resolves to a fixed dollar
/// midpoint in the engine config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PenaltyBand {
    Low,
    Medium,
    High,
}

/// Customer-category tag selecting a fixed weighting profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Council,
    Enterprise,
}

/// One complete set of calculator inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputSnapshot {
    /// Headcount. Contextual only; does not feed the formulas.
    pub employees: u32,
    pub pay_cycle: PayCycle,
    /// Labor hours spent per pay run (typically 1-40).
    pub avg_hours_per_cycle: f64,
    /// Fraction of cycle time attributable to correction/rework, in percent.
    pub error_rate_pct: f64,
    /// Loaded cost per labor hour.
    pub hourly_rate: f64,
    /// Efficiency percentage attributable to digital record-keeping.
    pub record_keeping_eff_pct: f64,
    pub penalty_band: PenaltyBand,
    /// Annual probability of a compliance incident, in percent.
    pub incident_prob_pct: f64,
    pub segment: Segment,
}

impl InputSnapshot {
    /// Returns a copy with every percentage clamped to [0,100] and hours/rate
    /// floored at zero. Non-finite values pass through untouched; guarding
    /// against those is the input boundary's job.
    pub fn clamped(self) -> Self {
        Self {
            avg_hours_per_cycle: floor0(self.avg_hours_per_cycle),
            error_rate_pct: clamp_pct(self.error_rate_pct),
            hourly_rate: floor0(self.hourly_rate),
            record_keeping_eff_pct: clamp_pct(self.record_keeping_eff_pct),
            incident_prob_pct: clamp_pct(self.incident_prob_pct),
            ..self
        }
    }
}

fn clamp_pct(x: f64) -> f64 {
    x.clamp(0.0, 100.0)
}

fn floor0(x: f64) -> f64 {
    x.max(0.0)
}
