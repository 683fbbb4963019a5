//! breakdown.rs — Output shapes for the savings dashboard.
//!
//! Everything the KPI cards, the by-category detail view, and the gauge
//! consume comes out of one `Breakdown` value, recomputed whole on every
//! input change. Figures are full-precision f64; rounding happens only at
//! the formatting boundary (`crate::format`).

use serde::{Deserialize, Serialize};

/// Dollar figures for the three efficiency buckets that partition the
/// hours-saved value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyBuckets {
    /// Manual-processing time recovered.
    pub manual: f64,
    /// Compliance/reporting efficiency.
    pub compliance: f64,
    /// Error-reduction rework avoided (always segment-neutral).
    pub error_reduction: f64,
}

impl EfficiencyBuckets {
    pub fn total(&self) -> f64 {
        self.manual + self.compliance + self.error_reduction
    }
}

/// The full derived breakdown: headline totals plus both bucket views.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    /// Annual hours currently spent on payroll admin.
    pub current_admin_hours: f64,
    /// Annual cost of that admin time.
    pub current_admin_cost: f64,
    /// Hours returned to the team via error elimination.
    pub hours_back_to_team: f64,
    /// Segment-weighted buckets under the headline split.
    pub buckets: EfficiencyBuckets,
    /// Segment-weighted buckets under the detail split (by-category view).
    pub detail_buckets: EfficiencyBuckets,
    /// Sum of the headline buckets.
    pub efficiency_time_saved: f64,
    pub record_keeping_savings: f64,
    pub compliance_risk_avoidance: f64,
    pub total_annual_savings: f64,
    /// Gauge reading: error rate banded onto 0-100. Display-only; not a
    /// savings-to-cost ratio.
    pub error_rate_band: u8,
    /// Separate KPI: total savings as a percentage of current admin cost,
    /// clamped to [0,100]. Zero when admin cost is zero.
    pub savings_ratio_pct: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_the_dashboard_contract() {
        let b = Breakdown {
            current_admin_hours: 208.0,
            current_admin_cost: 11_440.0,
            hours_back_to_team: 6.24,
            buckets: EfficiencyBuckets {
                manual: 171.6,
                compliance: 111.54,
                error_reduction: 85.8,
            },
            detail_buckets: EfficiencyBuckets {
                manual: 240.24,
                compliance: 89.232,
                error_reduction: 34.32,
            },
            efficiency_time_saved: 368.94,
            record_keeping_savings: 1_372.8,
            compliance_risk_avoidance: 2_080.0,
            total_annual_savings: 3_821.74,
            error_rate_band: 75,
            savings_ratio_pct: 33.4,
        };

        let v = serde_json::to_value(b).unwrap();
        assert_eq!(v["error_rate_band"], json!(75));
        assert!(v["buckets"]["manual"].is_number());
        assert!(v["detail_buckets"]["error_reduction"].is_number());
        assert!(v.get("total_annual_savings").is_some());
        // the two gauge metrics stay distinct fields
        assert!(v.get("savings_ratio_pct").is_some());
    }

    #[test]
    fn bucket_total_adds_the_three_categories() {
        let b = EfficiencyBuckets {
            manual: 1.0,
            compliance: 2.0,
            error_reduction: 3.0,
        };
        assert!((b.total() - 6.0).abs() < 1e-12);
    }
}
