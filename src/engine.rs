//! # Savings Calculation Engine
//! Pure, testable logic that maps `(InputSnapshot, EngineConfig)` → `Breakdown`.
//! No I/O, no state; suitable for unit tests and for being rerun wholesale on
//! every input change.
//!
//! Model: hours-based split with segment multipliers on the manual and
//! compliance buckets; the error-reduction bucket stays neutral. Record
//! keeping scales current cost, compliance risk is an expected value over the
//! penalty-band midpoint.

use crate::breakdown::{Breakdown, EfficiencyBuckets};
use crate::config::EngineConfig;
use crate::segments::SegmentProfile;
use crate::snapshot::InputSnapshot;
use crate::splits::SplitWeights;

/// Compute the full derived breakdown for one input snapshot.
///
/// Total over the clamped input domain: out-of-range percentages are pinned
/// to [0,100] up front and no path can fail. Non-finite inputs propagate into
/// the affected outputs only.
pub fn compute(input: &InputSnapshot, config: &EngineConfig) -> Breakdown {
    let input = input.clamped();
    let profile = config.segments.profile_for(input.segment);

    // 1) Baseline, segment-independent.
    let current_admin_hours = input.pay_cycle.runs_per_year() * input.avg_hours_per_cycle;
    let current_admin_cost = current_admin_hours * input.hourly_rate;

    // 2) Hours recoverable through error elimination.
    let hours_back_to_team = current_admin_hours * (input.error_rate_pct / 100.0);
    let value_back = hours_back_to_team * input.hourly_rate;

    // 3) Partition the recovered value; segment factors touch manual and
    //    compliance only.
    let buckets = split_value(value_back, config.headline_split, profile);
    let detail_buckets = split_value(value_back, config.detail_split, profile);

    // 4) Record-keeping savings scale current cost.
    let record_keeping_savings = current_admin_cost
        * (input.record_keeping_eff_pct / 100.0)
        * profile.record_factor
        * config.record_damping;

    // 5) Expected value of penalties avoided.
    let midpoint = config.penalty_midpoints.midpoint(input.penalty_band);
    let compliance_risk_avoidance =
        midpoint * (input.incident_prob_pct / 100.0) * profile.compliance_factor;

    // 6) Headline totals.
    let efficiency_time_saved = buckets.total();
    let total_annual_savings =
        efficiency_time_saved + record_keeping_savings + compliance_risk_avoidance;

    // 7) Gauge metrics. Two distinct figures: the error-rate banding that
    //    drives the gauge, and the savings-to-cost ratio KPI.
    let error_rate_band = error_rate_band(input.error_rate_pct);
    let savings_ratio_pct = if current_admin_cost > 0.0 {
        (total_annual_savings / current_admin_cost * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    Breakdown {
        current_admin_hours,
        current_admin_cost,
        hours_back_to_team,
        buckets,
        detail_buckets,
        efficiency_time_saved,
        record_keeping_savings,
        compliance_risk_avoidance,
        total_annual_savings,
        error_rate_band,
        savings_ratio_pct,
    }
}

fn split_value(value: f64, split: SplitWeights, profile: SegmentProfile) -> EfficiencyBuckets {
    let split = split.normalized();
    EfficiencyBuckets {
        manual: value * split.manual * profile.manual_factor,
        compliance: value * split.compliance * profile.compliance_factor,
        // Error-reduction stays segment-neutral.
        error_reduction: value * split.error_reduction,
    }
}

/// Band an error-rate percentage onto the 0-100 gauge scale.
/// `round(rate × 25)`, clamped rather than wrapped.
pub fn error_rate_band(error_rate_pct: f64) -> u8 {
    let banded = (error_rate_pct * 25.0).round().clamp(0.0, 100.0);
    banded as u8
}
