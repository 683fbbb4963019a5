//! Demo that runs the reference scenario through the engine and prints the
//! dashboard figures plus the gauge path (stdout only; no server).

use payroll_roi_calculator::format::{format_currency, format_hours};
use payroll_roi_calculator::{
    compute, EngineConfig, GaugeSpec, InputSnapshot, PayCycle, PenaltyBand, Segment,
};
use tracing_subscriber::EnvFilter;

fn main() {
    // Load .env in local/dev; no-op elsewhere. Enables ROI_CONFIG_PATH.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let config = EngineConfig::load_or_default();

    let input = InputSnapshot {
        employees: 250,
        pay_cycle: PayCycle::Fortnightly,
        avg_hours_per_cycle: 8.0,
        error_rate_pct: 3.0,
        hourly_rate: 55.0,
        record_keeping_eff_pct: 10.0,
        penalty_band: PenaltyBand::Medium,
        incident_prob_pct: 8.0,
        segment: Segment::Council,
    };

    let b = compute(&input, &config);

    println!("Payroll ROI estimate ({} employees, {:?})", input.employees, input.segment);
    println!("  Current admin time     {}", format_hours(b.current_admin_hours));
    println!("  Current admin cost     {}", format_currency(b.current_admin_cost));
    println!("  Hours back to team     {}", format_hours(b.hours_back_to_team));
    println!("  Efficiency time saved  {}", format_currency(b.efficiency_time_saved));
    println!("    manual               {}", format_currency(b.buckets.manual));
    println!("    compliance           {}", format_currency(b.buckets.compliance));
    println!("    error reduction      {}", format_currency(b.buckets.error_reduction));
    println!("  Record-keeping savings {}", format_currency(b.record_keeping_savings));
    println!("  Risk avoidance         {}", format_currency(b.compliance_risk_avoidance));
    println!("  Total annual savings   {}", format_currency(b.total_annual_savings));

    let gauge = GaugeSpec::default();
    println!("  Gauge reading          {}%", b.error_rate_band);
    println!("  Gauge path             {}", gauge.path_for(f64::from(b.error_rate_band)));

    println!("roi-demo done");
}
