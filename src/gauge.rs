//! # Gauge Geometry
//!
//! Maps a 0-100 percentage onto a semicircular SVG progress arc. The arc
//! starts at the semicircle's leftmost point (angle π) and sweeps clockwise
//! toward the rightmost point (angle 0) as the percentage grows.
//!
//! The exact trigonometric endpoint form below is canonical. A proportional
//! dash-length heuristic is also provided for stroke-dasharray renderings;
//! the two are not interchangeable near the arc extremes and must never be
//! mixed within one rendering.

use std::f64::consts::PI;

/// Fixed center and radius of the dashboard gauge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeSpec {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl Default for GaugeSpec {
    fn default() -> Self {
        // Matches the dashboard's 200x120 viewBox.
        Self {
            cx: 100.0,
            cy: 100.0,
            radius: 80.0,
        }
    }
}

/// Arc endpoint plus the SVG flags needed to draw it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPoint {
    pub end_x: f64,
    pub end_y: f64,
    /// 1 when the sweep exceeds 180° (percent > 50).
    pub large_arc_flag: u8,
    /// Always 1: the gauge sweeps clockwise.
    pub sweep_flag: u8,
}

impl GaugeSpec {
    /// Leftmost point of the semicircle (percent = 0).
    pub fn start_point(&self) -> (f64, f64) {
        (self.cx - self.radius, self.cy)
    }

    /// Endpoint coordinates and flags for a given percentage.
    ///
    /// Input is clamped to [0,100] so the returned point always lies on the
    /// semicircle, even if the caller skipped pre-clamping.
    pub fn arc_for(&self, percent: f64) -> ArcPoint {
        let percent = clamp_percent(percent);
        let end_angle = PI - PI * (percent / 100.0);
        ArcPoint {
            end_x: self.cx + self.radius * end_angle.cos(),
            end_y: self.cy + self.radius * end_angle.sin(),
            large_arc_flag: u8::from(percent > 50.0),
            sweep_flag: 1,
        }
    }

    /// Full SVG path (`M … A …`) from the arc start to the computed endpoint.
    pub fn path_for(&self, percent: f64) -> String {
        let (sx, sy) = self.start_point();
        let arc = self.arc_for(percent);
        format!(
            "M {sx:.3} {sy:.3} A {r:.3} {r:.3} 0 {laf} {sf} {ex:.3} {ey:.3}",
            r = self.radius,
            laf = arc.large_arc_flag,
            sf = arc.sweep_flag,
            ex = arc.end_x,
            ey = arc.end_y,
        )
    }

    /// Total length of the semicircular track (π·r).
    pub fn track_length(&self) -> f64 {
        PI * self.radius
    }

    /// Dash-length heuristic for stroke-dasharray progress rings:
    /// `percent/100 × track length`. A visual approximation only; not
    /// geometrically exact at the arc endpoints. Do not combine with
    /// `arc_for` output in the same rendering.
    pub fn dash_length(&self, percent: f64) -> f64 {
        clamp_percent(percent) / 100.0 * self.track_length()
    }
}

fn clamp_percent(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn gauge() -> GaugeSpec {
        GaugeSpec::default()
    }

    #[test]
    fn zero_percent_sits_at_the_start_point() {
        let g = gauge();
        let arc = g.arc_for(0.0);
        let (sx, sy) = g.start_point();
        assert!((arc.end_x - sx).abs() < EPS);
        assert!((arc.end_y - sy).abs() < EPS);
        assert_eq!(arc.large_arc_flag, 0);
    }

    #[test]
    fn hundred_percent_reaches_the_rightmost_point() {
        let g = gauge();
        let arc = g.arc_for(100.0);
        assert!((arc.end_x - (g.cx + g.radius)).abs() < EPS);
        assert!((arc.end_y - g.cy).abs() < EPS);
        assert_eq!(arc.large_arc_flag, 1);
    }

    #[test]
    fn fifty_percent_is_the_apex_with_small_arc() {
        let g = gauge();
        let arc = g.arc_for(50.0);
        assert!((arc.end_x - g.cx).abs() < EPS);
        assert!((arc.end_y - (g.cy + g.radius)).abs() < EPS);
        assert_eq!(arc.large_arc_flag, 0);
    }

    #[test]
    fn sweep_is_always_clockwise() {
        let g = gauge();
        for p in [0.0, 12.5, 50.0, 75.0, 100.0] {
            assert_eq!(g.arc_for(p).sweep_flag, 1);
        }
    }

    #[test]
    fn out_of_range_input_is_clamped_onto_the_semicircle() {
        let g = gauge();
        assert_eq!(g.arc_for(-20.0), g.arc_for(0.0));
        assert_eq!(g.arc_for(250.0), g.arc_for(100.0));
        let arc = g.arc_for(f64::NAN);
        assert!(arc.end_x.is_finite() && arc.end_y.is_finite());
    }

    #[test]
    fn endpoint_stays_on_the_circle_for_any_percent() {
        let g = gauge();
        for p in [0.0, 3.0, 33.3, 50.0, 66.6, 99.9, 100.0] {
            let arc = g.arc_for(p);
            let dx = arc.end_x - g.cx;
            let dy = arc.end_y - g.cy;
            assert!(((dx * dx + dy * dy).sqrt() - g.radius).abs() < 1e-9, "p={p}");
        }
    }

    #[test]
    fn path_string_carries_flags_and_radius() {
        let g = gauge();
        let path = g.path_for(75.0);
        assert!(path.starts_with("M 20.000 100.000 A 80.000 80.000 0 1 1 "));
    }

    #[test]
    fn dash_length_is_proportional_to_the_track() {
        let g = gauge();
        assert!((g.dash_length(0.0) - 0.0).abs() < EPS);
        assert!((g.dash_length(50.0) - g.track_length() / 2.0).abs() < EPS);
        assert!((g.dash_length(100.0) - g.track_length()).abs() < EPS);
    }
}
