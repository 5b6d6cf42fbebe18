//! SVG line chart for the multiplier sweep
//!
//! Three series are drawn: the multiplier line, a dashed vertical marker at
//! the transition point spanning the observed min/max, and a dashed zero line
//! spanning the sweep's input range.

use timewarp_core::{SweepPoint, TRANSITION};

use crate::summary::Summary;

const LINE_COLOR: &str = "#00bcd4";
const TRANSITION_COLOR: &str = "#f44336";
const ZERO_COLOR: &str = "#9e9e9e";
const AXIS_COLOR: &str = "#f0f0f0";
const GRID_COLOR: &str = "#2c2c2c";
const PLOT_BG: &str = "#1e1e1e";
const PAPER_BG: &str = "#121212";

const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;

const X_TICK_STEP: f64 = 10.0;
const Y_TICKS: usize = 6;

/// Chart renderer with a fixed canvas size
pub struct ChartRenderer {
    width: u32,
    height: u32,
}

/// Maps data coordinates onto the plot area
struct Scale {
    x0: f64,
    x1: f64,
    y0: f64,
    y1: f64,
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl Scale {
    fn x(&self, input: f64) -> f64 {
        self.left + (input - self.x0) / (self.x1 - self.x0) * (self.right - self.left)
    }

    fn y(&self, multiplier: f64) -> f64 {
        self.bottom - (multiplier - self.y0) / (self.y1 - self.y0) * (self.bottom - self.top)
    }
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self::new(1100, 450)
    }
}

impl ChartRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Render the chart. `sweep` must be non-empty and ascending.
    pub fn render_svg(&self, sweep: &[SweepPoint], summary: &Summary) -> String {
        let scale = self.scale(sweep, summary);

        let first = sweep.first().map_or(scale.x0, |p| p.input);
        let last = sweep.last().map_or(scale.x1, |p| p.input);

        let line_points = sweep
            .iter()
            .map(|p| format!("{:.2},{:.2}", scale.x(p.input), scale.y(p.multiplier)))
            .collect::<Vec<_>>()
            .join(" ");

        let hover_targets = sweep
            .iter()
            .map(|p| {
                format!(
                    r#"<circle class="point" cx="{:.2}" cy="{:.2}" r="3" fill="{}"><title>tw = {}, multiplier = {:.4}</title></circle>"#,
                    scale.x(p.input),
                    scale.y(p.multiplier),
                    LINE_COLOR,
                    p.input,
                    p.multiplier
                )
            })
            .collect::<Vec<_>>()
            .join("\n    ");

        let transition = format!(
            r#"<line id="transition-line" x1="{x:.2}" y1="{y1:.2}" x2="{x:.2}" y2="{y2:.2}" stroke="{c}" stroke-width="2" stroke-dasharray="6,4"/>"#,
            x = scale.x(TRANSITION),
            y1 = scale.y(summary.min.multiplier),
            y2 = scale.y(summary.max.multiplier),
            c = TRANSITION_COLOR,
        );

        let zero = format!(
            r#"<line id="zero-line" x1="{x1:.2}" y1="{y:.2}" x2="{x2:.2}" y2="{y:.2}" stroke="{c}" stroke-width="1.5" stroke-dasharray="6,4"/>"#,
            x1 = scale.x(first),
            x2 = scale.x(last),
            y = scale.y(0.0),
            c = ZERO_COLOR,
        );

        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" id="multiplier-chart" viewBox="0 0 {w} {h}" width="100%" preserveAspectRatio="xMidYMid meet" font-family="inherit">
  <rect width="100%" height="100%" fill="{paper}"/>
  <rect x="{left:.2}" y="{top:.2}" width="{pw:.2}" height="{ph:.2}" fill="{plot}"/>
  <text x="{cx:.2}" y="28" fill="{axis}" font-size="18" text-anchor="middle">timewarp multiplier analysis</text>
  {axes}
  <g clip-path="url(#plot-area)">
    <polyline id="multiplier-line" points="{line}" fill="none" stroke="{line_color}" stroke-width="2"/>
    {transition}
    {zero}
    {hover}
  </g>
  <defs>
    <clipPath id="plot-area"><rect x="{left:.2}" y="{top:.2}" width="{pw:.2}" height="{ph:.2}"/></clipPath>
  </defs>
  {legend}
</svg>"#,
            w = self.width,
            h = self.height,
            paper = PAPER_BG,
            plot = PLOT_BG,
            axis = AXIS_COLOR,
            left = scale.left,
            top = scale.top,
            pw = scale.right - scale.left,
            ph = scale.bottom - scale.top,
            cx = (scale.left + scale.right) / 2.0,
            axes = self.render_axes(&scale),
            line = line_points,
            line_color = LINE_COLOR,
            transition = transition,
            zero = zero,
            hover = hover_targets,
            legend = self.render_legend(&scale),
        )
    }

    fn scale(&self, sweep: &[SweepPoint], summary: &Summary) -> Scale {
        let (mut x0, mut x1) = match (sweep.first(), sweep.last()) {
            (Some(a), Some(b)) => (a.input, b.input),
            _ => (TRANSITION - 1.0, TRANSITION + 1.0),
        };
        if x1 <= x0 {
            x0 -= 1.0;
            x1 += 1.0;
        }

        // keep zero visible so the reference line always lands in the plot
        let lo = summary.min.multiplier.min(0.0);
        let hi = summary.max.multiplier.max(0.0);
        let pad = if hi > lo { (hi - lo) * 0.08 } else { 1.0 };

        Scale {
            x0,
            x1,
            y0: lo - pad,
            y1: hi + pad,
            left: MARGIN_LEFT,
            right: f64::from(self.width) - MARGIN_RIGHT,
            top: MARGIN_TOP,
            bottom: f64::from(self.height) - MARGIN_BOTTOM,
        }
    }

    fn render_axes(&self, scale: &Scale) -> String {
        let mut out = Vec::new();

        out.push(format!(
            r#"<line x1="{l:.2}" y1="{b:.2}" x2="{r:.2}" y2="{b:.2}" stroke="{c}"/>"#,
            l = scale.left,
            r = scale.right,
            b = scale.bottom,
            c = AXIS_COLOR
        ));
        out.push(format!(
            r#"<line x1="{l:.2}" y1="{t:.2}" x2="{l:.2}" y2="{b:.2}" stroke="{c}"/>"#,
            l = scale.left,
            t = scale.top,
            b = scale.bottom,
            c = AXIS_COLOR
        ));

        let mut tick = (scale.x0 / X_TICK_STEP).ceil() * X_TICK_STEP;
        while tick <= scale.x1 {
            let x = scale.x(tick);
            out.push(format!(
                r#"<line x1="{x:.2}" y1="{t:.2}" x2="{x:.2}" y2="{b:.2}" stroke="{g}"/><text class="x-tick" x="{x:.2}" y="{ty:.2}" fill="{c}" font-size="12" text-anchor="middle">{label}</text>"#,
                t = scale.top,
                b = scale.bottom,
                ty = scale.bottom + 18.0,
                g = GRID_COLOR,
                c = AXIS_COLOR,
                label = tick
            ));
            tick += X_TICK_STEP;
        }

        for i in 0..Y_TICKS {
            let value = scale.y0 + (scale.y1 - scale.y0) * i as f64 / (Y_TICKS - 1) as f64;
            let y = scale.y(value);
            out.push(format!(
                r#"<line x1="{l:.2}" y1="{y:.2}" x2="{r:.2}" y2="{y:.2}" stroke="{g}"/><text class="y-tick" x="{tx:.2}" y="{ty:.2}" fill="{c}" font-size="12" text-anchor="end">{value:.3}</text>"#,
                l = scale.left,
                r = scale.right,
                tx = scale.left - 8.0,
                ty = y + 4.0,
                g = GRID_COLOR,
                c = AXIS_COLOR,
            ));
        }

        out.push(format!(
            r#"<text x="{x:.2}" y="{y:.2}" fill="{c}" font-size="14" text-anchor="middle">tw value</text>"#,
            x = (scale.left + scale.right) / 2.0,
            y = f64::from(self.height) - 15.0,
            c = AXIS_COLOR
        ));
        out.push(format!(
            r#"<text x="20" y="{y:.2}" fill="{c}" font-size="14" text-anchor="middle" transform="rotate(-90 20 {y:.2})">multiplier</text>"#,
            y = (scale.top + scale.bottom) / 2.0,
            c = AXIS_COLOR
        ));

        out.join("\n  ")
    }

    fn render_legend(&self, scale: &Scale) -> String {
        let entries = [
            ("Multiplier", LINE_COLOR, ""),
            ("Transition point", TRANSITION_COLOR, r#" stroke-dasharray="6,4""#),
            ("Zero line", ZERO_COLOR, r#" stroke-dasharray="6,4""#),
        ];

        let x = scale.right - 170.0;
        entries
            .iter()
            .enumerate()
            .map(|(i, (name, color, dash))| {
                let y = scale.top + 16.0 + i as f64 * 20.0;
                format!(
                    r#"<g class="legend"><line x1="{x:.2}" y1="{y:.2}" x2="{x2:.2}" y2="{y:.2}" stroke="{color}" stroke-width="2"{dash}/><text x="{tx:.2}" y="{ty:.2}" fill="{c}" font-size="12">{name}</text></g>"#,
                    x2 = x + 28.0,
                    tx = x + 36.0,
                    ty = y + 4.0,
                    c = AXIS_COLOR,
                )
            })
            .collect::<Vec<_>>()
            .join("\n  ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timewarp_core::Sweep;

    fn render_default() -> String {
        let sweep = Sweep::default().points().unwrap();
        let summary = Summary::from_sweep(&sweep).unwrap();
        ChartRenderer::default().render_svg(&sweep, &summary)
    }

    #[test]
    fn test_render_svg() {
        let svg = render_default();

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("viewBox=\"0 0 1100 450\""));
        assert!(svg.contains("id=\"multiplier-line\""));
        assert!(svg.contains("id=\"transition-line\""));
        assert!(svg.contains("id=\"zero-line\""));
    }

    #[test]
    fn test_one_hover_target_per_point() {
        let svg = render_default();
        assert_eq!(svg.matches("class=\"point\"").count(), 61);
        assert!(svg.contains("<title>tw = 90, multiplier = -0.0480</title>"));
    }

    #[test]
    fn test_ticks_cover_range() {
        let svg = render_default();
        assert_eq!(svg.matches("class=\"x-tick\"").count(), 7);
        assert!(svg.contains(">150</text>"));
        assert_eq!(svg.matches("class=\"y-tick\"").count(), Y_TICKS);
    }

    #[test]
    fn test_reference_lines_geometry() {
        let sweep = Sweep::default().points().unwrap();
        let summary = Summary::from_sweep(&sweep).unwrap();
        let renderer = ChartRenderer::default();
        let scale = renderer.scale(&sweep, &summary);

        // transition marker sits between the first and last input
        let x = scale.x(TRANSITION);
        assert!(x > scale.x(90.0) && x < scale.x(150.0));

        // higher multipliers are drawn higher up
        assert!(scale.y(summary.max.multiplier) < scale.y(0.0));
        assert!(scale.y(summary.min.multiplier) > scale.y(0.0));
    }

    #[test]
    fn test_single_point_does_not_divide_by_zero() {
        let sweep = vec![SweepPoint { input: 100.0, multiplier: 0.0 }];
        let summary = Summary::from_sweep(&sweep).unwrap();
        let svg = ChartRenderer::default().render_svg(&sweep, &summary);
        assert!(!svg.contains("NaN"));
        assert!(!svg.contains("inf"));
    }
}
