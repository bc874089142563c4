//! Filled area chart
//!
//! Stretches the sparkline idea over the whole area: each column is filled
//! up to the interpolated value, with a partial block on the top cell.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use super::sparkline::BAR_CHARS;

pub struct AreaChart<'a> {
    values: &'a [f64],
    labels: &'a [String],
    bounds: (f64, f64),
    color: Color,
    axis_style: Style,
}

impl<'a> AreaChart<'a> {
    pub fn new(values: &'a [f64], labels: &'a [String]) -> Self {
        let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = values.iter().copied().fold(0.0, f64::max);
        Self {
            values,
            labels,
            bounds: (if lo.is_finite() { lo } else { 0.0 }, hi),
            color: Color::Red,
            axis_style: Style::default().fg(Color::DarkGray),
        }
    }

    /// Value range mapped to the bottom and top of the plot
    pub fn bounds(mut self, lo: f64, hi: f64) -> Self {
        self.bounds = (lo, hi);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Value at column `x` of `width`, linearly interpolated between points
pub(crate) fn sample(values: &[f64], x: u16, width: u16) -> f64 {
    match values.len() {
        0 => 0.0,
        1 => values[0],
        n => {
            let span = f64::from(width.saturating_sub(1).max(1));
            let pos = f64::from(x) / span * (n - 1) as f64;
            let i = (pos.floor() as usize).min(n - 2);
            let t = pos - i as f64;
            values[i] + (values[i + 1] - values[i]) * t
        }
    }
}

impl<'a> Widget for AreaChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height < 2 || self.values.is_empty() {
            return;
        }

        // bottom row holds the category labels
        let plot = Rect {
            height: area.height - 1,
            ..area
        };
        let (lo, hi) = self.bounds;
        let span = (hi - lo).max(f64::EPSILON);
        let eighths_total = u32::from(plot.height) * 8;
        let style = Style::default().fg(self.color);

        for dx in 0..plot.width {
            let value = sample(self.values, dx, plot.width);
            let ratio = ((value - lo) / span).clamp(0.0, 1.0);
            let eighths = (ratio * f64::from(eighths_total)).round() as u32;
            let full = eighths / 8;
            let partial = eighths % 8;
            for dy in 0..plot.height {
                let level = u32::from(dy);
                let y = plot.y + plot.height - 1 - dy;
                let ch = if level < full {
                    BAR_CHARS[7]
                } else if level == full && partial > 0 {
                    BAR_CHARS[partial as usize - 1]
                } else {
                    continue;
                };
                buf.get_mut(plot.x + dx, y).set_char(ch).set_style(style);
            }
        }

        let label_y = area.y + area.height - 1;
        let n = self.labels.len();
        for (i, label) in self.labels.iter().enumerate() {
            let x = if n <= 1 {
                0
            } else {
                (i as u32 * u32::from(area.width.saturating_sub(2)) / (n as u32 - 1)) as u16
            };
            let len = label.chars().count() as u16;
            let x = x.min(area.width.saturating_sub(len));
            buf.set_stringn(
                area.x + x,
                label_y,
                label,
                area.width.saturating_sub(x) as usize,
                self.axis_style,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_hits_points_at_edges() {
        let values = [8.5, 9.2, 10.1];
        assert_eq!(sample(&values, 0, 11), 8.5);
        assert!((sample(&values, 10, 11) - 10.1).abs() < 1e-9);
        assert!((sample(&values, 5, 11) - 9.2).abs() < 1e-9);
    }

    #[test]
    fn test_sample_single_point() {
        assert_eq!(sample(&[3.0], 4, 10), 3.0);
        assert_eq!(sample(&[], 4, 10), 0.0);
    }
}
