//! Mini sparkline widget for inline trend hints in chart legends

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

pub(crate) const BAR_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// A compact inline sparkline (single line).
///
/// Values are scaled between the series minimum and maximum, so a series
/// that moves a few percent still shows its shape.
pub struct MiniSparkline<'a> {
    data: &'a [f64],
    style: Style,
}

impl<'a> MiniSparkline<'a> {
    pub fn new(data: &'a [f64]) -> Self {
        Self {
            data,
            style: Style::default().fg(Color::Cyan),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl<'a> Widget for MiniSparkline<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || self.data.is_empty() {
            return;
        }

        for (i, ch) in sparkline_text(self.data, area.width as usize)
            .chars()
            .enumerate()
        {
            let x = area.x + i as u16;
            buf.get_mut(x, area.y).set_char(ch).set_style(self.style);
        }
    }
}

/// Level 0..=7 for `value` within `[lo, hi]`
pub(crate) fn level(value: f64, lo: f64, hi: f64) -> usize {
    let span = hi - lo;
    if span <= f64::EPSILON {
        return 3;
    }
    (((value - lo) / span) * 7.0).round().clamp(0.0, 7.0) as usize
}

/// Format sparkline data as inline text, keeping the last `width` values
pub fn sparkline_text(data: &[f64], width: usize) -> String {
    if data.is_empty() || width == 0 {
        return String::new();
    }

    let data_len = data.len().min(width);
    let data_start = data.len().saturating_sub(data_len);
    let visible = &data[data_start..];

    let lo = visible.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = visible.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    visible
        .iter()
        .map(|&value| BAR_CHARS[level(value, lo, hi)])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparkline_text() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let text = sparkline_text(&data, 8);
        assert_eq!(text.chars().count(), 8);
        assert!(text.starts_with('▁'));
        assert!(text.ends_with('█'));
    }

    #[test]
    fn test_sparkline_keeps_latest_values() {
        let text = sparkline_text(&[9.0, 1.0, 2.0], 2);
        assert_eq!(text, "▁█");
    }

    #[test]
    fn test_sparkline_text_empty() {
        let data: [f64; 0] = [];
        assert!(sparkline_text(&data, 8).is_empty());
    }

    #[test]
    fn test_flat_series_sits_mid_height() {
        assert_eq!(sparkline_text(&[4.0, 4.0], 2), "▄▄");
    }
}
