//! Donut stand-in: a proportional share bar with a legend

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::domain::widget::{shares, Slice};
use crate::ui::format;

pub struct ShareBar<'a> {
    slices: &'a [Slice],
}

impl<'a> ShareBar<'a> {
    pub fn new(slices: &'a [Slice]) -> Self {
        Self { slices }
    }
}

/// Column widths of each segment; rounding leftovers go to the largest slice
pub(crate) fn segment_widths(slices: &[Slice], width: u16) -> Vec<u16> {
    let pct = shares(slices);
    let mut widths: Vec<u16> = pct
        .iter()
        .map(|p| ((p / 100.0) * f64::from(width)).floor() as u16)
        .collect();
    let used: u16 = widths.iter().sum();
    let largest = pct
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i);
    if let (Some(idx), true) = (largest, pct.iter().any(|p| *p > 0.0)) {
        widths[idx] += width.saturating_sub(used);
    }
    widths
}

impl<'a> Widget for ShareBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height == 0 || self.slices.is_empty() {
            return;
        }

        let bar_rows = if area.height as usize > self.slices.len() + 2 { 2 } else { 1 };
        let mut x = area.x;
        for (slice, width) in self.slices.iter().zip(segment_widths(self.slices, area.width)) {
            for dx in 0..width {
                for dy in 0..bar_rows {
                    buf.get_mut(x + dx, area.y + dy)
                        .set_char('█')
                        .set_style(Style::default().fg(slice.color));
                }
            }
            x += width;
        }

        let pct = shares(self.slices);
        let label_width = self.slices.iter().map(|s| s.label.chars().count()).max().unwrap_or(0);
        let max_y = area.y + area.height;
        for (i, (slice, share)) in self.slices.iter().zip(pct).enumerate() {
            let y = area.y + bar_rows + 1 + i as u16;
            if y >= max_y {
                break;
            }
            buf.set_string(area.x, y, "■ ", Style::default().fg(slice.color));
            let text = format!(
                "{:<label_width$}  {:>5}  {:>5.1}%",
                slice.label,
                format::value(slice.value, 0, ""),
                share,
            );
            buf.set_stringn(
                area.x + 2,
                y,
                text,
                area.width.saturating_sub(2) as usize,
                Style::default().fg(Color::White),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slices(values: &[f64]) -> Vec<Slice> {
        values
            .iter()
            .map(|&value| Slice {
                label: "s",
                value,
                color: Color::Gray,
            })
            .collect()
    }

    #[test]
    fn test_segments_fill_width() {
        let widths = segment_widths(&slices(&[220.0, 180.0, 120.0]), 40);
        assert_eq!(widths.iter().sum::<u16>(), 40);
        assert!(widths[0] >= widths[1] && widths[1] >= widths[2]);
    }

    #[test]
    fn test_zero_shares_leave_bar_empty() {
        let widths = segment_widths(&slices(&[0.0, 0.0]), 10);
        assert_eq!(widths, vec![0, 0]);
    }
}
