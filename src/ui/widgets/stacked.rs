//! Horizontal stacked bars with a series legend
//!
//! One row per category. Segments are laid end to end in series order and
//! the stack total is printed after the bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::domain::widget::BarSpec;
use crate::ui::format;

pub struct StackedBars<'a> {
    spec: &'a BarSpec,
}

impl<'a> StackedBars<'a> {
    pub fn new(spec: &'a BarSpec) -> Self {
        Self { spec }
    }
}

/// Segment widths for one stack, scaled so `peak` spans `width` columns
pub(crate) fn stack_widths(values: &[f64], peak: f64, width: u16) -> Vec<u16> {
    if peak <= 0.0 {
        return vec![0; values.len()];
    }
    let scale = f64::from(width) / peak;
    let mut acc = 0.0;
    let mut drawn = 0u16;
    values
        .iter()
        .map(|v| {
            // round the running edge so segments never drift past the total
            acc += v.max(0.0) * scale;
            let edge = (acc.round() as u16).min(width);
            let w = edge.saturating_sub(drawn);
            drawn = edge;
            w
        })
        .collect()
}

impl<'a> Widget for StackedBars<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spec = self.spec;
        if area.width < 8 || area.height == 0 || spec.categories.is_empty() {
            return;
        }

        let label_width = spec
            .categories
            .iter()
            .map(|c| c.chars().count())
            .max()
            .unwrap_or(0)
            .min(usize::from(area.width / 3)) as u16;
        let totals = spec.totals();
        let total_text: Vec<String> = totals
            .iter()
            .map(|t| format::value(*t, format::precision_for(&totals), spec.unit))
            .collect();
        let total_width = total_text.iter().map(|t| t.chars().count()).max().unwrap_or(0) as u16;
        let bar_x = area.x + label_width + 1;
        let bar_width = area.width.saturating_sub(label_width + total_width + 2);
        let peak = spec.peak();

        // legend takes the last row when there is room for it
        let legend = area.height as usize > spec.categories.len();
        let rows = if legend { area.height - 1 } else { area.height };
        let pitch = (rows / spec.categories.len() as u16).clamp(1, 2);

        for (i, category) in spec.categories.iter().enumerate() {
            let y = area.y + i as u16 * pitch;
            if y >= area.y + rows {
                break;
            }
            buf.set_stringn(
                area.x,
                y,
                category,
                label_width as usize,
                Style::default().fg(Color::Gray),
            );

            let values: Vec<f64> = spec
                .series
                .iter()
                .map(|s| s.values.get(i).copied().unwrap_or(0.0))
                .collect();
            let mut x = bar_x;
            for (series, width) in spec.series.iter().zip(stack_widths(&values, peak, bar_width)) {
                for dx in 0..width {
                    buf.get_mut(x + dx, y)
                        .set_char('█')
                        .set_style(Style::default().fg(series.color));
                }
                x += width;
            }
            let total = &total_text[i];
            if x + 1 + total.chars().count() as u16 <= area.x + area.width {
                buf.set_string(x + 1, y, total, Style::default().fg(Color::White));
            }
        }

        if legend {
            let y = area.y + area.height - 1;
            let mut x = area.x;
            for series in &spec.series {
                let entry = format!("{} ", series.name);
                let needed = entry.chars().count() as u16 + 2;
                if x + needed > area.x + area.width {
                    break;
                }
                buf.set_string(x, y, "■ ", Style::default().fg(series.color));
                buf.set_string(x + 2, y, &entry, Style::default().fg(Color::DarkGray));
                x += needed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_fills_to_scaled_total() {
        let widths = stack_widths(&[30.0, 12.0], 42.0, 42);
        assert_eq!(widths, vec![30, 12]);

        let widths = stack_widths(&[1.0, 1.0, 1.0], 3.0, 10);
        assert_eq!(widths.iter().sum::<u16>(), 10);
    }

    #[test]
    fn test_shorter_stack_is_proportional() {
        let widths = stack_widths(&[10.0, 11.0], 42.0, 42);
        assert_eq!(widths.iter().sum::<u16>(), 21);
    }

    #[test]
    fn test_zero_peak_draws_nothing() {
        assert_eq!(stack_widths(&[0.0, 0.0], 0.0, 20), vec![0, 0]);
    }
}
