//! Centred funnel bars, one band per stage

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::domain::widget::{conversion_rates, Stage};
use crate::ui::format;

pub struct Funnel<'a> {
    stages: &'a [Stage],
}

impl<'a> Funnel<'a> {
    pub fn new(stages: &'a [Stage]) -> Self {
        Self { stages }
    }
}

/// Bar width for `value` when the widest stage spans `width` columns
pub(crate) fn band_width(value: f64, max: f64, width: u16) -> u16 {
    if max <= 0.0 {
        return 0;
    }
    let scaled = (value / max * f64::from(width)).round() as u16;
    scaled.clamp(1, width)
}

impl<'a> Widget for Funnel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || self.stages.is_empty() {
            return;
        }

        let count = self.stages.len() as u16;
        let band = (area.height / count).clamp(1, 3);
        let max = self.stages.iter().map(|s| s.value).fold(0.0, f64::max);
        let rates = conversion_rates(self.stages);

        for (i, (stage, rate)) in self.stages.iter().zip(rates).enumerate() {
            let top = area.y + i as u16 * band;
            if top >= area.y + area.height {
                break;
            }
            let width = band_width(stage.value, max, area.width);
            let left = area.x + (area.width - width) / 2;
            let fill = Style::default().fg(stage.color);
            for dy in 0..band.min(area.y + area.height - top) {
                for dx in 0..width {
                    buf.get_mut(left + dx, top + dy).set_char('█').set_style(fill);
                }
            }

            let label = format!(
                " {} {} ({:.0}%) ",
                stage.label,
                format::value(stage.value, 0, ""),
                rate
            );
            let label_len = label.chars().count() as u16;
            let label_x = area.x + area.width.saturating_sub(label_len) / 2;
            let label_y = top + (band.saturating_sub(1)) / 2;
            buf.set_stringn(
                label_x,
                label_y,
                label,
                area.width as usize,
                Style::default()
                    .fg(Color::White)
                    .bg(stage.color)
                    .add_modifier(Modifier::BOLD),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_width_scales_with_value() {
        assert_eq!(band_width(929.0, 929.0, 40), 40);
        assert_eq!(band_width(353.0, 929.0, 40), 15);
        assert_eq!(band_width(1.0, 929.0, 40), 1);
        assert_eq!(band_width(5.0, 0.0, 40), 0);
    }
}
