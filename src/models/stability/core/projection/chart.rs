use serde::{Deserialize, Serialize};

use super::{DisplayRange, ProjectedInterval, ResolvedProjection};

/// Label of the chart's vertical axis.
pub const Y_LABEL: &str = "Stable phases";

/// One horizontal bar, anchored at its bottom edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub phase: String,
    /// Clamped display value of the interval start.
    pub left: f64,
    /// Clamped end minus clamped start; negative when the axis runs against
    /// the interval.
    pub width: f64,
    /// Horizontal position of the phase label.
    pub center: f64,
    /// Row of the bar, counted from zero in interval order.
    pub y: f64,
    /// Vertical position of the phase label.
    pub label_y: f64,
    pub color: String,
    pub label_color: String,
}

/// Renderer-independent description of a stability range bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub x_label: String,
    pub y_label: String,
    pub x_range: (f64, f64),
    /// `(bar_height − 1, number of bars)`.
    pub y_range: (f64, f64),
    pub bar_height: f64,
    pub bars: Vec<Bar>,
}

impl Chart {
    pub(super) fn layout(
        settings: &ResolvedProjection,
        range: DisplayRange,
        projected: &[ProjectedInterval],
    ) -> Self {
        let bar_height = *settings.bar_height.as_ref();

        let bars: Vec<Bar> = projected
            .iter()
            .enumerate()
            .map(|(row, interval)| {
                let left = range.clamp(interval.start);
                let right = range.clamp(interval.end);
                #[allow(clippy::cast_precision_loss)]
                let y = row as f64;

                Bar {
                    phase: interval.phase.clone(),
                    left,
                    width: right - left,
                    center: 0.5 * (left + right),
                    y,
                    label_y: y + 0.5 * bar_height,
                    color: settings.bar_color.clone(),
                    label_color: settings.label_color.clone(),
                }
            })
            .collect();

        #[allow(clippy::cast_precision_loss)]
        let rows = bars.len() as f64;

        Self {
            x_label: settings.x_label(),
            y_label: Y_LABEL.to_owned(),
            x_range: (range.min, range.max),
            y_range: (bar_height - 1.0, rows),
            bar_height,
            bars,
        }
    }
}
