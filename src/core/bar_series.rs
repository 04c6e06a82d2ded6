use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{DataRecord, FieldSelector, compute_scale, trailing_window};
use crate::error::ChartResult;

/// Default number of trailing records shown by dashboard bar widgets.
pub const DEFAULT_BAR_WINDOW: usize = 8;

/// One drawable bar of a proportional bar series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarDescriptor {
    pub label: String,
    pub value: f64,
    /// Height relative to the scale of the full series, in `[0, 100]`.
    pub height_percent: f64,
    /// Position inside the rendered window.
    pub index: usize,
}

impl BarDescriptor {
    /// Stagger delay for entry animations: `step * index`.
    #[must_use]
    pub fn animation_delay(&self, step: Duration) -> Duration {
        step.saturating_mul(u32::try_from(self.index).unwrap_or(u32::MAX))
    }
}

/// Builds proportional bars for the last `window_size` records.
///
/// The scale is taken over the whole input rather than the window, so bar
/// heights stay comparable as the window moves along the series. Output length
/// is `min(window_size, records.len())`.
pub fn build_bars(
    records: &[DataRecord],
    value_fields: &FieldSelector,
    label_fields: &FieldSelector,
    window_size: usize,
) -> ChartResult<Vec<BarDescriptor>> {
    let scale = compute_scale(records, value_fields)?;
    let window = trailing_window(records, window_size);

    let bars = window
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let value = value_fields.resolve_value(record)?;
            Ok(BarDescriptor {
                label: label_fields.resolve_label(record),
                value,
                height_percent: scale.percent_of(value),
                index,
            })
        })
        .collect::<ChartResult<Vec<_>>>()?;

    debug!(
        record_count = records.len(),
        window_size,
        bar_count = bars.len(),
        scale = scale.divisor(),
        "built bar series"
    );
    Ok(bars)
}
