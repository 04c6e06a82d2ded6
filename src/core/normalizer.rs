use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{DataRecord, FieldSelector};
use crate::error::ChartResult;

/// Divisor used when the observed maximum is not positive.
pub const DEGENERATE_SCALE_DIVISOR: f64 = 1.0;

/// Reference maximum against which bar values are expressed as percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizationScale {
    max_value: f64,
    record_count: usize,
}

impl NormalizationScale {
    /// Raw maximum of the resolved values; `0.0` for an empty sequence.
    #[must_use]
    pub fn max_value(self) -> f64 {
        self.max_value
    }

    #[must_use]
    pub fn record_count(self) -> usize {
        self.record_count
    }

    /// True when the maximum cannot be divided by.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.max_value <= 0.0
    }

    /// Positive value to divide by. Falls back to `DEGENERATE_SCALE_DIVISOR`
    /// for empty, all-zero or all-negative input.
    #[must_use]
    pub fn divisor(self) -> f64 {
        if self.is_degenerate() {
            DEGENERATE_SCALE_DIVISOR
        } else {
            self.max_value
        }
    }

    /// Expresses `value` as a percentage of the scale, clamped to `[0, 100]`.
    #[must_use]
    pub fn percent_of(self, value: f64) -> f64 {
        (value / self.divisor() * 100.0).clamp(0.0, 100.0)
    }
}

/// Computes the common bar scale over every record in `records`.
///
/// Each record contributes the value resolved by `fields` (`0.0` when none of
/// the candidates is present). The result does not depend on record order.
pub fn compute_scale(
    records: &[DataRecord],
    fields: &FieldSelector,
) -> ChartResult<NormalizationScale> {
    let mut max_value: Option<OrderedFloat<f64>> = None;
    for record in records {
        let value = OrderedFloat(fields.resolve_value(record)?);
        max_value = Some(max_value.map_or(value, |current| current.max(value)));
    }

    let scale = NormalizationScale {
        max_value: max_value.map_or(0.0, |value| value.0),
        record_count: records.len(),
    };
    debug!(
        record_count = scale.record_count,
        max_value = scale.max_value,
        "computed normalization scale"
    );
    if scale.is_degenerate() {
        warn!(
            record_count = scale.record_count,
            max_value = scale.max_value,
            divisor = DEGENERATE_SCALE_DIVISOR,
            "normalization scale is not positive; using sentinel divisor"
        );
    }
    Ok(scale)
}
