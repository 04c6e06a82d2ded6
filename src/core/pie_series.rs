use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::primitives::FULL_TURN_DEG;
use crate::core::{DataRecord, FieldSelector};
use crate::error::{ChartError, ChartResult};

/// Category to fill-key mapping used by pie widgets.
///
/// Known categories map explicitly; anything else cycles through `fallback`
/// by slice index, so the same input always gets the same fills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillPalette {
    #[serde(default)]
    pub explicit: IndexMap<String, String>,
    pub fallback: Vec<String>,
}

impl FillPalette {
    pub fn new<I, S>(fallback: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let palette = Self {
            explicit: IndexMap::new(),
            fallback: fallback.into_iter().map(Into::into).collect(),
        };
        palette.validate()?;
        Ok(palette)
    }

    #[must_use]
    pub fn with_fill(mut self, category: impl Into<String>, fill_key: impl Into<String>) -> Self {
        self.explicit.insert(category.into(), fill_key.into());
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.fallback.is_empty() {
            return Err(ChartError::InvalidInput(
                "fill palette requires at least one fallback key".to_owned(),
            ));
        }
        let blank_explicit = self
            .explicit
            .iter()
            .any(|(category, key)| category.is_empty() || key.is_empty());
        if blank_explicit || self.fallback.iter().any(String::is_empty) {
            return Err(ChartError::InvalidInput(
                "fill palette entries must not be empty".to_owned(),
            ));
        }
        Ok(())
    }

    /// Resolves the fill key for `category` at slice position `index`.
    pub fn fill_key(&self, category: &str, index: usize) -> ChartResult<&str> {
        if let Some(key) = self.explicit.get(category) {
            return Ok(key.as_str());
        }
        if self.fallback.is_empty() {
            return Err(ChartError::InvalidInput(
                "fill palette requires at least one fallback key".to_owned(),
            ));
        }
        Ok(self.fallback[index % self.fallback.len()].as_str())
    }
}

impl Default for FillPalette {
    /// Risk-level colors used by the registry dashboards.
    fn default() -> Self {
        Self {
            explicit: IndexMap::from([
                ("Low".to_owned(), "green".to_owned()),
                ("Medium".to_owned(), "yellow".to_owned()),
                ("High".to_owned(), "red".to_owned()),
            ]),
            fallback: ["teal", "blue", "purple", "orange", "gray"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }
}

/// Angular extent of one category in a pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSliceDescriptor {
    pub label: String,
    pub value: f64,
    pub percentage: f64,
    pub start_angle_deg: f64,
    pub end_angle_deg: f64,
    /// SVG large-arc flag: the slice spans more than half the circle.
    pub sweeps_more_than_half: bool,
    pub fill_key: String,
    pub index: usize,
}

impl PieSliceDescriptor {
    #[must_use]
    pub fn sweep_angle_deg(&self) -> f64 {
        self.end_angle_deg - self.start_angle_deg
    }
}

/// Splits the circle into contiguous slices proportional to `count_field`.
///
/// Slices start at 0 degrees, follow input order and the last non-empty one
/// ends at exactly 360 degrees. Records without the count field count as zero
/// and still get a zero-width slice so indices line up with the input.
///
/// Fails with [`ChartError::DegenerateInput`] when the counts sum to zero,
/// which includes an empty sequence.
pub fn build_slices(
    records: &[DataRecord],
    count_field: &FieldSelector,
    label_fields: &FieldSelector,
    palette: &FillPalette,
) -> ChartResult<Vec<PieSliceDescriptor>> {
    palette.validate()?;

    let counts = records
        .iter()
        .map(|record| {
            let count = count_field.resolve_value(record)?;
            if count < 0.0 {
                return Err(ChartError::InvalidInput(format!(
                    "pie count must be >= 0, got {count}"
                )));
            }
            Ok(count)
        })
        .collect::<ChartResult<Vec<f64>>>()?;

    // Counts are rescaled by the largest one so the sum cannot overflow.
    let max_count = counts.iter().copied().fold(0.0_f64, f64::max);
    if max_count <= 0.0 {
        return Err(ChartError::DegenerateInput(format!(
            "pie counts over {} records sum to zero",
            records.len()
        )));
    }
    let weights: Vec<f64> = counts.iter().map(|count| count / max_count).collect();
    let total_weight: f64 = weights.iter().sum();

    // Zero-weight slices stay zero-width; the last positive one closes the circle.
    let last_filled = weights.iter().rposition(|weight| *weight > 0.0).unwrap_or(0);
    let slices = records
        .iter()
        .zip(counts.iter().copied().zip(weights))
        .enumerate()
        .scan(0.0_f64, |current_angle, (index, (record, (count, weight)))| {
            let start = *current_angle;
            let end = if weight == 0.0 {
                start
            } else if index == last_filled {
                FULL_TURN_DEG.max(start)
            } else {
                start + weight / total_weight * FULL_TURN_DEG
            };
            *current_angle = end;
            Some((index, record, count, weight, start, end))
        })
        .map(|(index, record, count, weight, start, end)| {
            let label = label_fields.resolve_label(record);
            let fill_key = palette.fill_key(&label, index)?.to_owned();
            Ok(PieSliceDescriptor {
                label,
                value: count,
                percentage: weight / total_weight * 100.0,
                start_angle_deg: start,
                end_angle_deg: end,
                sweeps_more_than_half: end - start > FULL_TURN_DEG / 2.0,
                fill_key,
                index,
            })
        })
        .collect::<ChartResult<Vec<_>>>()?;

    debug!(
        record_count = records.len(),
        max_count,
        slice_count = slices.len(),
        "built pie slices"
    );
    Ok(slices)
}
