use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_BAR_WINDOW, FieldSelector, FillPalette, PieLayout, Viewport};
use crate::error::{ChartError, ChartResult};

/// Widget configuration shared by the bar and pie builders.
///
/// Serializable so host applications can persist/load dashboard widgets
/// without inventing their own format. Missing fields take the registry
/// dashboard defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub viewport: Viewport,
    #[serde(default = "default_bar_window_size")]
    pub bar_window_size: usize,
    #[serde(default = "default_value_fields")]
    pub value_fields: Vec<String>,
    #[serde(default = "default_bar_label_fields")]
    pub bar_label_fields: Vec<String>,
    #[serde(default = "default_bar_gap_ratio")]
    pub bar_gap_ratio: f64,
    #[serde(default = "default_bar_fill_key")]
    pub bar_fill_key: String,
    #[serde(default = "default_pie_count_field")]
    pub pie_count_field: String,
    #[serde(default = "default_pie_label_fields")]
    pub pie_label_fields: Vec<String>,
    #[serde(default)]
    pub pie_layout: Option<PieLayout>,
    #[serde(default)]
    pub palette: FillPalette,
    #[serde(default = "default_path_precision")]
    pub path_precision: usize,
}

impl ChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            bar_window_size: default_bar_window_size(),
            value_fields: default_value_fields(),
            bar_label_fields: default_bar_label_fields(),
            bar_gap_ratio: default_bar_gap_ratio(),
            bar_fill_key: default_bar_fill_key(),
            pie_count_field: default_pie_count_field(),
            pie_label_fields: default_pie_label_fields(),
            pie_layout: None,
            palette: FillPalette::default(),
            path_precision: default_path_precision(),
        }
    }

    #[must_use]
    pub fn with_bar_window_size(mut self, window_size: usize) -> Self {
        self.bar_window_size = window_size;
        self
    }

    #[must_use]
    pub fn with_value_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.value_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_bar_label_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bar_label_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_bar_gap_ratio(mut self, gap_ratio: f64) -> Self {
        self.bar_gap_ratio = gap_ratio;
        self
    }

    #[must_use]
    pub fn with_pie_count_field(mut self, field: impl Into<String>) -> Self {
        self.pie_count_field = field.into();
        self
    }

    #[must_use]
    pub fn with_pie_label_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pie_label_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Pins the pie circle instead of fitting it into the viewport.
    #[must_use]
    pub fn with_pie_layout(mut self, layout: PieLayout) -> Self {
        self.pie_layout = Some(layout);
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: FillPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.bar_gap_ratio.is_finite() || !(0.0..1.0).contains(&self.bar_gap_ratio) {
            return Err(ChartError::InvalidInput(
                "bar gap ratio must be finite and in [0, 1)".to_owned(),
            ));
        }
        if self.bar_fill_key.is_empty() {
            return Err(ChartError::InvalidInput(
                "bar fill key must not be empty".to_owned(),
            ));
        }
        self.value_selector()?;
        self.bar_label_selector()?;
        self.pie_count_selector()?;
        self.pie_label_selector()?;
        if let Some(layout) = self.pie_layout {
            layout.validate()?;
        }
        self.palette.validate()
    }

    pub fn value_selector(&self) -> ChartResult<FieldSelector> {
        FieldSelector::new(self.value_fields.iter().cloned())
    }

    pub fn bar_label_selector(&self) -> ChartResult<FieldSelector> {
        FieldSelector::new(self.bar_label_fields.iter().cloned())
    }

    pub fn pie_count_selector(&self) -> ChartResult<FieldSelector> {
        FieldSelector::single(self.pie_count_field.clone())
    }

    pub fn pie_label_selector(&self) -> ChartResult<FieldSelector> {
        FieldSelector::new(self.pie_label_fields.iter().cloned())
    }

    /// Pie circle to draw on: the pinned layout, or the largest circle that
    /// fits the viewport with a small inset.
    pub fn resolved_pie_layout(&self) -> ChartResult<PieLayout> {
        if let Some(layout) = self.pie_layout {
            return Ok(layout);
        }
        let width = f64::from(self.viewport.width);
        let height = f64::from(self.viewport.height);
        let side = width.min(height);
        PieLayout::new(
            width / 2.0,
            height / 2.0,
            side / 2.0 - PIE_INSET_RATIO * side,
        )
    }
}

const PIE_INSET_RATIO: f64 = 0.05;

fn default_bar_window_size() -> usize {
    DEFAULT_BAR_WINDOW
}

fn default_value_fields() -> Vec<String> {
    vec!["projects".to_owned(), "total".to_owned()]
}

fn default_bar_label_fields() -> Vec<String> {
    vec!["month".to_owned(), "week".to_owned(), "category".to_owned()]
}

fn default_bar_gap_ratio() -> f64 {
    0.2
}

fn default_bar_fill_key() -> String {
    "teal".to_owned()
}

fn default_pie_count_field() -> String {
    "count".to_owned()
}

fn default_pie_label_fields() -> Vec<String> {
    vec![
        "risk".to_owned(),
        "category".to_owned(),
        "status".to_owned(),
        "name".to_owned(),
    ]
}

fn default_path_precision() -> usize {
    2
}
