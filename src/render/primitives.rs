use crate::error::{ChartError, ChartResult};

/// Draw command for one bar in pixel space, anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct BarRectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_key: String,
    pub label: String,
}

impl BarRectPrimitive {
    #[must_use]
    pub fn new(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill_key: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_key: fill_key.into(),
            label: label.into(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidInput(
                "bar coordinates must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ChartError::InvalidInput(
                "bar width must be finite and > 0".to_owned(),
            ));
        }
        if !self.height.is_finite() || self.height < 0.0 {
            return Err(ChartError::InvalidInput(
                "bar height must be finite and >= 0".to_owned(),
            ));
        }
        if self.fill_key.is_empty() {
            return Err(ChartError::InvalidInput(
                "bar fill key must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Draw command for one pie wedge, carried as SVG path data.
#[derive(Debug, Clone, PartialEq)]
pub struct WedgePrimitive {
    pub path: String,
    pub fill_key: String,
    pub label: String,
}

impl WedgePrimitive {
    #[must_use]
    pub fn new(
        path: impl Into<String>,
        fill_key: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            fill_key: fill_key.into(),
            label: label.into(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.path.starts_with('M') || !self.path.ends_with('Z') {
            return Err(ChartError::InvalidInput(
                "wedge path must be a closed move-to path".to_owned(),
            ));
        }
        if let Some(bad) = self.path.chars().find(|ch| !is_wedge_path_char(*ch)) {
            return Err(ChartError::InvalidInput(format!(
                "wedge path contains unexpected character `{bad}`"
            )));
        }
        if self.fill_key.is_empty() {
            return Err(ChartError::InvalidInput(
                "wedge fill key must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Characters emitted by `WedgeGeometry::to_svg_path`: move/line/arc/close
/// commands and plain decimal numbers. Non-finite coordinates (`NaN`, `inf`)
/// fall outside this set.
fn is_wedge_path_char(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, 'M' | 'L' | 'A' | 'Z' | ' ' | ',' | '.' | '-')
}
