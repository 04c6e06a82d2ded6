use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

/// Tolerance used when comparing accumulated angles against a full turn.
pub const ANGLE_EPSILON_DEG: f64 = 1e-9;

pub const FULL_TURN_DEG: f64 = 360.0;

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidInput(format!("{field_name} cannot be represented as f64"))
    })
}

/// Point on a circle for an angle in degrees, measured clockwise in screen
/// space from the positive x axis.
#[must_use]
pub fn point_on_circle(center_x: f64, center_y: f64, radius: f64, angle_deg: f64) -> (f64, f64) {
    let theta = angle_deg.to_radians();
    (
        center_x + radius * theta.cos(),
        center_y + radius * theta.sin(),
    )
}

/// Formats a number for labels and path data, dropping a trailing `.0`.
#[must_use]
pub fn format_compact(value: f64, precision: usize) -> String {
    let text = format!("{value:.precision$}");
    if !text.contains('.') {
        return normalize_negative_zero(text);
    }
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    normalize_negative_zero(trimmed.to_owned())
}

fn normalize_negative_zero(text: String) -> String {
    if text == "-0" { "0".to_owned() } else { text }
}
