use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::core::PieSliceDescriptor;
use crate::core::primitives::{
    ANGLE_EPSILON_DEG, FULL_TURN_DEG, format_compact, point_on_circle,
};
use crate::error::{ChartError, ChartResult};

/// Circle that pie wedges are laid out on.
///
/// `rotation_deg` is added to every slice angle before projection; `-90`
/// starts the first slice at twelve o'clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieLayout {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    #[serde(default)]
    pub rotation_deg: f64,
}

impl PieLayout {
    pub fn new(center_x: f64, center_y: f64, radius: f64) -> ChartResult<Self> {
        let layout = Self {
            center_x,
            center_y,
            radius,
            rotation_deg: 0.0,
        };
        layout.validate()?;
        Ok(layout)
    }

    #[must_use]
    pub fn with_rotation_deg(mut self, rotation_deg: f64) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.center_x.is_finite() || !self.center_y.is_finite() {
            return Err(ChartError::InvalidInput(
                "pie center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidInput(
                "pie radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.rotation_deg.is_finite() {
            return Err(ChartError::InvalidInput(
                "pie rotation must be finite".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn point_at(self, angle_deg: f64) -> (f64, f64) {
        point_on_circle(
            self.center_x,
            self.center_y,
            self.radius,
            angle_deg + self.rotation_deg,
        )
    }
}

impl Default for PieLayout {
    fn default() -> Self {
        Self {
            center_x: 100.0,
            center_y: 100.0,
            radius: 80.0,
            rotation_deg: 0.0,
        }
    }
}

/// One SVG elliptical-arc command with equal radii and zero rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    pub radius: f64,
    pub large_arc: bool,
    pub sweep_flag: bool,
    pub end_x: f64,
    pub end_y: f64,
}

/// Closed wedge path: center, line to the start point, arc(s), back to center.
#[derive(Debug, Clone, PartialEq)]
pub struct WedgeGeometry {
    pub center_x: f64,
    pub center_y: f64,
    pub start_x: f64,
    pub start_y: f64,
    pub arcs: SmallVec<[ArcSegment; 2]>,
}

impl WedgeGeometry {
    #[must_use]
    pub fn end_point(&self) -> (f64, f64) {
        self.arcs
            .last()
            .map_or((self.start_x, self.start_y), |arc| (arc.end_x, arc.end_y))
    }

    /// SVG path data with coordinates rounded to `precision` decimals.
    #[must_use]
    pub fn to_svg_path(&self, precision: usize) -> String {
        let fmt = |value: f64| format_compact(value, precision);
        let mut path = format!(
            "M {},{} L {},{}",
            fmt(self.center_x),
            fmt(self.center_y),
            fmt(self.start_x),
            fmt(self.start_y)
        );
        for arc in &self.arcs {
            path.push_str(&format!(
                " A {r},{r} 0 {large} {sweep} {x},{y}",
                r = fmt(arc.radius),
                large = u8::from(arc.large_arc),
                sweep = u8::from(arc.sweep_flag),
                x = fmt(arc.end_x),
                y = fmt(arc.end_y),
            ));
        }
        path.push_str(" Z");
        path
    }
}

/// Projects one slice onto `layout`.
///
/// A slice covering the whole circle is split into two half arcs; a single
/// arc whose start and end points coincide draws nothing in SVG.
pub fn project_wedge(slice: &PieSliceDescriptor, layout: PieLayout) -> ChartResult<WedgeGeometry> {
    layout.validate()?;
    let start = slice.start_angle_deg;
    let end = slice.end_angle_deg;
    if !start.is_finite() || !end.is_finite() || end < start {
        return Err(ChartError::InvalidInput(format!(
            "slice {} angles must be finite and ordered",
            slice.index
        )));
    }

    let (start_x, start_y) = layout.point_at(start);
    let arc_to = |angle: f64, large_arc: bool| {
        let (end_x, end_y) = layout.point_at(angle);
        ArcSegment {
            radius: layout.radius,
            large_arc,
            sweep_flag: true,
            end_x,
            end_y,
        }
    };

    let arcs = if end - start >= FULL_TURN_DEG - ANGLE_EPSILON_DEG {
        let middle = start + (end - start) / 2.0;
        smallvec![arc_to(middle, false), arc_to(end, false)]
    } else {
        smallvec![arc_to(end, slice.sweeps_more_than_half)]
    };

    Ok(WedgeGeometry {
        center_x: layout.center_x,
        center_y: layout.center_y,
        start_x,
        start_y,
        arcs,
    })
}

/// Projects every slice onto `layout`, in order.
pub fn project_wedges(
    slices: &[PieSliceDescriptor],
    layout: PieLayout,
) -> ChartResult<Vec<WedgeGeometry>> {
    slices
        .iter()
        .map(|slice| project_wedge(slice, layout))
        .collect()
}
