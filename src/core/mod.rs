pub mod bar_series;
pub mod field_selector;
pub mod normalizer;
pub mod pie_geometry;
pub mod pie_series;
pub mod primitives;
pub mod types;
pub mod windowing;

pub use bar_series::{BarDescriptor, DEFAULT_BAR_WINDOW, build_bars};
pub use field_selector::FieldSelector;
pub use normalizer::{DEGENERATE_SCALE_DIVISOR, NormalizationScale, compute_scale};
pub use pie_geometry::{ArcSegment, PieLayout, WedgeGeometry, project_wedge, project_wedges};
pub use pie_series::{FillPalette, PieSliceDescriptor, build_slices};
pub use types::{DataRecord, FieldValue, Viewport};
pub use windowing::trailing_window;
