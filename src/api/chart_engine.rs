use tracing::{debug, warn};

use crate::core::{
    BarDescriptor, DataRecord, FieldSelector, NormalizationScale, PieSliceDescriptor,
    WedgeGeometry, build_bars, build_slices, compute_scale, project_wedges,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{BarRectPrimitive, RenderFrame, Renderer, WedgePrimitive};

use super::ChartConfig;

/// Facade that turns dashboard records into frames for a renderer.
///
/// Field selectors are resolved once from the config; every call after that
/// is a pure function of the records passed in.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    config: ChartConfig,
    value_fields: FieldSelector,
    bar_label_fields: FieldSelector,
    pie_count_field: FieldSelector,
    pie_label_fields: FieldSelector,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let value_fields = config.value_selector()?;
        let bar_label_fields = config.bar_label_selector()?;
        let pie_count_field = config.pie_count_selector()?;
        let pie_label_fields = config.pie_label_selector()?;
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            bar_window_size = config.bar_window_size,
            "chart engine initialized"
        );
        Ok(Self {
            renderer,
            config,
            value_fields,
            bar_label_fields,
            pie_count_field,
            pie_label_fields,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn scale(&self, records: &[DataRecord]) -> ChartResult<NormalizationScale> {
        compute_scale(records, &self.value_fields)
    }

    pub fn bars(&self, records: &[DataRecord]) -> ChartResult<Vec<BarDescriptor>> {
        build_bars(
            records,
            &self.value_fields,
            &self.bar_label_fields,
            self.config.bar_window_size,
        )
    }

    pub fn slices(&self, records: &[DataRecord]) -> ChartResult<Vec<PieSliceDescriptor>> {
        build_slices(
            records,
            &self.pie_count_field,
            &self.pie_label_fields,
            &self.config.palette,
        )
        .inspect_err(|err| {
            if matches!(err, ChartError::DegenerateInput(_)) {
                warn!(
                    record_count = records.len(),
                    error = %err,
                    "pie distribution has no mass"
                );
            }
        })
    }

    pub fn wedges(&self, records: &[DataRecord]) -> ChartResult<Vec<WedgeGeometry>> {
        let slices = self.slices(records)?;
        project_wedges(&slices, self.config.resolved_pie_layout()?)
    }

    /// Lays the windowed bars out across the full viewport width.
    pub fn bar_frame(&self, records: &[DataRecord]) -> ChartResult<RenderFrame> {
        let bars = self.bars(records)?;
        let viewport = self.config.viewport;
        let mut frame = RenderFrame::new(viewport);
        if bars.is_empty() {
            return Ok(frame);
        }

        let plot_height = f64::from(viewport.height);
        let slot_width = f64::from(viewport.width) / bars.len() as f64;
        let gap = slot_width * self.config.bar_gap_ratio;
        for bar in &bars {
            let height = bar.height_percent / 100.0 * plot_height;
            frame = frame.with_bar(BarRectPrimitive::new(
                bar.index as f64 * slot_width + gap / 2.0,
                plot_height - height,
                slot_width - gap,
                height,
                self.config.bar_fill_key.clone(),
                bar.label.clone(),
            ));
        }
        Ok(frame)
    }

    pub fn pie_frame(&self, records: &[DataRecord]) -> ChartResult<RenderFrame> {
        let slices = self.slices(records)?;
        let wedges = project_wedges(&slices, self.config.resolved_pie_layout()?)?;
        let frame = slices
            .into_iter()
            .zip(wedges)
            .fold(RenderFrame::new(self.config.viewport), |frame, (slice, wedge)| {
                frame.with_wedge(WedgePrimitive::new(
                    wedge.to_svg_path(self.config.path_precision),
                    slice.fill_key,
                    slice.label,
                ))
            });
        Ok(frame)
    }

    pub fn render_bars(&mut self, records: &[DataRecord]) -> ChartResult<()> {
        let frame = self.bar_frame(records)?;
        self.renderer.render(&frame)
    }

    pub fn render_pie(&mut self, records: &[DataRecord]) -> ChartResult<()> {
        let frame = self.pie_frame(records)?;
        self.renderer.render(&frame)
    }
}
