use crate::core::primitives::format_compact;
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub bars_drawn: usize,
    pub wedges_drawn: usize,
}

/// Renders frames into standalone SVG documents.
///
/// Fill keys are written verbatim as `fill` attributes, so named CSS colors
/// work out of the box; anything else is expected to be styled by the host.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    precision: usize,
    last_document: Option<String>,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new(precision: usize) -> Self {
        Self {
            precision,
            last_document: None,
            last_stats: SvgRenderStats::default(),
        }
    }

    #[must_use]
    pub fn last_document(&self) -> Option<&str> {
        self.last_document.as_deref()
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    fn fmt(&self, value: f64) -> String {
        format_compact(value, self.precision)
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new(2)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let width = frame.viewport.width;
        let height = frame.viewport.height;
        let mut document = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
        );
        for bar in &frame.bars {
            document.push_str(&format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"><title>{}</title></rect>",
                self.fmt(bar.x),
                self.fmt(bar.y),
                self.fmt(bar.width),
                self.fmt(bar.height),
                escape_xml(&bar.fill_key),
                escape_xml(&bar.label),
            ));
        }
        for wedge in &frame.wedges {
            document.push_str(&format!(
                "<path d=\"{}\" fill=\"{}\"><title>{}</title></path>",
                escape_xml(&wedge.path),
                escape_xml(&wedge.fill_key),
                escape_xml(&wedge.label),
            ));
        }
        document.push_str("</svg>");

        self.last_stats = SvgRenderStats {
            bars_drawn: frame.bars.len(),
            wedges_drawn: frame.wedges.len(),
        };
        self.last_document = Some(document);
        Ok(())
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
