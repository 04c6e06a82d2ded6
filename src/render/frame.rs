use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{BarRectPrimitive, WedgePrimitive};

/// Backend-agnostic scene for one widget draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub bars: Vec<BarRectPrimitive>,
    pub wedges: Vec<WedgePrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            bars: Vec::new(),
            wedges: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_bar(mut self, bar: BarRectPrimitive) -> Self {
        self.bars.push(bar);
        self
    }

    #[must_use]
    pub fn with_wedge(mut self, wedge: WedgePrimitive) -> Self {
        self.wedges.push(wedge);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for bar in &self.bars {
            bar.validate()?;
        }
        for wedge in &self.wedges {
            wedge.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty() && self.wedges.is_empty()
    }
}
