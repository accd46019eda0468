pub use tandem_export::{ConverterChoice, ExportOptions};

/// Placement settings for a single composition run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CombineOptions {
    /// Horizontal space between the two documents, in pixels.
    pub gap: f64,
    /// Scale the shorter document up to the taller one's height.
    pub match_height: bool,
}

impl CombineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    pub fn match_height(mut self, enabled: bool) -> Self {
        self.match_height = enabled;
        self
    }
}
