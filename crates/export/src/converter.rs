//! The converter seam and its configuration.
use crate::error::ExportError;
use std::fmt::Debug;
use std::path::Path;
use std::time::Duration;

/// An external tool able to turn SVG bytes into an EPS file.
///
/// # Implementations
///
/// - `CairoSvgCli`: the `cairosvg` command line tool
/// - `InkscapeCli`: Inkscape 1.x in export mode
pub trait EpsConverter: Debug {
    /// Human-readable tool name, used in logs and errors.
    fn name(&self) -> &'static str;

    /// Whether the tool can be run on this host.
    fn is_available(&self) -> bool;

    /// Writes an EPS rendering of `svg` to `out`.
    fn convert(&self, svg: &[u8], out: &Path) -> Result<(), ExportError>;
}

/// Which converter(s) to consider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConverterChoice {
    /// CairoSVG first, then Inkscape.
    #[default]
    Auto,
    CairoSvg,
    Inkscape,
}

/// Settings for the EPS export step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub converter: ConverterChoice,
    /// Kill the converter after this long. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Ask Inkscape to convert text to paths so the EPS needs no fonts.
    pub text_to_path: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            converter: ConverterChoice::Auto,
            timeout: None,
            text_to_path: true,
        }
    }
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn converter(mut self, converter: ConverterChoice) -> Self {
        self.converter = converter;
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn text_to_path(mut self, enabled: bool) -> Self {
        self.text_to_path = enabled;
        self
    }
}
