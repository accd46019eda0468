use crate::cli::{CairoSvgCli, InkscapeCli};
use crate::converter::{ConverterChoice, EpsConverter, ExportOptions};
use crate::error::ExportError;
use log::{debug, info};
use std::path::Path;

/// An ordered list of converters; the first available one is used.
#[derive(Debug)]
pub struct Exporter {
    converters: Vec<Box<dyn EpsConverter>>,
}

impl Exporter {
    pub fn new(converters: Vec<Box<dyn EpsConverter>>) -> Self {
        Self { converters }
    }

    /// Builds the candidate list for the given options.
    pub fn from_options(options: &ExportOptions) -> Self {
        let cairosvg = || -> Box<dyn EpsConverter> {
            Box::new(CairoSvgCli::new().timeout(options.timeout))
        };
        let inkscape = || -> Box<dyn EpsConverter> {
            Box::new(
                InkscapeCli::new()
                    .timeout(options.timeout)
                    .text_to_path(options.text_to_path),
            )
        };

        let converters = match options.converter {
            ConverterChoice::Auto => vec![cairosvg(), inkscape()],
            ConverterChoice::CairoSvg => vec![cairosvg()],
            ConverterChoice::Inkscape => vec![inkscape()],
        };
        Self::new(converters)
    }

    pub fn converter_names(&self) -> Vec<&'static str> {
        self.converters.iter().map(|c| c.name()).collect()
    }

    /// Converts `svg` to EPS at `out` and returns the name of the tool used.
    pub fn export(&self, svg: &[u8], out: &Path) -> Result<&'static str, ExportError> {
        let converter = self
            .converters
            .iter()
            .find(|c| {
                let available = c.is_available();
                debug!("EPS converter {}: available={}", c.name(), available);
                available
            })
            .ok_or_else(|| ExportError::DependencyMissing {
                tried: self.converter_names(),
            })?;

        info!("Exporting EPS to {} with {}", out.display(), converter.name());
        converter.convert(svg, out)?;
        Ok(converter.name())
    }
}
