//! EPS export by delegation to an external converter.
//!
//! Converters are tried in order; the first one present on the host does the
//! work. The composite is handed over through a temporary `.svg` file that is
//! removed however the conversion ends.

mod cli;
mod converter;
mod error;
mod exporter;
mod process;

pub use cli::{CairoSvgCli, InkscapeCli, CAIROSVG_ENV, INKSCAPE_ENV};
pub use converter::{ConverterChoice, EpsConverter, ExportOptions};
pub use error::ExportError;
pub use exporter::Exporter;
pub use process::find_program;
