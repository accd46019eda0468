//! Compose two SVG documents side by side.
//!
//! ```no_run
//! use tandem::{combine_files, CombineOptions};
//!
//! let options = CombineOptions::new().gap(12.0).match_height(true);
//! let composite = combine_files("left.svg".as_ref(), "right.svg".as_ref(), "out.svg".as_ref(), &options)?;
//! println!("canvas: {}x{}", composite.plan.canvas_width, composite.plan.canvas_height);
//! # Ok::<(), tandem::CombineError>(())
//! ```

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::{CombineOptions, ConverterChoice, ExportOptions};
pub use error::CombineError;
pub use pipeline::{combine_files, compose, export_eps, load_document, Composite};

pub use tandem_dom as dom;
pub use tandem_export as export;
pub use tandem_layout as layout;
pub use tandem_units as units;
