// src/error.rs
use std::path::PathBuf;
use tandem_dom::DomError;
use tandem_export::ExportError;
use tandem_layout::{LayoutError, Side};
use thiserror::Error;

/// Errors from any stage of a composition run.
#[derive(Error, Debug)]
pub enum CombineError {
    #[error("Failed to load {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: DomError,
    },

    #[error("Cannot size the {side} document: {source}")]
    Dimensions {
        side: Side,
        #[source]
        source: LayoutError,
    },

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Serialization failed: {0}")]
    Serialize(#[from] DomError),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("EPS export failed: {0}")]
    Export(#[from] ExportError),
}
