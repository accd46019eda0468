use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("no EPS converter available (tried: {}); install CairoSVG or Inkscape", .tried.join(", "))]
    DependencyMissing { tried: Vec<&'static str> },

    #[error("failed to start {tool}: {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with {status}: {stderr}")]
    ProcessFailed {
        tool: &'static str,
        status: ExitStatus,
        stderr: String,
    },

    #[error("{tool} did not finish within {after:?}")]
    Timeout { tool: &'static str, after: Duration },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
