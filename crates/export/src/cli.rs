//! Command-line converter adapters.
use crate::converter::EpsConverter;
use crate::error::ExportError;
use crate::process::{find_program, run_tool, with_temp_svg};
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;
use std::time::Duration;

/// Overrides the `cairosvg` executable.
pub const CAIROSVG_ENV: &str = "TANDEM_CAIROSVG";
/// Overrides the `inkscape` executable.
pub const INKSCAPE_ENV: &str = "TANDEM_INKSCAPE";

fn program_from_env(var: &str, default: &str) -> OsString {
    std::env::var_os(var)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| OsString::from(default))
}

/// `cairosvg -f eps <input.svg> -o <out>`
#[derive(Debug, Clone)]
pub struct CairoSvgCli {
    program: OsString,
    timeout: Option<Duration>,
}

impl CairoSvgCli {
    /// Uses `$TANDEM_CAIROSVG`, falling back to `cairosvg` on `PATH`.
    pub fn new() -> Self {
        Self::with_program(program_from_env(CAIROSVG_ENV, "cairosvg"))
    }

    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            timeout: None,
        }
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for CairoSvgCli {
    fn default() -> Self {
        Self::new()
    }
}

impl EpsConverter for CairoSvgCli {
    fn name(&self) -> &'static str {
        "cairosvg"
    }

    fn is_available(&self) -> bool {
        find_program(&self.program).is_some()
    }

    fn convert(&self, svg: &[u8], out: &Path) -> Result<(), ExportError> {
        with_temp_svg(svg, |input| {
            let mut command = Command::new(&self.program);
            command.args(["-f", "eps"]).arg(input).arg("-o").arg(out);
            run_tool(self.name(), command, self.timeout)
        })
    }
}

/// `inkscape <input.svg> --export-type=eps --export-filename=<out> [--export-text-to-path]`
#[derive(Debug, Clone)]
pub struct InkscapeCli {
    program: OsString,
    timeout: Option<Duration>,
    text_to_path: bool,
}

impl InkscapeCli {
    /// Uses `$TANDEM_INKSCAPE`, falling back to `inkscape` on `PATH`.
    pub fn new() -> Self {
        Self::with_program(program_from_env(INKSCAPE_ENV, "inkscape"))
    }

    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            timeout: None,
            text_to_path: true,
        }
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn text_to_path(mut self, enabled: bool) -> Self {
        self.text_to_path = enabled;
        self
    }

    fn arguments(&self, input: &Path, out: &Path) -> Vec<OsString> {
        let mut filename = OsString::from("--export-filename=");
        filename.push(out);

        let mut args = vec![
            input.as_os_str().to_os_string(),
            OsString::from("--export-type=eps"),
            filename,
        ];
        if self.text_to_path {
            args.push(OsString::from("--export-text-to-path"));
        }
        args
    }
}

impl Default for InkscapeCli {
    fn default() -> Self {
        Self::new()
    }
}

impl EpsConverter for InkscapeCli {
    fn name(&self) -> &'static str {
        "inkscape"
    }

    fn is_available(&self) -> bool {
        find_program(&self.program).is_some()
    }

    fn convert(&self, svg: &[u8], out: &Path) -> Result<(), ExportError> {
        with_temp_svg(svg, |input| {
            let mut command = Command::new(&self.program);
            command.args(self.arguments(input, out));
            run_tool(self.name(), command, self.timeout)
        })
    }
}
