//! Locating and running external programs.
use crate::error::ExportError;
use log::debug;
use std::ffi::OsStr;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(25);

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Resolves a program name against `PATH`, or checks an explicit path directly.
pub fn find_program(program: &OsStr) -> Option<PathBuf> {
    let path = Path::new(program);
    if path.components().count() > 1 {
        return is_executable(path).then(|| path.to_path_buf());
    }

    let search = std::env::var_os("PATH")?;
    std::env::split_paths(&search).find_map(|dir| {
        let candidate = dir.join(program);
        if is_executable(&candidate) {
            return Some(candidate);
        }
        if cfg!(windows) {
            let exe = candidate.with_extension("exe");
            if is_executable(&exe) {
                return Some(exe);
            }
        }
        None
    })
}

/// Writes `svg` to a temporary `.svg` file and passes its path to `f`.
///
/// The file is deleted when this returns, on success and on error alike.
pub(crate) fn with_temp_svg<T>(
    svg: &[u8],
    f: impl FnOnce(&Path) -> Result<T, ExportError>,
) -> Result<T, ExportError> {
    let mut temp = tempfile::Builder::new()
        .prefix("tandem-")
        .suffix(".svg")
        .tempfile()?;
    temp.write_all(svg)?;
    temp.flush()?;
    f(temp.path())
}

fn wait(child: &mut Child, tool: &'static str, timeout: Option<Duration>) -> Result<ExitStatus, ExportError> {
    let Some(limit) = timeout else {
        return Ok(child.wait()?);
    };

    let deadline = Instant::now() + limit;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status);
        }
        if Instant::now() >= deadline {
            child.kill()?;
            child.wait()?;
            return Err(ExportError::Timeout { tool, after: limit });
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Runs a converter to completion and maps a non-zero exit to `ProcessFailed`.
pub(crate) fn run_tool(
    tool: &'static str,
    mut command: Command,
    timeout: Option<Duration>,
) -> Result<(), ExportError> {
    debug!("Running {:?}", command);
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| ExportError::Spawn { tool, source })?;

    // Drain stderr concurrently so a chatty converter cannot block on a full pipe.
    let stderr_reader = child.stderr.take().map(|mut pipe| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = pipe.read_to_end(&mut buf);
            buf
        })
    });

    // On timeout a grandchild may still hold the stderr pipe open, so the
    // reader is left detached instead of joined.
    let status = wait(&mut child, tool, timeout)?;
    let stderr = stderr_reader
        .and_then(|handle| handle.join().ok())
        .map(|buf| String::from_utf8_lossy(&buf).trim().to_string())
        .unwrap_or_default();

    if status.success() {
        Ok(())
    } else {
        Err(ExportError::ProcessFailed {
            tool,
            status,
            stderr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_file_exists_during_call_and_is_removed_after() {
        let mut seen = None;
        let result = with_temp_svg(b"<svg/>", |path| {
            assert_eq!(std::fs::read(path)?, b"<svg/>");
            assert_eq!(path.extension().and_then(|e| e.to_str()), Some("svg"));
            seen = Some(path.to_path_buf());
            Ok(42)
        });
        assert_eq!(result.unwrap(), 42);
        assert!(!seen.unwrap().exists());
    }

    #[test]
    fn test_temp_file_is_removed_on_error() {
        let mut seen = None;
        let result: Result<(), _> = with_temp_svg(b"<svg/>", |path| {
            seen = Some(path.to_path_buf());
            Err(ExportError::DependencyMissing { tried: vec![] })
        });
        assert!(result.is_err());
        assert!(!seen.unwrap().exists());
    }

    #[test]
    fn test_find_program_missing() {
        assert!(find_program(OsStr::new("tandem-no-such-tool-7f3a")).is_none());
        assert!(find_program(OsStr::new("/definitely/not/here/cairosvg")).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_find_program_on_path() {
        assert!(find_program(OsStr::new("sh")).is_some());
    }

    #[cfg(unix)]
    #[test]
    fn test_run_tool_reports_failure_with_stderr() {
        let mut command = Command::new("sh");
        command.args(["-c", "echo broken >&2; exit 3"]);
        match run_tool("sh", command, None) {
            Err(ExportError::ProcessFailed { status, stderr, .. }) => {
                assert_eq!(status.code(), Some(3));
                assert_eq!(stderr, "broken");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_run_tool_times_out() {
        let mut command = Command::new("sh");
        command.args(["-c", "exec sleep 5"]);
        let started = Instant::now();
        let result = run_tool("sh", command, Some(Duration::from_millis(100)));
        assert!(matches!(result, Err(ExportError::Timeout { .. })));
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_tool_timeout_is_not_held_by_grandchild() {
        let mut command = Command::new("sh");
        command.args(["-c", "sleep 4; echo done"]);
        let started = Instant::now();
        let result = run_tool("sh", command, Some(Duration::from_millis(200)));
        assert!(matches!(result, Err(ExportError::Timeout { .. })));
        assert!(
            started.elapsed() < Duration::from_secs(2),
            "timeout took {:?}",
            started.elapsed()
        );
    }

    #[test]
    fn test_spawn_failure() {
        let command = Command::new("tandem-no-such-tool-7f3a");
        assert!(matches!(
            run_tool("missing", command, None),
            Err(ExportError::Spawn { .. })
        ));
    }
}
