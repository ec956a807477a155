//! Logging init: file under XDG state dir, or graceful fallback to stderr.
//!
//! Stdout is reserved for rendered parameters, so nothing here writes to it.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,qparams=debug";
const LOG_FILE_NAME: &str = "qparams.log";

/// Writer that is either a file or stderr (used when file clone fails).
enum FileOrStderr {
    File(std::fs::File),
    Stderr,
}

impl io::Write for FileOrStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileOrStderr::File(f) => f.write(buf),
            FileOrStderr::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileOrStderr::File(f) => f.flush(),
            FileOrStderr::Stderr => io::stderr().lock().flush(),
        }
    }
}

/// `RUST_LOG` if set, else `default` (or the built-in filter).
fn env_filter(default: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default.unwrap_or(DEFAULT_FILTER)))
}

/// Initialize structured logging to `~/.local/state/qparams/qparams.log`.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging(default_filter: Option<&str>) -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("qparams")?;
    init_logging_in(&xdg_dirs.get_state_home(), default_filter)
}

/// Initialize file logging to `qparams.log` inside `log_dir`, creating the directory.
/// Returns the log file path.
pub fn init_logging_in(log_dir: &Path, default_filter: Option<&str>) -> Result<PathBuf> {
    fs::create_dir_all(log_dir)?;
    let log_file_path: PathBuf = log_dir.join(LOG_FILE_NAME);

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    struct FileMakeWriter(std::fs::File);

    impl<'a> MakeWriter<'a> for FileMakeWriter {
        type Writer = FileOrStderr;

        fn make_writer(&'a self) -> Self::Writer {
            self.0
                .try_clone()
                .map(FileOrStderr::File)
                .unwrap_or(FileOrStderr::Stderr)
        }
    }

    let writer: BoxMakeWriter = BoxMakeWriter::new(FileMakeWriter(file));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!("qparams logging initialized at {}", log_file_path.display());

    Ok(log_file_path)
}

/// Initialize logging to stderr only (no file). Use when init_logging() fails so the CLI doesn't crash.
pub fn init_logging_stderr(default_filter: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
