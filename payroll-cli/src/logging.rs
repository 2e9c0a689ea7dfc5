use anyhow::Result;
use chrono::Local;
use std::{
    fmt,
    fs::File,
    io::{self, IsTerminal},
    path::Path,
    sync::Mutex,
};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

/// Filter used when neither `--log-level` nor `RUST_LOG` is set.
const DEFAULT_FILTER: &str = "info";

// --- Formatter ---

const DIM: &str = "\x1b[2m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// Bold color for each level's label.
fn level_style(level: Level) -> &'static str {
    match level {
        Level::ERROR => "\x1b[1;31m",
        Level::WARN => "\x1b[1;33m",
        Level::INFO => "\x1b[1;32m",
        Level::DEBUG => "\x1b[1;34m",
        Level::TRACE => "\x1b[1;35m",
    }
}

/// Writes `text` followed by a space, wrapped in `style` when `ansi` is on.
fn paint(
    writer: &mut Writer<'_>,
    ansi: bool,
    style: &str,
    text: impl fmt::Display,
) -> fmt::Result {
    if ansi {
        write!(writer, "{style}{text}{RESET} ")
    } else {
        write!(writer, "{text} ")
    }
}

/// `<local time> <LEVEL> <file:line> <fields>`, colored when the writer
/// supports ANSI escapes.
struct LocalFmt;

impl<S, N> FormatEvent<S, N> for LocalFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();

        let now = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
        paint(&mut writer, ansi, DIM, now)?;
        paint(
            &mut writer,
            ansi,
            level_style(*meta.level()),
            format_args!("{:>5}", meta.level()),
        )?;
        if let (Some(file), Some(line)) = (meta.file().map(short_path), meta.line()) {
            paint(&mut writer, ansi, CYAN, format_args!("{file}:{line}"))?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Drops the crate directory and `src/` prefix so `payroll-core/src/x.rs`
/// prints as `x.rs`.
fn short_path(file: &str) -> &str {
    let file = file
        .rsplit_once("/src/")
        .or_else(|| file.rsplit_once("\\src\\"))
        .map_or(file, |(_, rest)| rest);
    file.strip_prefix("src/")
        .or_else(|| file.strip_prefix("src\\"))
        .unwrap_or(file)
}

// --- Public API ---

/// Where and how much to log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSettings<'a> {
    /// A bare level ("warn", "debug", ...) or any full `EnvFilter`
    /// directive. Overrides `RUST_LOG` when set.
    pub level: Option<&'a str>,

    /// Also append plain-text log lines to this file.
    pub file: Option<&'a Path>,
}

/// Builds the level filter: explicit level first, then `RUST_LOG`, then
/// [`DEFAULT_FILTER`].
pub fn make_filter(level: Option<&str>) -> Result<EnvFilter> {
    match level {
        Some(level) => EnvFilter::try_new(level)
            .map_err(|e| anyhow::anyhow!("invalid log level '{level}': {e}")),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Initializes logging. Call once at startup.
///
/// - Stderr: colored when attached to a terminal, plain when piped. Result
///   files are never mixed with log output.
/// - File: appended to when `settings.file` is set. The directory must
///   already exist.
pub fn init_logging(settings: LogSettings<'_>) -> Result<()> {
    let filter = make_filter(settings.level)?;

    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalFmt)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    let file_layer = match settings.file {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| anyhow::anyhow!("cannot open log file '{}': {e}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .event_format(LocalFmt)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("logging already initialized: {e}"))
}
