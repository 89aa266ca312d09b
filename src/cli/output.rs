/// Diagnostics on stderr: error reporting, usage examples, logging and timers.
use std::io::Write;

use log::{LevelFilter, debug};

use crate::export::ExportError;
use crate::types::ErrorOutput;

/// Usage lines shown after argument errors.
pub const USAGE_EXAMPLES: [&str; 2] = [
    "gitlab-extract-variable --token=TOKEN --project=ProjectOwner/ProjectName --output=.env --format=env",
    "gitlab-extract-variable --token=TOKEN --project=ProjectOwner/ProjectName --compact",
];

/// Output context passed through the run.
pub struct OutputCtx {
    /// Errors are written as a JSON envelope instead of plain text.
    pub json: bool,
    /// When true, log phase timings.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI flags.
    #[must_use]
    pub fn new(json: bool, debug: bool) -> Self {
        Self { json, debug }
    }

    /// Start a named debug timer. Logs elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

/// Install the `env_logger` backend.
///
/// `RUST_LOG` wins when set; otherwise `warn`, or `debug` with `--debug`.
pub fn init_logging(debug: bool) {
    let default = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = env_logger::Builder::new()
        .filter_level(default)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

// --- Error output ---

/// Write an error to stderr, followed by usage examples for argument errors.
pub fn write_error(err: &ExportError, ctx: &OutputCtx) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    render_error(&mut out, err, ctx.json);
}

fn render_error<W: Write>(out: &mut W, err: &ExportError, json: bool) {
    if json {
        let envelope = ErrorOutput::from_export_error(err);
        let s = serde_json::to_string_pretty(&envelope).unwrap_or_default();
        let _ = writeln!(out, "{s}");
        return;
    }

    let _ = writeln!(out, "Error: {err}");
    if err.is_usage() {
        let _ = writeln!(out, "Examples:");
        for example in USAGE_EXAMPLES {
            let _ = writeln!(out, "  {example}");
        }
    }
}

// --- Debug timer ---

/// A RAII timer that logs elapsed milliseconds on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            debug!("{}: {ms:.2}ms", self.label);
        }
    }
}
