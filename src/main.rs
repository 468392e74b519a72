//! fieldwright binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

use fieldwright::{app, args, theme, util};

/// Log line timer producing `YYYY-MM-DD-T HH:MM:SS` in local time.
struct FieldwrightTimer;

impl tracing_subscriber::fmt::time::FormatTime for FieldwrightTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        w.write_str(&util::log_timestamp(&chrono::Local::now()))
    }
}

/// Keeps the non-blocking log writer alive for the whole process.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing to `~/.config/fieldwright/logs/fieldwright.log`.
///
/// Inputs:
/// - `level`: Filter used when `RUST_LOG` is unset.
///
/// Details:
/// - Falls back to stderr when the log file cannot be opened.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let mut log_path = theme::logs_dir();
    log_path.push("fieldwright.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(FieldwrightTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(FieldwrightTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = args::Args::parse();
    init_logging(&args::determine_log_level(&cli));

    args::process_args(&cli);

    tracing::info!(dry_run = cli.dry_run, "fieldwright starting");
    if let Err(err) = app::run(cli.dry_run, cli.endpoint).await {
        tracing::error!(error = ?err, "Application error");
        eprintln!("fieldwright: {err}");
        std::process::exit(1);
    }
    tracing::info!("fieldwright exited");
}

#[cfg(test)]
mod tests {
    /// What: FormatTime impl writes a non-empty timestamp without panicking
    ///
    /// - Input: Tracing writer buffer
    /// - Output: Buffer receives some content
    #[test]
    fn fieldwright_timer_formats_time_without_panic() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        let t = super::FieldwrightTimer;
        let _ = t.format_time(&mut writer);
        assert!(buf.contains("-T "));
    }
}
