//! Console logging built on `tracing`.
//!
//! A compact facade: [`Logger`] methods emit `tracing` events with
//! per-purpose targets, and [`init_subscriber`] installs a console layer that
//! renders those targets with distinct prefixes. The tool is one-shot, so
//! there is no log file.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::{Layer as _, registry};

/// Event target used for stage headers.
const STAGE_TARGET: &str = "tsinit::stage";

/// Extracts the `message` field from a [`tracing::Event`].
#[derive(Default)]
struct MessageExtractor {
    message: String,
}

impl tracing::field::Visit for MessageExtractor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

/// A [`tracing_subscriber::Layer`] that renders events as plain console
/// lines: stage headers get a `==>` marker, warnings and errors a level tag,
/// everything else an indent.
#[derive(Debug, Default)]
struct ConsoleLayer;

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for ConsoleLayer {
    #[allow(clippy::print_stdout, clippy::print_stderr)]
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let metadata = event.metadata();
        let level = *metadata.level();

        let mut extractor = MessageExtractor::default();
        event.record(&mut extractor);
        let msg = extractor.message;

        match (level, metadata.target()) {
            (tracing::Level::INFO, STAGE_TARGET) => println!("==> {msg}"),
            (tracing::Level::ERROR, _) => eprintln!("[error] {msg}"),
            (tracing::Level::WARN, _) => eprintln!("[warn] {msg}"),
            (tracing::Level::DEBUG, _) => println!("    [debug] {msg}"),
            _ => println!("    {msg}"),
        }
    }
}

/// Install the global console subscriber.
///
/// `verbose` lowers the console threshold from `INFO` to `DEBUG`. Safe to
/// call more than once; later calls are no-ops.
pub fn init_subscriber(verbose: bool) {
    let threshold = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let subscriber = registry().with(ConsoleLayer.with_filter(threshold));
    // Tests may install their own dispatcher first; keep whichever won.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Thin logging facade passed through the scaffolding pipeline.
#[derive(Debug, Default, Clone, Copy)]
pub struct Logger;

impl Logger {
    /// Create a new logger.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: "tsinit::stage", "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (suppressed unless `--verbose`).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }
}
