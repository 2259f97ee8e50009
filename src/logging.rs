//! Tracing subscriber setup for the `algorithms` binary
//!
//! Logs can go to stdout or stderr. The binary defaults to stderr so that
//! stdout carries only results (the demo line or JSON), which keeps output
//! usable in pipes.
//!
//! The subscriber is a registry with two layers:
//! 1. **EnvFilter**: honours `RUST_LOG`, falling back to the configured level
//! 2. **Format layer**: [`ConditionalLocationFormatter`], which drops the INFO
//!    prefix and adds target and file:line to WARN and ERROR events
//!
//! ```rust,no_run
//! use algorithms::{init_logging, LogOutput};
//!
//! init_logging(Some("debug"), LogOutput::Stderr).expect("subscriber already set");
//! ```

use crate::config::LogOutput;
use anyhow::{Context as _, Result};
use tracing::Level;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, FormattedFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Formatter that shows file:line only for ERROR and WARN levels
/// and omits the INFO prefix
pub struct ConditionalLocationFormatter;

impl<S, N> FormatEvent<S, N> for ConditionalLocationFormatter
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();

        match *metadata.level() {
            // Result lines and INFO logs share a terminal, keep INFO bare
            Level::INFO => {}
            Level::ERROR | Level::WARN => {
                write!(writer, "{} {}", metadata.level(), metadata.target())?;
                if let (Some(file), Some(line)) = (metadata.file(), metadata.line()) {
                    write!(writer, " {}:{}", file, line)?;
                }
                write!(writer, ": ")?;
            }
            Level::DEBUG | Level::TRACE => write!(writer, "{}: ", metadata.level())?,
        }

        // Enclosing spans, outermost first: `outer{a=1}:inner `
        if let Some(scope) = ctx.event_scope() {
            let mut separator = "";
            for span in scope.from_root() {
                write!(writer, "{}{}", separator, span.name())?;
                separator = ":";

                let ext = span.extensions();
                match ext.get::<FormattedFields<N>>() {
                    Some(fields) if !fields.is_empty() => write!(writer, "{{{}}}", fields)?,
                    _ => {}
                }
            }
            write!(writer, " ")?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Build the env filter, preferring `RUST_LOG` over `default_level`
pub fn create_base_env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber.
///
/// # Arguments
/// * `default_level` - Filter used when `RUST_LOG` is unset. Defaults to "warn"
/// * `output` - Destination stream for formatted events
pub fn init_logging(default_level: Option<&str>, output: LogOutput) -> Result<()> {
    let env_filter = create_base_env_filter(default_level.unwrap_or("warn"));

    let installed = match output {
        LogOutput::Stdout => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .event_format(ConditionalLocationFormatter))
            .try_init(),
        LogOutput::Stderr => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .event_format(ConditionalLocationFormatter))
            .try_init(),
    };

    installed.context("Failed to install tracing subscriber")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::registry().with(
            tracing_subscriber::fmt::layer()
                .with_writer(move || writer.clone())
                .with_ansi(false)
                .event_format(ConditionalLocationFormatter),
        );
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buf.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_info_has_no_prefix() {
        let out = capture(|| tracing::info!("hello"));
        assert_eq!(out, "hello\n");
    }

    #[test]
    fn test_warn_includes_location() {
        let out = capture(|| tracing::warn!("careful"));
        assert!(out.starts_with("WARN algorithms::logging::tests"));
        assert!(out.contains("logging.rs:"));
        assert!(out.trim_end().ends_with("careful"));
    }

    #[test]
    fn test_error_includes_location() {
        let out = capture(|| tracing::error!(code = 3, "failed"));
        assert!(out.starts_with("ERROR algorithms::logging::tests "));
        assert!(out.trim_end().ends_with("failed code=3"));
    }

    #[test]
    fn test_nested_spans_joined_outermost_first() {
        let out = capture(|| {
            let outer = tracing::info_span!("outer", a = 1);
            let _outer = outer.enter();
            let inner = tracing::info_span!("inner");
            let _inner = inner.enter();
            tracing::info!("done");
        });
        assert_eq!(out, "outer{a=1}:inner done\n");
    }

    #[test]
    fn test_span_names_prefix_event() {
        let out = capture(|| {
            let span = tracing::info_span!("scan", len = 4);
            let _enter = span.enter();
            tracing::debug!("step");
        });
        assert_eq!(out, "DEBUG: scan{len=4} step\n");
    }
}
