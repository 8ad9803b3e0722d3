//! Dual-sink logging: console plus `app.log`, both pipe-delimited.

use std::fmt::Write as _;
use tracing::{Event, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Event format shared by both sinks: `timestamp | level | target | message`.
struct PipeFormat;

impl<S, N> FormatEvent<S, N> for PipeFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        write!(
            writer,
            "{} | {} | {} | ",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            meta.level(),
            meta.target()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Install the global subscriber with a console sink and an `app.log` sink.
///
/// The file sink appends to `app.log` in the working directory and stays open
/// for the process lifetime; the returned guard flushes it on drop, so the
/// caller keeps it alive until exit. Installation is idempotent: a repeat
/// call finds the global default already set and attaches nothing.
pub fn init(default_level: &str) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::never(".", "app.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(PipeFormat)
                .with_writer(std::io::stdout),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(PipeFormat)
                .with_ansi(false)
                .with_writer(file_writer),
        )
        .try_init();

    guard
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::info;

    #[test]
    fn test_repeated_init_does_not_duplicate_sinks() {
        let _first = init("info");
        let _second = init("info");

        // Events must still be emittable through the single subscriber.
        info!("logging initialized twice");
    }
}
