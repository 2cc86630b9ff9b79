use std::fmt;

use tracing::Event;
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::FormatFields;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::registry::LookupSpan;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// One line per event: `LEVEL timestamp::engine::file::line::fields`.
///
/// Events without a source location (mostly from `log` bridges) are dropped unless the
/// `deep-trace` feature is on.
#[derive(Debug, Clone)]
pub struct MusajjilFormat {
    pub engine_name: String,
}

impl MusajjilFormat {
    pub fn new(engine_name: impl Into<String>) -> Self {
        Self { engine_name: engine_name.into() }
    }

    fn location(event: &Event<'_>) -> Option<(&'static str, u32)> {
        let metadata = event.metadata();
        match (metadata.file(), metadata.line()) {
            (Some(file), line) => Some((file, line.unwrap_or(0))),
            (None, _) if cfg!(feature = "deep-trace") => Some(("unknown", 0)),
            (None, _) => None,
        }
    }
}

impl<S, N> FormatEvent<S, N> for MusajjilFormat
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let Some((file, line)) = Self::location(event) else {
            return Ok(());
        };

        write!(
            writer,
            "{} {}::{}::{}::{}::",
            event.metadata().level(),
            chrono::Utc::now().format(TIMESTAMP_FORMAT),
            self.engine_name,
            file,
            line
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
