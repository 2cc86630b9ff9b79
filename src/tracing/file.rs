use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::Layer;
use tracing_subscriber::prelude::*;

use super::filter::LevelBand;
use super::filter::OwnTargetFilter;
use super::format::MusajjilFormat;
use crate::config::LoggingConfig;
use crate::err_with_loc;
use crate::error::Result;

/// Keeps the non-blocking file writers alive. Dropping it flushes and stops them.
#[must_use]
pub struct TracingGuard {
    _guards: Vec<WorkerGuard>,
}

pub fn setup_tracing(
    engine_name: &str,
    logging_config: &LoggingConfig,
) -> Result<TracingGuard> {
    let base_logs_dir = Path::new(logging_config.directory.as_deref().unwrap_or(".logs"));

    let logs_dirs = [base_logs_dir.to_path_buf(), base_logs_dir.join("debug"), base_logs_dir.join("error")];

    for dir in &logs_dirs {
        if !dir.exists() {
            std::fs::create_dir_all(dir)
                .map_err(|e| err_with_loc!(format!("failed to create logs directory {}: {}", dir.display(), e)))?;
        }
    }

    let mut guards = Vec::new();

    let debug_appender =
        RollingFileAppender::new(Rotation::DAILY, base_logs_dir.join("debug"), format!("{}.log", engine_name));
    let error_appender =
        RollingFileAppender::new(Rotation::DAILY, base_logs_dir.join("error"), format!("{}.log", engine_name));

    let (non_blocking_debug, debug_guard) = tracing_appender::non_blocking(debug_appender);
    let (non_blocking_error, error_guard) = tracing_appender::non_blocking(error_appender);
    guards.push(debug_guard);
    guards.push(error_guard);

    let format = MusajjilFormat::new(engine_name);

    let subscriber = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_ansi(false)
                .event_format(format.clone())
                .with_writer(non_blocking_debug)
                .with_filter(OwnTargetFilter::new(LevelBand::DebugOnly)),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_ansi(false)
                .event_format(format.clone())
                .with_writer(non_blocking_error)
                .with_filter(OwnTargetFilter::new(LevelBand::WarnAndError)),
        );

    #[cfg(not(feature = "dev"))]
    let subscriber = subscriber.with(
        tracing_subscriber::fmt::Layer::default()
            .with_ansi(true)
            .event_format(format.clone())
            .with_writer(std::io::stderr)
            .with_filter(OwnTargetFilter::new(LevelBand::ErrorOnly)),
    );

    #[cfg(feature = "dev")]
    let subscriber = {
        let info_appender =
            RollingFileAppender::new(Rotation::DAILY, base_logs_dir, format!("{}.log", engine_name));
        let (non_blocking_info, info_guard) = tracing_appender::non_blocking(info_appender);
        guards.push(info_guard);

        subscriber
            .with(
                tracing_subscriber::fmt::Layer::default()
                    .with_ansi(true)
                    .event_format(format.clone())
                    .with_writer(std::io::stderr)
                    .with_filter(OwnTargetFilter::new(LevelBand::InfoAndAbove)),
            )
            .with(
                tracing_subscriber::fmt::Layer::default()
                    .with_ansi(false)
                    .event_format(format.clone())
                    .with_writer(non_blocking_info)
                    .with_filter(OwnTargetFilter::new(LevelBand::InfoAndAbove)),
            )
    };

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| err_with_loc!(format!("failed to set up logging: {}", e)))?;

    tracing::info!("{}_logging_started::debug_logs::{}", engine_name, base_logs_dir.join("debug").display());
    tracing::info!("{}_logging_started::error_logs::{}", engine_name, base_logs_dir.join("error").display());

    Ok(TracingGuard { _guards: guards })
}
