use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::prelude::*;

use super::filter::DebugOnlyFilter;
use super::filter::ErrorWarnFilter;
use super::format::BubbleMapFormat;
use crate::config::LoggingConfig;

/// Keeps the non-blocking file writers alive; drop it last in `main`
#[derive(Default)]
pub struct TracingGuard {
    _guards: Vec<WorkerGuard>,
}

/// Terminal output filtered by `RUST_LOG` (default `info`), plus daily
/// rolling debug and error files when `logging.directory` is set.
pub fn setup_tracing(
    engine_name: &str,
    logging_config: &LoggingConfig,
) -> TracingGuard {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let format = BubbleMapFormat {
        engine_name: engine_name.to_string(),
    };

    let terminal = tracing_subscriber::fmt::Layer::default()
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .event_format(format.clone())
        .with_filter(env_filter);

    let mut guards = Vec::new();
    let file_layers = logging_config.directory.as_deref().and_then(|directory| {
        match file_layers(engine_name, Path::new(directory), &format, &mut guards) {
            Ok(layers) => Some(layers),
            Err(e) => {
                eprintln!("Error creating logs directory {}: {}", directory, e);
                None
            },
        }
    });

    let subscriber = tracing_subscriber::registry().with(file_layers).with(terminal);

    match tracing::subscriber::set_global_default(subscriber) {
        Ok(_) => {
            if let Some(directory) = &logging_config.directory {
                tracing::info!("{}_logging_started::{}", engine_name, directory);
            }
        },
        Err(e) => {
            eprintln!("Error setting up logging: {}", e);
        },
    }

    TracingGuard { _guards: guards }
}

type BoxedLayer = Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>;

fn file_layers(
    engine_name: &str,
    base_logs_dir: &Path,
    format: &BubbleMapFormat,
    guards: &mut Vec<WorkerGuard>,
) -> std::io::Result<Vec<BoxedLayer>> {
    let debug_dir = base_logs_dir.join("debug");
    let error_dir = base_logs_dir.join("error");
    for dir in [base_logs_dir, debug_dir.as_path(), error_dir.as_path()] {
        std::fs::create_dir_all(dir)?;
    }

    let file_name = format!("{}.log", engine_name);
    let (non_blocking_debug, debug_guard) =
        tracing_appender::non_blocking(RollingFileAppender::new(Rotation::DAILY, &debug_dir, &file_name));
    let (non_blocking_error, error_guard) =
        tracing_appender::non_blocking(RollingFileAppender::new(Rotation::DAILY, &error_dir, &file_name));
    guards.push(debug_guard);
    guards.push(error_guard);

    let layers: Vec<BoxedLayer> = vec![
        tracing_subscriber::fmt::Layer::default()
            .with_ansi(false)
            .event_format(format.clone())
            .with_writer(non_blocking_debug)
            .with_filter(DebugOnlyFilter)
            .boxed(),
        tracing_subscriber::fmt::Layer::default()
            .with_ansi(false)
            .event_format(format.clone())
            .with_writer(non_blocking_error)
            .with_filter(ErrorWarnFilter)
            .boxed(),
    ];

    Ok(layers)
}
