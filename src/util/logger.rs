use tracing_subscriber::{Layer, Registry, filter::LevelFilter, layer::SubscriberExt,
                         util::SubscriberInitExt};

/// Maps the number of `-v` flags to a log level filter.
///
/// Warnings are always shown; one flag adds debug events, two or more add the
/// per-token trace events.
#[must_use]
pub const fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs a compact `fmt` subscriber writing to stderr.
///
/// Lines carry the level only; no timestamps, targets or colors, so the
/// output does not interleave badly with results printed on stdout. A second
/// call leaves the first subscriber in place.
pub fn init_with_level(filter: LevelFilter) {
    let layer = tracing_subscriber::fmt::layer().without_time()
                                                .with_target(false)
                                                .with_level(true)
                                                .with_ansi(false)
                                                .with_writer(std::io::stderr)
                                                .compact()
                                                .with_filter(filter);

    if let Err(e) = Registry::default().with(layer).try_init() {
        tracing::debug!("logger already initialized: {e}");
    }
}
