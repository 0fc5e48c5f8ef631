//! Инициализация журналирования.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Фильтр по умолчанию; `RUST_LOG` имеет приоритет.
#[must_use]
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "roman_calculator=debug"
    } else {
        "roman_calculator=warn"
    }
}

/// Настраивает вывод журнала в stderr, чтобы stdout оставался чистым.
pub fn init_cli_logger(verbose: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
