//! helper functions for the logging backend
use flexi_logger::{self, Logger};
use log::Level::Warn;

/// Creates a logging backend for use in testing
/// By default all logs with Warn or higher are printed to stdout.
/// The level can be overridden through `RUST_LOG`, e.g. `RUST_LOG=algorithms=trace`.
///
/// logs can be written via log::{error!, warn!, info!, debug!, trace!}
pub fn init_test_logging() {
    if !log::log_enabled!(Warn) {
        // Several tests of one process race for the global logger, only the first one wins.
        if let Err(error) = Logger::with_env_or_str("warn")
            .format(flexi_logger::colored_opt_format)
            .start()
        {
            log::debug!("Logging was already initialized: {}", error);
        }
    }
}
