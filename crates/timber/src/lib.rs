#![deny(missing_docs)]

//! Sets up the diagnostic output of `hsnerd`: the `tracing` events emitted by
//! the bootstrapper itself and by the libraries it pulls in (`reqwest`, `zip`, ...).

mod formatter;

pub use tracing_core::Level;

/// possible log levels
pub const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Initializes a global tracing subscriber writing to stderr.
///
/// Nothing is printed when `level` is `None`. The more verbose the level,
/// the more detail each line carries.
pub fn init(level: Option<Level>) {
    match level {
        None => {}
        Some(level) if level >= Level::TRACE => formatter::threaded(level),
        Some(level) if level >= Level::DEBUG => formatter::detailed(level),
        Some(level) => formatter::compact(level),
    }
}
