use std::{env, io};

use tracing_subscriber::fmt;

use crate::Level;

/// error, warn and info: one short line per event
pub(crate) fn compact(level: Level) {
    fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_ansi(colored())
        .without_time()
        .with_target(false)
        .compact()
        .init();
}

/// debug: timestamps and the crate emitting each event (`binstall`, `houston`, `hsnerd`)
pub(crate) fn detailed(level: Level) {
    fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_ansi(colored())
        .with_target(true)
        .init();
}

/// trace: also the source location and the worker thread, so blocking
/// extraction can be told apart from the download running beside it
pub(crate) fn threaded(level: Level) {
    fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_ansi(colored())
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .init();
}

/// Same switches as the console styling in `nerd-std`.
fn colored() -> bool {
    ["NO_COLOR", "HSNERD_NO_COLOR"].iter().all(|key| {
        matches!(
            env::var(key).as_deref(),
            Err(..) | Ok("") | Ok("0") | Ok("false") | Ok("False") | Ok("FALSE")
        )
    })
}
