//! Logger constructors for tests and for callers that want no logging.

use slog::{o, Discard, Drain as _, Logger};
use slog_async::Async;
use slog_term::{FullFormat, PlainSyncDecorator, TestStdoutWriter};

/// A logger whose output is captured by the test harness and shown for
/// failing tests.
pub fn test_logger() -> Logger {
    let decorator = PlainSyncDecorator::new(TestStdoutWriter);
    let drain = FullFormat::new(decorator).build().fuse();
    let drain = Async::new(drain).build().fuse();
    Logger::root(drain, o!())
}

/// A logger that discards every record.
pub fn null_logger() -> Logger {
    Logger::root(Discard, o!())
}

#[cfg(test)]
mod tests {
    use super::*;
    use slog::info;

    #[test]
    fn loggers_accept_records() {
        info!(test_logger(), "to the test harness"; "key" => 1);
        info!(null_logger(), "to nowhere");
    }
}
