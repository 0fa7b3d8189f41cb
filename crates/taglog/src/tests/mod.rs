// Unit tests for taglog.
//
// Output is routed into an in-memory `SharedBuffer` from `test-support` instead of the real
// stdout, so every test can assert on the exact bytes written.

use crate::log_core::LogCore;
use crate::{Config, Log, LogLevel, ReturnPolicy, WriterOutput};
use test_support::SharedBuffer;

/// Test-only logging helper (mirrors `log_*!` macro behavior, but targets a local `LogCore`).
macro_rules! test_log {
    ($logger:expr, $level:expr, $tag:expr, $($arg:tt)*) => {
        $logger._log($level, $tag, &format!($($arg)*))
    };
}

type BufferedLog = LogCore<WriterOutput<SharedBuffer>>;

/// A `LogCore` writing into a fresh buffer; the returned clone reads what was written.
fn buffered() -> (BufferedLog, SharedBuffer) {
    buffered_with(Config::default())
}

fn buffered_with(config: Config) -> (BufferedLog, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let log = LogCore::with_config(WriterOutput::new(buffer.clone()), config);
    (log, buffer)
}

mod config;
mod format;
mod order;
