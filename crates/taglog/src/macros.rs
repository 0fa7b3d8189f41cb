//! 日志宏
//!
//! 在 [`Log`](crate::Log) 的四个入口上加一层 `format!`：
//!
//! ```rust
//! use taglog::{CaptureLog, log_d, log_e};
//!
//! let log = CaptureLog::new();
//! let host = "example.com";
//! log_d!(log, "Net", "connected to {}", host);
//! log_e!(log, "Auth", "token expired");
//!
//! assert_eq!(log.lines(), ["debug: [Net] connected to example.com", "error: [Auth] token expired"]);
//! ```
//!
//! # 宏列表
//!
//! - `log_d!` - Debug 级别
//! - `log_i!` - Info 级别
//! - `log_w!` - Warn 级别
//! - `log_e!` - Error 级别
//!
//! 每个宏的值就是对应入口的返回值（`i32`）。

/// 以 **DEBUG** 级别记录消息
#[macro_export]
macro_rules! log_d {
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::Log::d(&$logger, $tag, &::std::format!($($arg)+))
    };
}

/// 以 **INFO** 级别记录消息
#[macro_export]
macro_rules! log_i {
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::Log::i(&$logger, $tag, &::std::format!($($arg)+))
    };
}

/// 以 **WARN** 级别记录消息
#[macro_export]
macro_rules! log_w {
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::Log::w(&$logger, $tag, &::std::format!($($arg)+))
    };
}

/// 以 **ERROR** 级别记录消息
#[macro_export]
macro_rules! log_e {
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::Log::e(&$logger, $tag, &::std::format!($($arg)+))
    };
}
