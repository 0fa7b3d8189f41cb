//! 带标签的日志能力
//!
//! SDK 代码通过 [`Log`] trait 记录 `(级别, 标签, 消息)`，而不是直接调用某个
//! 平台的静态日志设施。生产环境注入真正的实现，测试中注入拦截器，
//! 测试因此可以脱离完整的平台运行时运行。
//!
//! # 组件
//!
//! - [`level`] - 四个日志级别（debug / info / warn / error）
//! - [`log_core`] - 行格式化与标准输出拦截器 ([`LogCore`])
//! - [`output`] - 输出目标（标准输出、标准错误、任意 `io::Write`）
//! - [`capture`] - 记录型测试替身 ([`CaptureLog`])
//! - [`bridge`] - 与 `log` 门面的桥接与全局安装
//! - [`config`] - 默认常量与 [`Config`]
//! - [`macros`] - 带格式化参数的日志宏 (`log_d!`, `log_e!`, 等)
//!
//! # 输出格式
//!
//! 每次调用输出一行：
//!
//! ```text
//! <level>: [<tag>] <msg>
//! ```
//!
//! 不按级别过滤，不缓冲，调用总是成功并返回 `0`。
//!
//! # 示例
//!
//! ```rust
//! use std::sync::Arc;
//! use taglog::{CaptureLog, Log};
//!
//! struct Fetcher {
//!     log: Arc<dyn Log>,
//! }
//!
//! impl Fetcher {
//!     fn fetch(&self) {
//!         self.log.d("Net", "connected");
//!     }
//! }
//!
//! let capture = Arc::new(CaptureLog::new());
//! let fetcher = Fetcher { log: capture.clone() };
//! fetcher.fetch();
//! assert_eq!(capture.lines(), ["debug: [Net] connected"]);
//! ```

use std::error::Error;
use std::sync::Arc;

pub mod bridge;
pub mod capture;
pub mod config;
mod entry;
mod error;
pub mod level;
pub mod log_core;
pub mod macros;
pub mod output;

pub use bridge::{FacadeLog, LogBridge, init, install, try_init};
pub use capture::CaptureLog;
pub use config::{Config, LOG_RESULT, ReturnPolicy, Target};
pub use entry::LogItem;
pub use error::{InstallError, ParseError};
pub use level::LogLevel;
pub use log_core::{LogCore, StdoutLog, format_line, format_line_with_cause};
pub use output::{StdStream, StderrOutput, StdoutOutput, WriterOutput};

// ========== Trait 定义 ==========

/// 日志能力
///
/// 只需实现 [`Log::log`]；四个入口 `d` / `i` / `w` / `e` 各自补上固定级别。
/// 返回值沿用平台日志接口的约定，是一个整数（默认实现均为 `0`）。
pub trait Log: Send + Sync {
    /// 记录一条日志
    fn log(&self, level: LogLevel, tag: &str, msg: &str) -> i32;

    /// 记录一条附带错误原因的日志
    ///
    /// 默认把错误链折叠进消息正文，输出与
    /// [`format_line_with_cause`] 一致。
    fn log_with_cause(&self, level: LogLevel, tag: &str, msg: &str, cause: &dyn Error) -> i32 {
        self.log(level, tag, &log_core::fold_cause(msg, cause))
    }

    /// Debug 级别
    fn d(&self, tag: &str, msg: &str) -> i32 {
        self.log(LogLevel::Debug, tag, msg)
    }

    /// Info 级别
    fn i(&self, tag: &str, msg: &str) -> i32 {
        self.log(LogLevel::Info, tag, msg)
    }

    /// Warn 级别
    fn w(&self, tag: &str, msg: &str) -> i32 {
        self.log(LogLevel::Warn, tag, msg)
    }

    /// Error 级别
    fn e(&self, tag: &str, msg: &str) -> i32 {
        self.log(LogLevel::Error, tag, msg)
    }

    /// Warn 级别，附带错误原因
    fn w_with_cause(&self, tag: &str, msg: &str, cause: &dyn Error) -> i32 {
        self.log_with_cause(LogLevel::Warn, tag, msg, cause)
    }

    /// Error 级别，附带错误原因
    fn e_with_cause(&self, tag: &str, msg: &str, cause: &dyn Error) -> i32 {
        self.log_with_cause(LogLevel::Error, tag, msg, cause)
    }
}

/// 日志输出 trait
///
/// 实现此 trait 以提供一行日志的写出能力。传入的字符串已经带有结尾换行，
/// 实现应一次写完，不应拆分。
pub trait LogOutput: Send + Sync {
    /// 写出字符串
    fn write_str(&self, s: &str);
}

// ========== 转发实现 ==========

macro_rules! forward_log {
    ($($ty:ty),+) => {
        $(
            impl<L: Log + ?Sized> Log for $ty {
                fn log(&self, level: LogLevel, tag: &str, msg: &str) -> i32 {
                    (**self).log(level, tag, msg)
                }

                fn log_with_cause(
                    &self,
                    level: LogLevel,
                    tag: &str,
                    msg: &str,
                    cause: &dyn Error,
                ) -> i32 {
                    (**self).log_with_cause(level, tag, msg, cause)
                }
            }
        )+
    };
}

forward_log!(&L, Box<L>, Arc<L>);

impl<O: LogOutput + ?Sized> LogOutput for &O {
    fn write_str(&self, s: &str) {
        (**self).write_str(s)
    }
}

impl<O: LogOutput + ?Sized> LogOutput for Arc<O> {
    fn write_str(&self, s: &str) {
        (**self).write_str(s)
    }
}

#[cfg(test)]
mod tests;
