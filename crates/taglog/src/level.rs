//! 日志级别定义

use core::fmt;
use core::str::FromStr;

use crate::error::ParseError;

/// 日志级别
///
/// 只保留四个级别，与 SDK 中实际使用的入口一一对应。
/// 顺序按严重程度递增：`Debug < Info < Warn < Error`。
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// 调试信息
    Debug = 0,
    /// 普通信息
    Info = 1,
    /// 警告
    Warn = 2,
    /// 错误
    Error = 3,
}

impl LogLevel {
    /// 全部级别，按严重程度递增
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    /// 输出行中使用的级别标签
    pub const fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    /// 单字母缩写（d / i / w / e）
    pub const fn short(&self) -> char {
        match self {
            LogLevel::Debug => 'd',
            LogLevel::Info => 'i',
            LogLevel::Warn => 'w',
            LogLevel::Error => 'e',
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let single = match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c.to_ascii_lowercase()),
            _ => None,
        };
        LogLevel::ALL
            .into_iter()
            .find(|level| s.eq_ignore_ascii_case(level.as_str()) || single == Some(level.short()))
            .ok_or_else(|| ParseError::UnknownLevel(s.to_string()))
    }
}

// `Trace` 没有对应的入口，并入 `Debug`
impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace | log::Level::Debug => LogLevel::Debug,
            log::Level::Info => LogLevel::Info,
            log::Level::Warn => LogLevel::Warn,
            log::Level::Error => LogLevel::Error,
        }
    }
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Info => log::Level::Info,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Error => log::Level::Error,
        }
    }
}
