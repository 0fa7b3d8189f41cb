//! 与 `log` 门面的双向桥接
//!
//! - [`LogBridge`]：把 `log::info!(target: "Net", ...)` 之类的调用转交给
//!   任意 [`Log`] 实现，`target` 作为标签。测试进程启动时用 [`init`] 或
//!   [`install`] 安装，SDK 代码无需改动就会被拦截。
//! - [`FacadeLog`]：反方向，把 [`Log`] 调用转交给 `log` 门面，
//!   供注入到生产代码中使用。

use std::cell::Cell;

use log::{LevelFilter, Metadata, Record};

use crate::config::{Config, LOG_RESULT};
use crate::error::InstallError;
use crate::level::LogLevel;
use crate::log_core::LogCore;
use crate::Log;

/// 把 `log` 门面的记录转交给 [`Log`] 实现
#[derive(Debug)]
pub struct LogBridge<L> {
    inner: L,
}

impl<L: Log> LogBridge<L> {
    /// 包装一个日志器
    pub const fn new(inner: L) -> Self {
        Self { inner }
    }

    /// 被包装的日志器
    pub fn inner(&self) -> &L {
        &self.inner
    }
}

impl<L: Log> log::Log for LogBridge<L> {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        // 内层日志器又回到门面时（例如 FacadeLog），丢弃嵌套记录
        let Some(_guard) = ReentryGuard::enter() else {
            return;
        };
        let level = LogLevel::from(record.level());
        match record.args().as_str() {
            Some(msg) => self.inner.log(level, record.target(), msg),
            None => self.inner.log(level, record.target(), &record.args().to_string()),
        };
    }

    fn flush(&self) {}
}

thread_local! {
    static IN_BRIDGE: Cell<bool> = const { Cell::new(false) };
}

/// 当前线程正在 [`LogBridge`] 内转交记录
struct ReentryGuard;

impl ReentryGuard {
    fn enter() -> Option<Self> {
        if IN_BRIDGE.with(|flag| flag.replace(true)) {
            None
        } else {
            Some(Self)
        }
    }
}

impl Drop for ReentryGuard {
    fn drop(&mut self) {
        IN_BRIDGE.with(|flag| flag.set(false));
    }
}

/// 把日志器安装为进程内 `log` 门面的全局日志器
///
/// 日志器被泄漏为 `'static`，返回它的引用以便测试事后查询
/// （例如 [`CaptureLog::logs`](crate::CaptureLog::logs)）。
/// 最大级别设为 `Trace`：拦截器不做级别过滤。
///
/// 安装 [`FacadeLog`] 没有意义：它把记录转回门面，嵌套的记录会被丢弃。
pub fn install<L: Log + 'static>(logger: L) -> Result<&'static L, InstallError> {
    let bridge: &'static LogBridge<L> = Box::leak(Box::new(LogBridge::new(logger)));
    log::set_logger(bridge)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(bridge.inner())
}

/// 安装标准流拦截器，配置取自环境变量
pub fn try_init() -> Result<(), InstallError> {
    let config = Config::from_env()?;
    install(LogCore::from_config(config))?;
    Ok(())
}

/// 同 [`try_init`]，但不返回错误
///
/// 每个测试都可以调用；第一次之后的调用什么也不做。
/// 环境变量无法解析时退回默认配置安装，并记录一条 warn 日志。
pub fn init() {
    match try_init() {
        Ok(()) | Err(InstallError::AlreadyInstalled(_)) => {}
        Err(InstallError::Config(err)) => {
            if install(LogCore::stdout()).is_ok() {
                log::warn!(target: "taglog", "ignoring invalid configuration: {err}");
            }
        }
    }
}

/// 转交给 `log` 门面的日志器
///
/// 标签作为 `target`，返回 `0`。
#[derive(Debug, Default, Clone, Copy)]
pub struct FacadeLog;

impl Log for FacadeLog {
    fn log(&self, level: LogLevel, tag: &str, msg: &str) -> i32 {
        log::log!(target: tag, log::Level::from(level), "{}", msg);
        LOG_RESULT
    }
}
