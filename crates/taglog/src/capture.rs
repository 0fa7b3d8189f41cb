//! 记录型测试替身
//!
//! [`CaptureLog`] 按调用顺序保存每一条日志，测试可以在事后断言
//! “某条消息确实被打印过”。可选地同时把格式化后的行回显到一个输出目标。

use core::fmt;
use std::error::Error;

use parking_lot::Mutex;

use crate::config::{DEFAULT_RETURN_POLICY, ReturnPolicy};
use crate::entry::LogItem;
use crate::level::LogLevel;
use crate::output::StdoutOutput;
use crate::{Log, LogOutput};

/// 记录所有日志调用的日志器
pub struct CaptureLog {
    items: Mutex<Vec<LogItem>>,
    echo: Option<Box<dyn LogOutput>>,
    return_policy: ReturnPolicy,
}

impl CaptureLog {
    /// 只记录，不输出
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
            echo: None,
            return_policy: DEFAULT_RETURN_POLICY,
        }
    }

    /// 记录并回显到标准输出
    pub fn echo_stdout() -> Self {
        Self::with_output(StdoutOutput)
    }

    /// 记录并回显到指定输出目标
    pub fn with_output<O: LogOutput + 'static>(output: O) -> Self {
        Self {
            echo: Some(Box::new(output)),
            ..Self::new()
        }
    }

    /// 设置返回值策略
    pub fn with_return_policy(mut self, policy: ReturnPolicy) -> Self {
        self.return_policy = policy;
        self
    }

    fn record(&self, item: LogItem) -> i32 {
        let text = item.to_output();
        let result = self.return_policy.result_for(&text);

        // 回显和入队在同一把锁内完成，两边顺序一致
        let mut items = self.items.lock();
        if let Some(echo) = &self.echo {
            echo.write_str(&(text + "\n"));
        }
        items.push(item);
        result
    }

    /// 全部记录的快照
    pub fn logs(&self) -> Vec<LogItem> {
        self.items.lock().clone()
    }

    /// 全部消息正文
    pub fn messages(&self) -> Vec<String> {
        self.items
            .lock()
            .iter()
            .map(|item| item.msg().to_string())
            .collect()
    }

    /// 全部格式化后的行（不含错误链）
    pub fn lines(&self) -> Vec<String> {
        self.items.lock().iter().map(ToString::to_string).collect()
    }

    /// 指定标签的记录
    pub fn logs_for_tag(&self, tag: &str) -> Vec<LogItem> {
        self.items
            .lock()
            .iter()
            .filter(|item| item.tag() == tag)
            .cloned()
            .collect()
    }

    /// 是否有消息包含 `needle`
    pub fn contains_message(&self, needle: &str) -> bool {
        self.items.lock().iter().any(|item| item.msg().contains(needle))
    }

    /// 记录条数
    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    /// 是否尚无记录
    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    /// 取走全部记录并清空
    pub fn take(&self) -> Vec<LogItem> {
        core::mem::take(&mut *self.items.lock())
    }

    /// 清空记录
    pub fn clear(&self) {
        self.items.lock().clear();
    }
}

impl Default for CaptureLog {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CaptureLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureLog")
            .field("len", &self.len())
            .field("echo", &self.echo.is_some())
            .field("return_policy", &self.return_policy)
            .finish()
    }
}

impl Log for CaptureLog {
    fn log(&self, level: LogLevel, tag: &str, msg: &str) -> i32 {
        self.record(LogItem::new(level, tag, msg))
    }

    fn log_with_cause(&self, level: LogLevel, tag: &str, msg: &str, cause: &dyn Error) -> i32 {
        self.record(LogItem::new(level, tag, msg).with_cause(cause))
    }
}
