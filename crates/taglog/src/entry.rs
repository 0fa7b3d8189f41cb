//! 日志条目
//!
//! 日志调用本身不保存任何状态；只有 [`CaptureLog`](crate::CaptureLog)
//! 需要把一次调用固化为 [`LogItem`] 以便测试查询。

use core::fmt;
use std::error::Error;

use crate::level::LogLevel;
use crate::log_core::{CAUSE_PREFIX, format_line};

/// 一次日志调用的记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogItem {
    level: LogLevel,
    tag: String,
    msg: String,
    causes: Vec<String>,
}

impl LogItem {
    /// 创建不带错误原因的条目
    pub fn new(level: LogLevel, tag: &str, msg: &str) -> Self {
        Self {
            level,
            tag: tag.to_string(),
            msg: msg.to_string(),
            causes: Vec::new(),
        }
    }

    /// 附加错误及其 `source()` 链
    pub fn with_cause(mut self, cause: &dyn Error) -> Self {
        self.causes = cause_chain(cause);
        self
    }

    /// 日志级别
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// 日志来源标签
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// 消息正文
    pub fn msg(&self) -> &str {
        &self.msg
    }

    /// 错误链中每个错误的描述，最外层在前
    pub fn causes(&self) -> &[String] {
        &self.causes
    }

    /// 写入输出流的完整文本（不含结尾换行）
    pub fn to_output(&self) -> String {
        let mut out = format_line(self.level, &self.tag, &self.msg);
        push_causes(&mut out, &self.causes);
        out
    }
}

impl fmt::Display for LogItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [{}] {}", self.level, self.tag, self.msg)
    }
}

/// 每个错误单独成行追加到 `out`
pub(crate) fn push_causes(out: &mut String, causes: &[String]) {
    for cause in causes {
        out.push('\n');
        out.push_str(CAUSE_PREFIX);
        out.push_str(cause);
    }
}

/// 展开错误链
pub(crate) fn cause_chain(cause: &dyn Error) -> Vec<String> {
    let mut chain = vec![cause.to_string()];
    let mut current = cause.source();
    while let Some(err) = current {
        chain.push(err.to_string());
        current = err.source();
    }
    chain
}
