//! 日志拦截核心实现
//!
//! 该模块把一次日志调用变成一行文本：
//!
//! ```text
//! <level>: [<tag>] <msg>
//! ```
//!
//! 然后整行（连同结尾换行）一次性交给 [`LogOutput`]。没有级别过滤，
//! 没有缓冲，也没有结构化输出。

use std::error::Error;

use crate::config::Config;
use crate::entry::{cause_chain, push_causes};
use crate::level::LogLevel;
use crate::output::StdStream;
use crate::{Log, LogOutput};

/// 错误链中每一行的前缀
pub const CAUSE_PREFIX: &str = "    caused by: ";

/// 格式化一次日志调用
///
/// 标签和消息原样拼接，不做转义或裁剪；空标签输出为 `[]`。
///
/// # 示例
/// ```rust
/// use taglog::{LogLevel, format_line};
///
/// assert_eq!(format_line(LogLevel::Debug, "Net", "connected"), "debug: [Net] connected");
/// assert_eq!(format_line(LogLevel::Warn, "", "x"), "warn: [] x");
/// ```
pub fn format_line(level: LogLevel, tag: &str, msg: &str) -> String {
    format!("{}: [{}] {}", level.as_str(), tag, msg)
}

/// 格式化带错误原因的日志调用
///
/// 第一行与 [`format_line`] 相同，之后错误链中的每个错误各占一行：
///
/// ```text
/// warn: [Cache] write failed
///     caused by: disk full
///     caused by: os error 28
/// ```
pub fn format_line_with_cause(level: LogLevel, tag: &str, msg: &str, cause: &dyn Error) -> String {
    format_line(level, tag, &fold_cause(msg, cause))
}

/// 把错误链折叠进消息正文
pub(crate) fn fold_cause(msg: &str, cause: &dyn Error) -> String {
    let mut folded = msg.to_string();
    push_causes(&mut folded, &cause_chain(cause));
    folded
}

/// 核心日志拦截器
///
/// 持有一个输出目标和一份配置。[`LogCore::stdout`] 就是测试中替代
/// 平台日志设施的那个实现：写标准输出，每次调用返回 `0`。
///
/// # 线程安全性
///
/// `LogCore` 本身不带任何锁；行的完整性由输出目标保证
/// （标准流按行加锁，[`WriterOutput`](crate::WriterOutput) 使用互斥锁）。
#[derive(Debug)]
pub struct LogCore<O = StdStream> {
    output: O,
    config: Config,
}

/// 写标准流的拦截器
pub type StdoutLog = LogCore<StdStream>;

impl LogCore<StdStream> {
    /// 写标准输出、返回 `0` 的拦截器
    ///
    /// ```rust
    /// use taglog::{Log, LogCore};
    ///
    /// let log = LogCore::stdout();
    /// assert_eq!(log.d("Net", "connected"), 0);
    /// ```
    pub fn stdout() -> Self {
        Self::from_config(Config::default())
    }

    /// 按配置中的目标选择标准输出或标准错误
    pub fn from_config(config: Config) -> Self {
        Self {
            output: StdStream::new(config.target()),
            config,
        }
    }
}

impl<O: LogOutput> LogCore<O> {
    /// 使用默认配置包装一个输出目标
    pub fn new(output: O) -> Self {
        Self::with_config(output, Config::default())
    }

    /// 使用自定义配置包装一个输出目标
    ///
    /// 输出目标由调用方给出，配置中的 [`Target`](crate::Target) 在这里不起作用，
    /// 只有返回值策略生效。
    pub fn with_config(output: O, config: Config) -> Self {
        Self { output, config }
    }

    /// 当前配置
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 输出目标
    pub fn output(&self) -> &O {
        &self.output
    }

    /// 取回输出目标
    pub fn into_output(self) -> O {
        self.output
    }

    /// 核心日志记录实现
    ///
    /// 1. 格式化为 `<level>: [<tag>] <msg>`
    /// 2. 按返回值策略计算结果
    /// 3. 追加换行后一次写出
    pub fn _log(&self, level: LogLevel, tag: &str, msg: &str) -> i32 {
        let mut line = format_line(level, tag, msg);
        let result = self.config.return_policy().result_for(&line);
        line.push('\n');
        self.output.write_str(&line);
        result
    }
}

impl<O: LogOutput> Log for LogCore<O> {
    fn log(&self, level: LogLevel, tag: &str, msg: &str) -> i32 {
        self._log(level, tag, msg)
    }
}
