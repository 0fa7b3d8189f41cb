//! 日志配置
//!
//! 常量给出默认行为；[`Config`] 允许测试在构造日志器时覆盖它们。

use core::str::FromStr;

use crate::error::ParseError;

/// 每次日志调用的固定返回值
pub const LOG_RESULT: i32 = 0;

/// 默认输出目标
pub const DEFAULT_TARGET: Target = Target::Stdout;

/// 默认返回值策略
pub const DEFAULT_RETURN_POLICY: ReturnPolicy = ReturnPolicy::Zero;

/// 指定输出目标的环境变量（`stdout` / `stderr`）
pub const TARGET_ENV: &str = "TAGLOG_TARGET";

/// 指定返回值策略的环境变量（`zero` / `bytes`）
pub const RETURN_POLICY_ENV: &str = "TAGLOG_RETURN";

/// 输出目标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// 标准输出
    Stdout,
    /// 标准错误
    Stderr,
}

impl FromStr for Target {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stdout" | "out" => Ok(Target::Stdout),
            "stderr" | "err" => Ok(Target::Stderr),
            other => Err(ParseError::UnknownTarget(other.to_string())),
        }
    }
}

/// 日志调用的返回值策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnPolicy {
    /// 总是返回 [`LOG_RESULT`]
    Zero,
    /// 返回格式化文本的字节数（不含结尾换行）
    BytesWritten,
}

impl ReturnPolicy {
    /// 根据策略计算返回值
    pub fn result_for(&self, formatted: &str) -> i32 {
        match self {
            ReturnPolicy::Zero => LOG_RESULT,
            ReturnPolicy::BytesWritten => i32::try_from(formatted.len()).unwrap_or(i32::MAX),
        }
    }
}

impl FromStr for ReturnPolicy {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" | "0" => Ok(ReturnPolicy::Zero),
            "bytes" | "bytes_written" => Ok(ReturnPolicy::BytesWritten),
            other => Err(ParseError::UnknownReturnPolicy(other.to_string())),
        }
    }
}

/// 日志器配置
///
/// ```rust
/// use taglog::{Config, ReturnPolicy, Target};
///
/// let config = Config::default()
///     .with_target(Target::Stderr)
///     .with_return_policy(ReturnPolicy::BytesWritten);
/// assert_eq!(config.target(), Target::Stderr);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    target: Target,
    return_policy: ReturnPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            return_policy: DEFAULT_RETURN_POLICY,
        }
    }
}

impl Config {
    /// 从环境变量读取配置，未设置的项保持默认值
    pub fn from_env() -> Result<Self, ParseError> {
        let mut config = Self::default();
        if let Ok(target) = std::env::var(TARGET_ENV) {
            config.target = target.parse()?;
        }
        if let Ok(policy) = std::env::var(RETURN_POLICY_ENV) {
            config.return_policy = policy.parse()?;
        }
        Ok(config)
    }

    /// 设置输出目标
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    /// 设置返回值策略
    pub fn with_return_policy(mut self, policy: ReturnPolicy) -> Self {
        self.return_policy = policy;
        self
    }

    /// 当前输出目标
    pub fn target(&self) -> Target {
        self.target
    }

    /// 当前返回值策略
    pub fn return_policy(&self) -> ReturnPolicy {
        self.return_policy
    }
}
