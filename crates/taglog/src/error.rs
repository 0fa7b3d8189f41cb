//! 错误类型
//!
//! 记录日志本身永远成功，这里只有安装与配置解析两类错误。

use thiserror::Error;

/// 安装全局日志器失败
#[derive(Error, Debug)]
pub enum InstallError {
    /// 进程内已经安装过 `log` 门面的日志器
    #[error("a logger is already installed: {0}")]
    AlreadyInstalled(#[from] log::SetLoggerError),

    /// 环境变量中的配置无法解析
    #[error("invalid logger configuration: {0}")]
    Config(#[from] ParseError),
}

/// 配置字符串解析失败
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// 无法识别的日志级别
    #[error("unknown log level: {0:?}")]
    UnknownLevel(String),

    /// 无法识别的输出目标
    #[error("unknown output target: {0:?}")]
    UnknownTarget(String),

    /// 无法识别的返回值策略
    #[error("unknown return policy: {0:?}")]
    UnknownReturnPolicy(String),
}
