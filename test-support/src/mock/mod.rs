//! Mock 实现模块
//!
//! 提供替代进程标准流的 Mock 实现，用于测试

pub mod stdout;
