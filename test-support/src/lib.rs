//! 测试支持 crate
//!
//! 提供替代标准输出的内存写入器，用于断言日志输出

pub mod mock;

pub use mock::stdout::{FailingWriter, SharedBuffer};
