//! 标准输出的 Mock 实现
//!
//! 注意：这里不直接依赖 `taglog` crate（避免循环依赖）。
//! 这些类型只实现 `std::io::Write`，由 `taglog::WriterOutput` 包装使用。

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// 可克隆的内存缓冲区
///
/// 所有克隆共享同一块缓冲区：一份交给日志器写入，另一份留在测试里读取。
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// 创建空缓冲区
    pub fn new() -> Self {
        Self::default()
    }

    /// 已写入的内容（按 UTF-8 解码，非法字节替换）
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    /// 按行切分的内容，不含换行符
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// 已写入的字节数
    pub fn len(&self) -> usize {
        self.bytes.lock().len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }

    /// 取走全部内容并清空
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.bytes.lock());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// 总是写入失败的写入器
///
/// 模拟已关闭的标准输出（例如管道另一端退出）。
#[derive(Debug, Clone, Copy)]
pub struct FailingWriter {
    kind: io::ErrorKind,
}

impl FailingWriter {
    /// 以 `BrokenPipe` 失败
    pub const fn new() -> Self {
        Self::with_kind(io::ErrorKind::BrokenPipe)
    }

    /// 以指定错误类型失败
    pub const fn with_kind(kind: io::ErrorKind) -> Self {
        Self { kind }
    }
}

impl Default for FailingWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(self.kind))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::from(self.kind))
    }
}
