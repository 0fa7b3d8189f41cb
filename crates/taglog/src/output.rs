//! 输出目标实现
//!
//! 写入器实现吞掉写入错误：日志调用没有失败路径。
//! 标准流走 `print!` / `eprint!`，这样测试框架的输出捕获能收到这些行。

use std::io::Write;

use parking_lot::Mutex;

use crate::LogOutput;
use crate::config::Target;

/// 写到进程标准输出
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutOutput;

impl LogOutput for StdoutOutput {
    fn write_str(&self, s: &str) {
        // 一次 print! 只加一次锁，整行不会与其他线程交错
        print!("{s}");
    }
}

/// 写到进程标准错误
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrOutput;

impl LogOutput for StderrOutput {
    fn write_str(&self, s: &str) {
        eprint!("{s}");
    }
}

/// 按 [`Target`] 选择的标准流
#[derive(Debug, Clone, Copy)]
pub struct StdStream(Target);

impl StdStream {
    /// 创建指向指定标准流的输出
    pub const fn new(target: Target) -> Self {
        Self(target)
    }

    /// 当前指向的标准流
    pub const fn target(&self) -> Target {
        self.0
    }
}

impl LogOutput for StdStream {
    fn write_str(&self, s: &str) {
        match self.0 {
            Target::Stdout => StdoutOutput.write_str(s),
            Target::Stderr => StderrOutput.write_str(s),
        }
    }
}

/// 写到任意 [`Write`]
///
/// 写入器放在互斥锁后面，一次 `write_str` 对应一次加锁，
/// 因此行与行之间不会交错。
#[derive(Debug)]
pub struct WriterOutput<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterOutput<W> {
    /// 包装一个写入器
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// 取回写入器
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> LogOutput for WriterOutput<W> {
    fn write_str(&self, s: &str) {
        let mut writer = self.writer.lock();
        let _ = writer.write_all(s.as_bytes());
        let _ = writer.flush();
    }
}
