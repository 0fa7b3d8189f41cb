use super::*;
use std::sync::Arc;
use std::thread;

#[test]
fn test_sequential_order_preserved() {
    let (log, out) = buffered();

    for i in 0..5 {
        test_log!(log, LogLevel::Debug, "Seq", "message {}", i);
    }

    let expected: Vec<String> = (0..5).map(|i| format!("debug: [Seq] message {i}")).collect();
    assert_eq!(out.lines(), expected);
}

#[test]
fn test_mixed_levels_keep_call_order() {
    let (log, out) = buffered();

    log.e("A", "1");
    log.d("B", "2");
    log.w("C", "3");
    log.i("D", "4");

    assert_eq!(
        out.lines(),
        ["error: [A] 1", "debug: [B] 2", "warn: [C] 3", "info: [D] 4"]
    );
}

#[test]
fn test_concurrent_lines_do_not_interleave() {
    let (log, out) = buffered();
    let log = Arc::new(log);

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let log = Arc::clone(&log);
            thread::spawn(move || {
                for i in 0..50 {
                    log.i(&format!("T{t}"), &format!("line {i}"));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let lines = out.lines();
    assert_eq!(lines.len(), 200);
    for line in &lines {
        assert!(line.starts_with("info: [T"), "garbled line: {line:?}");
        assert!(line.contains("] line "), "garbled line: {line:?}");
    }

    // Within one thread, order is preserved.
    let t0: Vec<&String> = lines.iter().filter(|l| l.starts_with("info: [T0]")).collect();
    for (i, line) in t0.iter().enumerate() {
        assert_eq!(**line, format!("info: [T0] line {i}"));
    }
}
