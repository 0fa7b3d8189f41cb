use super::*;
use crate::format_line;
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(LogLevel::Debug, "debug")]
#[case(LogLevel::Info, "info")]
#[case(LogLevel::Warn, "warn")]
#[case(LogLevel::Error, "error")]
fn test_level_label(#[case] level: LogLevel, #[case] label: &str) {
    assert_eq!(format_line(level, "Tag", "msg"), format!("{label}: [Tag] msg"));
}

#[test]
fn test_no_escaping() {
    let line = format_line(LogLevel::Info, "a]b", "[x] \"quoted\"\ttab");
    assert_eq!(line, "info: [a]b] [x] \"quoted\"\ttab");
}

#[test]
fn test_whitespace_preserved() {
    let line = format_line(LogLevel::Debug, "  Net ", "  padded  ");
    assert_eq!(line, "debug: [  Net ]   padded  ");
}

#[test]
fn test_utf8_message() {
    let (log, out) = buffered();

    // Non-ASCII strings are intentional here to validate UTF-8 handling.
    log.i("网络", "你好，世界！");
    log.i("Net", "Hello, мир!");

    assert_eq!(out.lines(), ["info: [网络] 你好，世界！", "info: [Net] Hello, мир!"]);
}

#[test]
fn test_long_message_not_truncated() {
    let (log, out) = buffered();
    let long_msg = "a".repeat(10_000);

    log.d("Big", &long_msg);

    assert_eq!(out.contents(), format!("debug: [Big] {long_msg}\n"));
}

#[test]
fn test_embedded_newline_written_verbatim() {
    let (log, out) = buffered();

    log.w("Multi", "first\nsecond");

    assert_eq!(out.contents(), "warn: [Multi] first\nsecond\n");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// For any tag and message, every entry point writes exactly one formatted line.
    #[test]
    fn prop_written_text_matches_format(
        tag in "[^\r\n]{0,16}",
        msg in "[^\r\n]{0,64}",
        index in 0usize..4,
    ) {
        let level = LogLevel::ALL[index];
        let (log, out) = buffered();

        let result = match level {
            LogLevel::Debug => log.d(&tag, &msg),
            LogLevel::Info => log.i(&tag, &msg),
            LogLevel::Warn => log.w(&tag, &msg),
            LogLevel::Error => log.e(&tag, &msg),
        };

        prop_assert_eq!(result, 0);
        prop_assert_eq!(out.contents(), format!("{}: [{}] {}\n", level.as_str(), tag, msg));
    }

    /// Formatting is a pure function of its inputs.
    #[test]
    fn prop_format_is_deterministic(tag in ".{0,16}", msg in ".{0,64}") {
        prop_assert_eq!(
            format_line(LogLevel::Warn, &tag, &msg),
            format_line(LogLevel::Warn, &tag, &msg)
        );
    }
}
