use super::*;
use crate::{ParseError, StdStream, Target};
use rstest::rstest;

#[rstest]
#[case("debug", LogLevel::Debug)]
#[case("INFO", LogLevel::Info)]
#[case(" Warn ", LogLevel::Warn)]
#[case("e", LogLevel::Error)]
#[case("D", LogLevel::Debug)]
fn test_parse_level(#[case] input: &str, #[case] expected: LogLevel) {
    assert_eq!(input.parse::<LogLevel>(), Ok(expected));
}

#[rstest]
#[case("trace")]
#[case("")]
#[case("x")]
#[case("warning")]
fn test_parse_level_rejects(#[case] input: &str) {
    assert!(matches!(input.parse::<LogLevel>(), Err(ParseError::UnknownLevel(_))));
}

#[test]
fn test_level_display_and_order() {
    assert_eq!(LogLevel::Warn.to_string(), "warn");
    assert!(LogLevel::Debug < LogLevel::Info);
    assert!(LogLevel::Warn < LogLevel::Error);
}

#[test]
fn test_log_crate_level_mapping() {
    assert_eq!(LogLevel::from(log::Level::Trace), LogLevel::Debug);
    assert_eq!(LogLevel::from(log::Level::Debug), LogLevel::Debug);
    assert_eq!(LogLevel::from(log::Level::Error), LogLevel::Error);
    for level in LogLevel::ALL {
        assert_eq!(LogLevel::from(log::Level::from(level)), level);
    }
}

#[test]
fn test_parse_target_and_policy() {
    assert_eq!("stdout".parse::<Target>(), Ok(Target::Stdout));
    assert_eq!("STDERR".parse::<Target>(), Ok(Target::Stderr));
    assert!(matches!("file".parse::<Target>(), Err(ParseError::UnknownTarget(_))));

    assert_eq!("zero".parse::<ReturnPolicy>(), Ok(ReturnPolicy::Zero));
    assert_eq!("bytes".parse::<ReturnPolicy>(), Ok(ReturnPolicy::BytesWritten));
    assert!(matches!(
        "chars".parse::<ReturnPolicy>(),
        Err(ParseError::UnknownReturnPolicy(_))
    ));
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.target(), Target::Stdout);
    assert_eq!(config.return_policy(), ReturnPolicy::Zero);
}

#[test]
fn test_from_config_selects_stream() {
    let log = LogCore::from_config(Config::default().with_target(Target::Stderr));
    assert_eq!(log.output().target(), Target::Stderr);

    let log = LogCore::stdout();
    assert_eq!(log.output().target(), StdStream::new(Target::Stdout).target());
}
