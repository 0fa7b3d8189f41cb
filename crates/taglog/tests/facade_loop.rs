//! Installing `FacadeLog` as the facade logger must not loop back into itself.

use taglog::{FacadeLog, Log};

#[test]
fn test_facade_installed_as_global_drops_nested_records() {
    let installed = taglog::install(FacadeLog).unwrap();

    // FacadeLog -> log! -> LogBridge -> FacadeLog -> log! is cut after one hop.
    assert_eq!(installed.d("Net", "connected"), 0);
    assert_eq!(FacadeLog.e("Auth", "token expired"), 0);

    log::info!(target: "Net", "still alive");
    log::warn!(target: "Net", "{}", "and again");
}
