use learnstreak_infrastructure::logging::{get_log_dir, init_logger};

#[test]
fn init_logger_creates_dir_and_is_idempotent() {
    let temp = tempfile::tempdir().expect("temp dir");
    let log_dir = temp.path().join("logs");

    init_logger(log_dir.clone(), "info").expect("first init");
    assert!(log_dir.is_dir());
    assert_eq!(get_log_dir(), Some(log_dir.clone()));

    // Second call must not try to replace the global subscriber.
    init_logger(temp.path().join("other"), "debug").expect("second init");
    assert_eq!(get_log_dir(), Some(log_dir));

    tracing::info!(user_id = "u-1", current = 3, "streak computed");
    log::info!("bridged from log");
}
