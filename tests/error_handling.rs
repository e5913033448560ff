use drresearcher::error;
use drresearcher::ResearcherError;

#[test]
fn test_user_friendly_messages() {
    let msg = error::user_friendly_message(&ResearcherError::LaunchError(
        "https://example.com/research-mode".into(),
    ));
    assert!(msg.contains("https://example.com/research-mode"));

    let msg = error::user_friendly_message(&ResearcherError::StorageError("disk full".into()));
    assert!(msg.contains("this session"));
}

#[test]
fn test_recoverable_errors() {
    assert!(error::is_recoverable(&ResearcherError::LaunchError("x".into())));
    assert!(error::is_recoverable(&ResearcherError::StorageError("x".into())));
    assert!(!error::is_recoverable(&ResearcherError::TuiError("x".into())));
    assert!(!error::is_recoverable(&ResearcherError::ConfigError("x".into())));
}

#[test]
fn test_io_error_source() {
    use std::error::Error;
    let err = ResearcherError::from(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
    assert!(err.source().is_some());
    assert!(err.to_string().contains("boom"));
}
