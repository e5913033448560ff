//! External destination launcher

use crate::{ResearcherError, Result};

/// Opens a URL in a new browsing context. No response is consumed.
pub trait Launcher {
    fn open(&self, url: &str) -> Result<()>;
}

/// Launcher using the platform's default browser
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open(&self, url: &str) -> Result<()> {
        open::that_detached(url).map_err(|e| {
            tracing::error!(url, error = %e, "failed to open external destination");
            ResearcherError::LaunchError(url.to_string())
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every URL instead of opening it
    #[derive(Debug, Default, Clone)]
    pub(crate) struct RecordingLauncher {
        pub(crate) opened: Rc<RefCell<Vec<String>>>,
        pub(crate) fail: bool,
    }

    impl Launcher for RecordingLauncher {
        fn open(&self, url: &str) -> Result<()> {
            self.opened.borrow_mut().push(url.to_string());
            if self.fail {
                Err(ResearcherError::LaunchError(url.to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_recording_launcher_reports_failure() {
        let launcher = RecordingLauncher {
            fail: true,
            ..Default::default()
        };
        assert!(launcher.open("https://example.org").is_err());
        assert_eq!(*launcher.opened.borrow(), vec!["https://example.org".to_string()]);
    }
}
