//! Reporter that relays a poll session to the automation host.

use std::sync::atomic::{AtomicBool, Ordering};

use nupoll_core::error::NupollError;
use nupoll_core::types::ProbeRequest;
use nupoll_registry::{PollEvent, Reporter};

use crate::output::OutputHandler;

/// Prints progress for the operator and records whether a failure was signaled
pub struct HostReporter<'a> {
    output: &'a OutputHandler,
    request: ProbeRequest,
    registry_host: String,
    failed: AtomicBool,
}

impl<'a> HostReporter<'a> {
    pub fn new(output: &'a OutputHandler, request: ProbeRequest, registry_host: String) -> Self {
        Self {
            output,
            request,
            registry_host,
            failed: AtomicBool::new(false),
        }
    }

    /// Whether `set_failed` has been called; drives the exit status
    pub fn has_failed(&self) -> bool {
        self.failed.load(Ordering::SeqCst)
    }
}

impl Reporter for HostReporter<'_> {
    fn progress(&self, event: &PollEvent) {
        match event {
            PollEvent::Probing { .. } => {}
            PollEvent::Waiting {
                attempt,
                max_attempts,
                delay,
            } => self.output.info(&format!(
                "Attempt {} of {}: Package not indexed yet. Retrying in {} seconds...",
                attempt,
                max_attempts,
                delay.as_secs_f64()
            )),
            PollEvent::Indexed { .. } => self.output.success(&format!(
                "Package {} version {} is indexed on {}.",
                self.request.package_name(),
                self.request.package_version(),
                self.registry_host
            )),
        }
    }

    fn set_failed(&self, error: &NupollError) {
        self.failed.store(true, Ordering::SeqCst);
        self.output.failure(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reporter(output: &OutputHandler) -> HostReporter<'_> {
        let request = ProbeRequest::new("SomePackage", "1.0.0").unwrap();
        HostReporter::new(output, request, "www.nuget.org".to_string())
    }

    #[test]
    fn test_progress_does_not_fail() {
        let output = OutputHandler::plain();
        let reporter = reporter(&output);
        reporter.progress(&PollEvent::Probing { attempt: 1, max_attempts: 2 });
        reporter.progress(&PollEvent::Indexed { attempt: 1 });
        assert!(!reporter.has_failed());
    }

    #[test]
    fn test_set_failed_is_recorded() {
        let output = OutputHandler::plain();
        let reporter = reporter(&output);
        reporter.set_failed(&NupollError::NotIndexed {
            package: "SomePackage".to_string(),
            version: "1.0.0".to_string(),
            attempts: 1,
        });
        assert!(reporter.has_failed());
    }
}
