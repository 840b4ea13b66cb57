//! Collaborator boundaries: submission and navigation hand-offs.
//!
//! The state layer never performs transport or routing itself; it reports
//! to these traits. The default implementations log the hand-off, which is
//! all the prototype does with it.

use serde_json::Value;
use tracing::info;

/// Receives the materialized value tree of a valid form submission.
/// Transport and persistence are this collaborator's problem.
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionHandler {
    fn submit_company_details(&mut self, values: Value);
}

/// Receives symbolic route paths when a navigation target is activated
#[cfg_attr(test, mockall::automock)]
pub trait Router {
    fn navigate(&mut self, route: &str);
}

/// Default submission collaborator: logs the submitted tree
#[derive(Debug, Default)]
pub struct LoggingSubmission;

impl SubmissionHandler for LoggingSubmission {
    fn submit_company_details(&mut self, values: Value) {
        info!(%values, "company details submitted");
    }
}

/// Default router collaborator: logs the requested route
#[derive(Debug, Default)]
pub struct LoggingRouter;

impl Router for LoggingRouter {
    fn navigate(&mut self, route: &str) {
        info!(route, "navigation requested");
    }
}
