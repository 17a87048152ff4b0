/// Mock implementations for testing
mod mock_action_logger;
mod mock_check_runs;
mod mock_dedup_gate;
mod mock_issue_tracker;
mod mock_license_source;

pub use mock_action_logger::MockActionLogger;
pub use mock_check_runs::{MockCheckRun, MockCheckRunFactory};
pub use mock_dedup_gate::MockDedupGate;
pub use mock_issue_tracker::MockIssueTracker;
pub use mock_license_source::MockLicenseSource;
