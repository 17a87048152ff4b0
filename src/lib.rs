//! license-audit - dependency license auditing for GitHub Actions
//!
//! This library lists the resolved licenses of a Cargo project, flags the
//! dependencies whose license matches a deny-list, and publishes the findings
//! as a GitHub check run or as one issue per violation, following hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`license_compliance`): Records, deny-list policy, classification and statistics
//! - **Application Layer** (`application`): Use cases and the issue-search dedup gate
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): cargo-license, GitHub REST, console and filesystem implementations
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use license_audit::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<()> {
//! let logger = ConsoleLogger::from_env(false);
//! let source = ListingFileSource::new(PathBuf::from("licenses.json"));
//!
//! let audit = AuditLicensesUseCase::new(source, logger.clone());
//! let response = audit
//!     .execute(AuditRequest::new(DenyList::parse("GPL, AGPL")))
//!     .await?;
//!
//! let environment = GitHubEnvironment::from_env()?;
//! let client = GitHubClient::new(GitHubClient::DEFAULT_API_URL, "token")?;
//! let report = ReportViolationsUseCase::new(
//!     GitHubCheckRuns::new(client.clone(), environment.repository.clone()),
//!     GitHubIssues::new(client.clone()),
//!     IssueSearchDedupGate::new(GitHubIssues::new(client), environment.repository.clone()),
//!     MarkdownReportRenderer::new(),
//!     logger,
//!     environment.context,
//!     environment.repository,
//! );
//! let outcome = report.execute(&response.violations).await?;
//! std::process::exit(outcome.exit_code().as_i32());
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod license_compliance;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::cargo::{parse_listing, CargoLicenseSource};
    pub use crate::adapters::outbound::console::{ConsoleLogger, LogMode};
    pub use crate::adapters::outbound::environment::GitHubEnvironment;
    pub use crate::adapters::outbound::filesystem::ListingFileSource;
    pub use crate::adapters::outbound::formatters::MarkdownReportRenderer;
    pub use crate::adapters::outbound::github::{GitHubCheckRuns, GitHubClient, GitHubIssues};
    pub use crate::application::dto::{AuditRequest, AuditResponse};
    pub use crate::application::services::IssueSearchDedupGate;
    pub use crate::application::use_cases::{AuditLicensesUseCase, ReportViolationsUseCase};
    pub use crate::license_compliance::domain::{
        AuditOutcome, DependencyRecord, IssueOutcome, LicenseStats, ReportChannel,
        ReportingContext, RepositoryRef, Trigger, Verdict, ViolationSet,
    };
    pub use crate::license_compliance::policies::DenyList;
    pub use crate::license_compliance::services::{LicenseStatistics, ViolationClassifier};
    pub use crate::ports::outbound::{
        ActionLogger, CheckConclusion, CheckOutput, CheckRunFactory, CheckRunHandle, CheckStatus,
        CreatedIssue, DedupGate, IssueTracker, LicenseSource, NewIssue, ReportRenderer,
        SearchResult,
    };
    pub use crate::shared::error::{AuditError, ExitCode};
    pub use crate::shared::Result;
}
