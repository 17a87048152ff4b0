use crate::license_compliance::domain::{
    AuditOutcome, DependencyRecord, IssueOutcome, ReportChannel, ReportingContext, RepositoryRef,
    ViolationSet,
};
use crate::license_compliance::services::LicenseStatistics;
use crate::ports::outbound::{
    ActionLogger, CheckConclusion, CheckOutput, CheckRunFactory, CheckRunHandle, CheckStatus,
    DedupGate, IssueTracker, NewIssue, ReportRenderer,
};
use crate::shared::Result;
use anyhow::Context;

/// Name of the check run when none is configured
pub const DEFAULT_CHECK_NAME: &str = "License audit";

const VIOLATIONS_FOUND: &str = "License violations were found, marking check as failed";
const NO_VIOLATIONS: &str = "No license violations were found, not marking check as failed";
const CHECK_TITLE_VIOLATIONS: &str = "License advisories found";
const CHECK_TITLE_CLEAN: &str = "No license violations found";
const CHECK_SUMMARY_CLEAN: &str = "No license violations were found";

/// ReportViolationsUseCase - Publishes a violation set on the right channel
///
/// Scheduled runs open one issue per violation that is not reported yet and
/// never fail. Every other trigger publishes a check run whose conclusion
/// mirrors the violations. When a check run cannot be started from a fork,
/// the report goes to the run log instead and the run still fails if
/// violations exist. Any other platform failure is returned as an error.
///
/// # Type Parameters
/// * `F` - CheckRunFactory implementation
/// * `T` - IssueTracker implementation
/// * `D` - DedupGate implementation
/// * `R` - ReportRenderer implementation
/// * `L` - ActionLogger implementation
pub struct ReportViolationsUseCase<F, T, D, R, L> {
    checks: F,
    issue_tracker: T,
    dedup_gate: D,
    renderer: R,
    logger: L,
    context: ReportingContext,
    repository: RepositoryRef,
    check_name: String,
}

impl<F, T, D, R, L> ReportViolationsUseCase<F, T, D, R, L>
where
    F: CheckRunFactory,
    T: IssueTracker,
    D: DedupGate,
    R: ReportRenderer,
    L: ActionLogger,
{
    /// Creates a new ReportViolationsUseCase with injected dependencies
    pub fn new(
        checks: F,
        issue_tracker: T,
        dedup_gate: D,
        renderer: R,
        logger: L,
        context: ReportingContext,
        repository: RepositoryRef,
    ) -> Self {
        Self {
            checks,
            issue_tracker,
            dedup_gate,
            renderer,
            logger,
            context,
            repository,
            check_name: DEFAULT_CHECK_NAME.to_string(),
        }
    }

    /// Overrides the check run name
    pub fn with_check_name(mut self, check_name: impl Into<String>) -> Self {
        self.check_name = check_name.into();
        self
    }

    /// Publishes the violations and returns the outcome of the run
    ///
    /// # Errors
    /// Returns an error for platform failures that have no fallback: a check
    /// run refused outside a fork, a failed check completion, a failed issue
    /// search or a failed issue creation.
    pub async fn execute(&self, violations: &ViolationSet) -> Result<AuditOutcome> {
        if self.context.is_scheduled() {
            self.logger
                .debug("Action was triggered on a schedule event, creating an Issues report");
            self.report_issues(violations).await
        } else {
            self.logger.debug(&format!(
                "Action was triggered on a {} event, creating a Check report",
                self.context.trigger()
            ));
            self.report_check(violations).await
        }
    }

    /// Title of the issue opened for a dependency
    pub fn issue_title(dependency: &DependencyRecord) -> String {
        format!(
            "License violation on {}: {}",
            dependency.name(),
            dependency.license().unwrap_or("unknown")
        )
    }

    async fn report_check(&self, violations: &ViolationSet) -> Result<AuditOutcome> {
        let stats = LicenseStatistics::aggregate(violations);
        let summary = LicenseStatistics::summarize(&stats);
        if !summary.is_empty() {
            self.logger.info(&format!("Found {}", summary));
        }

        let mut check = self.checks.create_check(&self.check_name);
        if let Err(error) = check.start(CheckStatus::Queued).await {
            if self.context.is_fork() {
                return Ok(self.report_inline(violations, &error));
            }
            return Err(error);
        }

        let output = CheckOutput {
            title: if violations.is_empty() {
                CHECK_TITLE_CLEAN.to_string()
            } else {
                CHECK_TITLE_VIOLATIONS.to_string()
            },
            summary: if summary.is_empty() {
                CHECK_SUMMARY_CLEAN.to_string()
            } else {
                summary
            },
            text: self.renderer.render_report(violations),
        };
        let conclusion = if violations.is_empty() {
            CheckConclusion::Success
        } else {
            CheckConclusion::Failure
        };

        if let Err(error) = check.finish(conclusion, output).await {
            if let Err(cancel_error) = check.cancel().await {
                self.logger
                    .warning(&format!("Unable to cancel the check run: {}", cancel_error));
            }
            return Err(error);
        }

        if violations.is_empty() {
            self.logger.info(NO_VIOLATIONS);
            Ok(AuditOutcome::passed(ReportChannel::CheckRun, false, NO_VIOLATIONS))
        } else {
            Ok(AuditOutcome::failed(ReportChannel::CheckRun, VIOLATIONS_FOUND))
        }
    }

    /// Logs the report when the Check API refused a run from a fork
    fn report_inline(&self, violations: &ViolationSet, error: &anyhow::Error) -> AuditOutcome {
        self.logger
            .error(&format!("Unable to publish license check! Reason: {}", error));
        self.logger
            .warning("It seems that this Action is executed from the forked repository.");
        self.logger.warning(
            "GitHub Actions are not allowed to use Check API, when executed for a forked repos. \
             See https://github.com/actions-rs/clippy-check/issues/2 for details.",
        );
        self.logger.info("Posting audit report here instead.");
        let report = self.renderer.render_report(violations);
        if !report.is_empty() {
            self.logger.info(&report);
        }

        if violations.is_empty() {
            let detail = "No critical violations were found, not marking check as failed";
            self.logger.info(detail);
            AuditOutcome::passed(ReportChannel::InlineLog, false, detail)
        } else {
            AuditOutcome::failed(ReportChannel::InlineLog, VIOLATIONS_FOUND)
        }
    }

    async fn report_issues(&self, violations: &ViolationSet) -> Result<AuditOutcome> {
        let mut outcomes = Vec::with_capacity(violations.len());

        for dependency in violations {
            if self.dedup_gate.already_reported(dependency.name()).await? {
                self.logger.info(&format!(
                    "Seems like {} is mentioned already in the issues/PRs, \
                     will not report an issue against it",
                    dependency.name()
                ));
                outcomes.push(IssueOutcome::SkippedDuplicate {
                    dependency: dependency.name().to_string(),
                });
                continue;
            }

            let issue = NewIssue {
                owner: self.repository.owner().to_string(),
                repo: self.repository.name().to_string(),
                title: Self::issue_title(dependency),
                body: self.renderer.render_issue_body(dependency),
            };
            let created = self
                .issue_tracker
                .create_issue(issue)
                .await
                .with_context(|| format!("Failed to create an issue for {}", dependency.name()))?;

            self.logger.info(&format!(
                "Created an issue for {}: {}",
                dependency.name(),
                created.url
            ));
            outcomes.push(IssueOutcome::Created {
                dependency: dependency.name().to_string(),
                url: created.url,
            });
        }

        let created = outcomes
            .iter()
            .filter(|o| matches!(o, IssueOutcome::Created { .. }))
            .count();
        let detail = format!(
            "{} issue(s) created, {} already reported",
            created,
            outcomes.len() - created
        );

        Ok(AuditOutcome::passed(ReportChannel::Issues, !violations.is_empty(), detail)
            .with_issues(outcomes))
    }
}
