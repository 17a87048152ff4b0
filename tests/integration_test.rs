/// Integration tests for the application layer
mod test_utilities;

use license_audit::prelude::*;
use test_utilities::mocks::*;

fn push_context() -> ReportingContext {
    ReportingContext::new(Trigger::Event("push".to_string()), false)
}

fn fork_context() -> ReportingContext {
    ReportingContext::new(Trigger::Event("pull_request".to_string()), true)
}

fn schedule_context() -> ReportingContext {
    ReportingContext::new(Trigger::Schedule, false)
}

fn repository() -> RepositoryRef {
    RepositoryRef::new("octo".to_string(), "demo".to_string(), "abc123".to_string())
}

/// Runs the audit with a mock source, then reports with the given mocks
async fn audit_and_report(
    source: MockLicenseSource,
    deny_list: &str,
    context: ReportingContext,
    checks: MockCheckRunFactory,
    issues: MockIssueTracker,
    gate: MockDedupGate,
    logger: MockActionLogger,
) -> Result<AuditOutcome> {
    let audit = AuditLicensesUseCase::new(source, logger.clone());
    let response = audit
        .execute(AuditRequest::new(DenyList::parse(deny_list)))
        .await?;

    let report = ReportViolationsUseCase::new(
        checks,
        issues,
        gate,
        MarkdownReportRenderer::new(),
        logger,
        context,
        repository(),
    );
    report.execute(&response.violations).await
}

#[tokio::test]
async fn test_check_path_with_violation_fails() {
    let source = MockLicenseSource::new().with_dependency("foo", "1.0", Some("GPL-3.0"));
    let checks = MockCheckRunFactory::new();
    let logger = MockActionLogger::new();

    let outcome = audit_and_report(
        source,
        "GPL",
        push_context(),
        checks.clone(),
        MockIssueTracker::new(),
        MockDedupGate::new(),
        logger.clone(),
    )
    .await
    .unwrap();

    assert_eq!(outcome.channel, ReportChannel::CheckRun);
    assert!(outcome.is_failure());
    assert_eq!(outcome.exit_code(), ExitCode::ViolationsDetected);
    assert_eq!(
        checks.get_calls(),
        vec!["create License audit", "start queued", "finish failure"]
    );

    let outputs = checks.get_outputs();
    assert_eq!(outputs.len(), 1);
    let (conclusion, output) = &outputs[0];
    assert_eq!(*conclusion, CheckConclusion::Failure);
    assert_eq!(output.summary, "GPL-3.0 1 violations");
    assert!(output.text.contains("### foo 1.0"));
    assert!(logger.has("warning", "1 warnings found!"));
}

#[tokio::test]
async fn test_check_path_all_clear_succeeds() {
    let source = MockLicenseSource::new()
        .with_dependency("serde", "1.0.200", Some("MIT OR Apache-2.0"))
        .with_dependency("mystery", "0.1.0", None);
    let checks = MockCheckRunFactory::new();
    let logger = MockActionLogger::new();

    let outcome = audit_and_report(
        source,
        "GPL",
        push_context(),
        checks.clone(),
        MockIssueTracker::new(),
        MockDedupGate::new(),
        logger.clone(),
    )
    .await
    .unwrap();

    assert!(!outcome.is_failure());
    assert_eq!(outcome.exit_code(), ExitCode::Success);
    let (conclusion, output) = &checks.get_outputs()[0];
    assert_eq!(*conclusion, CheckConclusion::Success);
    assert!(output.text.is_empty());
    assert!(logger.has("info", "No warnings were found"));
}

#[tokio::test]
async fn test_check_path_fork_fallback_reports_inline() {
    let source = MockLicenseSource::new().with_dependency("foo", "1.0", Some("GPL-3.0"));
    let checks = MockCheckRunFactory::new().with_start_failure();
    let logger = MockActionLogger::new();

    let outcome = audit_and_report(
        source,
        "GPL",
        fork_context(),
        checks.clone(),
        MockIssueTracker::new(),
        MockDedupGate::new(),
        logger.clone(),
    )
    .await
    .unwrap();

    assert_eq!(outcome.channel, ReportChannel::InlineLog);
    assert!(outcome.is_failure());
    // No check run calls after the refused start
    assert_eq!(
        checks.get_calls(),
        vec!["create License audit", "start queued"]
    );
    assert!(logger.has("error", "Unable to publish license check!"));
    assert!(logger.has("info", "Posting audit report here instead."));
    assert!(logger.has("info", "### foo 1.0"));
}

#[tokio::test]
async fn test_check_path_fork_fallback_all_clear_passes() {
    let source = MockLicenseSource::new().with_dependency("serde", "1.0.200", Some("MIT"));
    let checks = MockCheckRunFactory::new().with_start_failure();

    let outcome = audit_and_report(
        source,
        "GPL",
        fork_context(),
        checks,
        MockIssueTracker::new(),
        MockDedupGate::new(),
        MockActionLogger::new(),
    )
    .await
    .unwrap();

    assert_eq!(outcome.channel, ReportChannel::InlineLog);
    assert!(!outcome.is_failure());
}

#[tokio::test]
async fn test_check_path_refused_outside_fork_is_fatal() {
    let source = MockLicenseSource::new().with_dependency("foo", "1.0", Some("GPL-3.0"));
    let checks = MockCheckRunFactory::new().with_start_failure();

    let result = audit_and_report(
        source,
        "GPL",
        push_context(),
        checks.clone(),
        MockIssueTracker::new(),
        MockDedupGate::new(),
        MockActionLogger::new(),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(
        checks.get_calls(),
        vec!["create License audit", "start queued"]
    );
}

#[tokio::test]
async fn test_check_path_finish_failure_cancels() {
    let source = MockLicenseSource::new().with_dependency("foo", "1.0", Some("GPL-3.0"));
    let checks = MockCheckRunFactory::new().with_finish_failure();

    let result = audit_and_report(
        source,
        "GPL",
        push_context(),
        checks.clone(),
        MockIssueTracker::new(),
        MockDedupGate::new(),
        MockActionLogger::new(),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(
        checks.get_calls(),
        vec![
            "create License audit",
            "start queued",
            "finish failure",
            "cancel"
        ]
    );
}

#[tokio::test]
async fn test_issue_path_skips_already_reported() {
    let source = MockLicenseSource::new()
        .with_dependency("foo", "1.0", Some("GPL-3.0"))
        .with_dependency("serde", "1.0.200", Some("MIT"))
        .with_dependency("bar", "0.4.2", Some("AGPL-3.0"));
    let checks = MockCheckRunFactory::new();
    let issues = MockIssueTracker::new();
    let gate = MockDedupGate::new().with_reported("foo");
    let logger = MockActionLogger::new();

    let outcome = audit_and_report(
        source,
        "GPL",
        schedule_context(),
        checks.clone(),
        issues.clone(),
        gate.clone(),
        logger.clone(),
    )
    .await
    .unwrap();

    assert_eq!(outcome.channel, ReportChannel::Issues);
    assert!(!outcome.is_failure());
    assert_eq!(outcome.exit_code(), ExitCode::Success);
    assert!(checks.get_calls().is_empty());
    assert_eq!(gate.get_queried(), vec!["foo", "bar"]);

    let created = issues.get_created();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].title, "License violation on bar: AGPL-3.0");
    assert_eq!(created[0].body.trim(), "> bar (0.4.2) - AGPL-3.0");
    assert_eq!(created[0].owner, "octo");
    assert_eq!(created[0].repo, "demo");

    assert_eq!(outcome.created_issues().count(), 1);
    assert!(logger.has("info", "Seems like foo is mentioned already"));
    assert!(logger.has("info", "Created an issue for bar"));
}

#[tokio::test]
async fn test_issue_path_all_clear_succeeds() {
    let source = MockLicenseSource::new()
        .with_dependency("serde", "1.0.200", Some("MIT OR Apache-2.0"))
        .with_dependency("mystery", "0.1.0", None);
    let checks = MockCheckRunFactory::new();
    let issues = MockIssueTracker::new();
    let gate = MockDedupGate::new();

    let outcome = audit_and_report(
        source,
        "GPL",
        schedule_context(),
        checks.clone(),
        issues.clone(),
        gate.clone(),
        MockActionLogger::new(),
    )
    .await
    .unwrap();

    assert_eq!(outcome.channel, ReportChannel::Issues);
    assert_eq!(outcome.verdict, Verdict::Pass);
    assert!(!outcome.violations_found);
    assert!(outcome.issues.is_empty());
    assert_eq!(outcome.exit_code(), ExitCode::Success);
    assert!(gate.get_queried().is_empty());
    assert!(issues.get_created().is_empty());
    assert!(checks.get_calls().is_empty());
}

#[tokio::test]
async fn test_issue_path_create_failure_is_fatal() {
    let source = MockLicenseSource::new().with_dependency("bar", "0.4.2", Some("GPL-3.0"));

    let result = audit_and_report(
        source,
        "GPL",
        schedule_context(),
        MockCheckRunFactory::new(),
        MockIssueTracker::with_create_failure(),
        MockDedupGate::new(),
        MockActionLogger::new(),
    )
    .await;

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("Failed to create an issue for bar"));
}

#[tokio::test]
async fn test_issue_path_with_search_backed_gate() {
    let source = MockLicenseSource::new().with_dependency("bar", "0.4.2", Some("GPL-3.0"));
    let issues = MockIssueTracker::new();
    let gate = IssueSearchDedupGate::new(issues.clone(), repository());

    let audit = AuditLicensesUseCase::new(source, MockActionLogger::new());
    let response = audit
        .execute(AuditRequest::new(DenyList::parse("GPL")))
        .await
        .unwrap();
    let report = ReportViolationsUseCase::new(
        MockCheckRunFactory::new(),
        issues.clone(),
        gate,
        MarkdownReportRenderer::new(),
        MockActionLogger::new(),
        schedule_context(),
        repository(),
    );
    report.execute(&response.violations).await.unwrap();

    assert_eq!(
        issues.searches.lock().unwrap().clone(),
        vec!["bar in:title repo:octo/demo".to_string()]
    );
    assert_eq!(issues.get_created().len(), 1);
}

#[tokio::test]
async fn test_source_failure_propagates() {
    let result = audit_and_report(
        MockLicenseSource::with_failure(),
        "GPL",
        push_context(),
        MockCheckRunFactory::new(),
        MockIssueTracker::new(),
        MockDedupGate::new(),
        MockActionLogger::new(),
    )
    .await;

    assert!(result.is_err());
}
