use license_audit::adapters::outbound::cargo::CargoLicenseSource;
use license_audit::adapters::outbound::console::ConsoleLogger;
use license_audit::adapters::outbound::environment::GitHubEnvironment;
use license_audit::adapters::outbound::filesystem::ListingFileSource;
use license_audit::adapters::outbound::formatters::MarkdownReportRenderer;
use license_audit::adapters::outbound::github::{GitHubCheckRuns, GitHubClient, GitHubIssues};
use license_audit::application::dto::AuditRequest;
use license_audit::application::services::IssueSearchDedupGate;
use license_audit::application::use_cases::{
    AuditLicensesUseCase, ReportViolationsUseCase, DEFAULT_CHECK_NAME,
};
use license_audit::cli::Args;
use license_audit::config::{discover_config, load_config_from_path, ConfigFile};
use license_audit::license_compliance::policies::DenyList;
use license_audit::ports::outbound::{ActionLogger, LicenseSource};
use license_audit::shared::error::{AuditError, ExitCode};
use license_audit::shared::Result;
use std::process;

/// Settings after merging CLI arguments over the config file
#[derive(Debug)]
struct Settings {
    deny_list: DenyList,
    check_name: String,
    all_features: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    let logger = ConsoleLogger::from_env(args.verbose);

    match run(args, logger.clone()).await {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            let mut message = format!("An error occurred: {}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                message.push_str(&format!("\n\nCaused by: {}", err));
                source = err.source();
            }

            logger.error(&message);
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args, logger: ConsoleLogger) -> Result<ExitCode> {
    let config = load_config(&args)?;
    for warning in config.unknown_field_warnings() {
        logger.warning(&warning);
    }
    let settings = resolve_settings(&args, config)?;
    if settings.deny_list.is_empty() {
        logger.warning("No denied licenses configured, every dependency will pass");
    }

    let environment = GitHubEnvironment::from_env()?;
    let token = resolve_token(args.token.clone(), std::env::var("GITHUB_TOKEN").ok())?;

    let source: Box<dyn LicenseSource> = match &args.input {
        Some(path) => {
            logger.debug(&format!("Reading license listing from {}", path.display()));
            Box::new(ListingFileSource::new(path.clone()))
        }
        None => Box::new(
            CargoLicenseSource::new(logger.clone())
                .with_manifest_path(args.manifest_path.clone())
                .with_all_features(settings.all_features),
        ),
    };

    let audit = AuditLicensesUseCase::new(source, logger.clone());
    let response = audit.execute(AuditRequest::new(settings.deny_list)).await?;
    logger.debug(&format!(
        "{} of {} dependencies violate the license policy",
        response.violations.len(),
        response.dependencies_scanned
    ));

    let client = GitHubClient::new(&args.api_url, &token)?;
    let report = ReportViolationsUseCase::new(
        GitHubCheckRuns::new(client.clone(), environment.repository.clone()),
        GitHubIssues::new(client.clone()),
        IssueSearchDedupGate::new(GitHubIssues::new(client), environment.repository.clone()),
        MarkdownReportRenderer::new(),
        logger.clone(),
        environment.context,
        environment.repository,
    )
    .with_check_name(settings.check_name);

    let outcome = report.execute(&response.violations).await?;
    logger.debug(&format!("{} ({})", outcome.detail, outcome.channel));

    Ok(outcome.exit_code())
}

/// Loads the explicit config file, or the one discovered in the working directory
fn load_config(args: &Args) -> Result<ConfigFile> {
    match &args.config {
        Some(path) => load_config_from_path(path),
        None => {
            let cwd = std::env::current_dir()?;
            Ok(discover_config(&cwd)?.unwrap_or_default())
        }
    }
}

/// CLI values override config file values
fn resolve_settings(args: &Args, config: ConfigFile) -> Result<Settings> {
    let deny_list = match (&args.licenses, config.licenses) {
        (Some(list), _) => DenyList::parse(list),
        (None, Some(entries)) => DenyList::new(entries)?,
        (None, None) => DenyList::default(),
    };

    let check_name = args
        .check_name
        .clone()
        .or(config.check_name)
        .unwrap_or_else(|| DEFAULT_CHECK_NAME.to_string());

    Ok(Settings {
        deny_list,
        check_name,
        all_features: config.all_features.unwrap_or(true),
    })
}

/// Uses the explicit token, else `GITHUB_TOKEN`
fn resolve_token(explicit: Option<String>, github_token: Option<String>) -> Result<String> {
    explicit
        .into_iter()
        .chain(github_token)
        .find(|token| !token.trim().is_empty())
        .ok_or_else(|| {
            AuditError::MissingEnvironment {
                name: "INPUT_TOKEN".to_string(),
                hint: "Pass --token or export GITHUB_TOKEN with `checks: write` and `issues: write` permissions".to_string(),
            }
            .into()
        })
}
