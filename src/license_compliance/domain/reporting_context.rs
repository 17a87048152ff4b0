use crate::shared::error::AuditError;
use crate::shared::Result;
use std::fmt;

/// Event that started the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// A scheduled (cron) run
    Schedule,
    /// Any other event, keeping its name for log output
    Event(String),
}

impl Trigger {
    /// Maps a GitHub event name (`schedule`, `push`, `pull_request`, ...) to a trigger
    pub fn from_event_name(name: &str) -> Self {
        match name {
            "schedule" => Trigger::Schedule,
            other => Trigger::Event(other.to_string()),
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::Schedule => write!(f, "schedule"),
            Trigger::Event(name) => write!(f, "{}", name),
        }
    }
}

/// Execution context the reporting strategy decides on
///
/// Built once by the environment adapter and passed in explicitly;
/// the decision logic never reads the process environment itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportingContext {
    trigger: Trigger,
    forked: bool,
}

impl ReportingContext {
    pub fn new(trigger: Trigger, forked: bool) -> Self {
        Self { trigger, forked }
    }

    pub fn trigger(&self) -> &Trigger {
        &self.trigger
    }

    pub fn is_scheduled(&self) -> bool {
        self.trigger == Trigger::Schedule
    }

    /// Whether the run lacks permission to create check runs on the base repository
    pub fn is_fork(&self) -> bool {
        self.forked
    }
}

/// Repository and commit the findings are published against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    owner: String,
    name: String,
    head_sha: String,
}

impl RepositoryRef {
    pub fn new(owner: String, name: String, head_sha: String) -> Self {
        Self {
            owner,
            name,
            head_sha,
        }
    }

    /// Parses an `owner/name` slug as found in `GITHUB_REPOSITORY`
    pub fn from_slug(slug: &str, head_sha: String) -> Result<Self> {
        match slug.split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self::new(owner.to_string(), name.to_string(), head_sha))
            }
            _ => Err(AuditError::Validation {
                message: format!(
                    "Repository must be in 'owner/name' format, got '{}'",
                    slug
                ),
            }
            .into()),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn head_sha(&self) -> &str {
        &self.head_sha
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_from_event_name() {
        assert_eq!(Trigger::from_event_name("schedule"), Trigger::Schedule);
        assert_eq!(
            Trigger::from_event_name("push"),
            Trigger::Event("push".to_string())
        );
        // Event names are case-sensitive on GitHub
        assert_eq!(
            Trigger::from_event_name("Schedule"),
            Trigger::Event("Schedule".to_string())
        );
    }

    #[test]
    fn test_trigger_display() {
        assert_eq!(Trigger::Schedule.to_string(), "schedule");
        assert_eq!(
            Trigger::Event("pull_request".to_string()).to_string(),
            "pull_request"
        );
    }

    #[test]
    fn test_reporting_context_flags() {
        let scheduled = ReportingContext::new(Trigger::Schedule, false);
        assert!(scheduled.is_scheduled());
        assert!(!scheduled.is_fork());

        let fork_pr = ReportingContext::new(Trigger::Event("pull_request".to_string()), true);
        assert!(!fork_pr.is_scheduled());
        assert!(fork_pr.is_fork());
    }

    #[test]
    fn test_repository_ref_from_slug() {
        let repo = RepositoryRef::from_slug("octo/demo", "abc123".to_string()).unwrap();
        assert_eq!(repo.owner(), "octo");
        assert_eq!(repo.name(), "demo");
        assert_eq!(repo.head_sha(), "abc123");
        assert_eq!(repo.to_string(), "octo/demo");
    }

    #[test]
    fn test_repository_ref_from_invalid_slug() {
        assert!(RepositoryRef::from_slug("demo", String::new()).is_err());
        assert!(RepositoryRef::from_slug("/demo", String::new()).is_err());
        assert!(RepositoryRef::from_slug("octo/", String::new()).is_err());
        assert!(RepositoryRef::from_slug("octo/demo/extra", String::new()).is_err());
    }
}
