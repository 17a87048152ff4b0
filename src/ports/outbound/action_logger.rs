/// ActionLogger port for run log output
///
/// This port abstracts where log lines go (GitHub Actions workflow commands,
/// a local terminal, or a test capture). Severity is part of the call so the
/// adapter can render annotations for warnings and errors.
///
/// Implementations must be `Send + Sync` because the logger is held across
/// `.await` points of the reporting use case.
pub trait ActionLogger: Send + Sync {
    /// Reports a message only visible when debug logging is enabled
    fn debug(&self, message: &str);

    /// Reports an informational message
    fn info(&self, message: &str);

    /// Reports a warning
    fn warning(&self, message: &str);

    /// Reports an error
    fn error(&self, message: &str);

    /// Opens a collapsible group of log lines
    fn start_group(&self, title: &str);

    /// Closes the group opened by the last `start_group`
    fn end_group(&self);
}
