use crate::ports::outbound::ActionLogger;
use owo_colors::OwoColorize;

/// Where log lines are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    /// GitHub Actions workflow commands on stdout (`::warning::...`)
    WorkflowCommands,
    /// Colored lines on stderr for local runs
    Terminal,
}

/// ConsoleLogger adapter implementing the ActionLogger port
///
/// Under GitHub Actions warnings and errors become annotations and groups
/// fold in the job log. Locally the same lines are printed to stderr with
/// a colored severity prefix so stdout stays free for the report.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    mode: LogMode,
    show_debug: bool,
}

impl ConsoleLogger {
    pub fn new(mode: LogMode, show_debug: bool) -> Self {
        Self { mode, show_debug }
    }

    /// Picks the mode from `GITHUB_ACTIONS` and debug output from `RUNNER_DEBUG`
    pub fn from_env(verbose: bool) -> Self {
        let in_actions = std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true");
        let runner_debug = std::env::var("RUNNER_DEBUG").is_ok_and(|v| v == "1");
        let mode = if in_actions {
            LogMode::WorkflowCommands
        } else {
            LogMode::Terminal
        };
        Self::new(mode, verbose || runner_debug)
    }

    /// Escapes data for a workflow command so multi-line messages stay one command
    fn escape_data(message: &str) -> String {
        message
            .replace('%', "%25")
            .replace('\r', "%0D")
            .replace('\n', "%0A")
    }

    fn command(name: &str, message: &str) -> String {
        format!("::{}::{}", name, Self::escape_data(message))
    }

    fn emit(&self, line: String) {
        match self.mode {
            LogMode::WorkflowCommands => println!("{}", line),
            LogMode::Terminal => eprintln!("{}", line),
        }
    }

    fn render_debug(&self, message: &str) -> Option<String> {
        match self.mode {
            // The runner hides ::debug:: lines unless step debugging is on
            LogMode::WorkflowCommands => Some(Self::command("debug", message)),
            LogMode::Terminal if self.show_debug => {
                Some(format!("{} {}", "debug:".dimmed(), message))
            }
            LogMode::Terminal => None,
        }
    }

    fn render_info(&self, message: &str) -> String {
        message.to_string()
    }

    fn render_warning(&self, message: &str) -> String {
        match self.mode {
            LogMode::WorkflowCommands => Self::command("warning", message),
            LogMode::Terminal => format!("{} {}", "⚠️  warning:".yellow().bold(), message),
        }
    }

    fn render_error(&self, message: &str) -> String {
        match self.mode {
            LogMode::WorkflowCommands => Self::command("error", message),
            LogMode::Terminal => format!("{} {}", "❌ error:".red().bold(), message),
        }
    }

    fn render_group_start(&self, title: &str) -> String {
        match self.mode {
            LogMode::WorkflowCommands => Self::command("group", title),
            LogMode::Terminal => format!("{} {}", "▶".cyan(), title.bold()),
        }
    }

    fn render_group_end(&self) -> Option<String> {
        match self.mode {
            LogMode::WorkflowCommands => Some("::endgroup::".to_string()),
            LogMode::Terminal => None,
        }
    }
}

impl ActionLogger for ConsoleLogger {
    fn debug(&self, message: &str) {
        if let Some(line) = self.render_debug(message) {
            self.emit(line);
        }
    }

    fn info(&self, message: &str) {
        self.emit(self.render_info(message));
    }

    fn warning(&self, message: &str) {
        self.emit(self.render_warning(message));
    }

    fn error(&self, message: &str) {
        self.emit(self.render_error(message));
    }

    fn start_group(&self, title: &str) {
        self.emit(self.render_group_start(title));
    }

    fn end_group(&self) {
        if let Some(line) = self.render_group_end() {
            self.emit(line);
        }
    }
}
