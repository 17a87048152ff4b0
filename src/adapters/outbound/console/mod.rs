/// Console adapters for run log output
mod console_logger;

pub use console_logger::{ConsoleLogger, LogMode};
