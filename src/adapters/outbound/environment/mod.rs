/// Adapters reading the hosting CI environment
mod github_environment;

pub use github_environment::GitHubEnvironment;
