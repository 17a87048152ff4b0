use super::listing_parser::parse_listing;
use crate::license_compliance::domain::DependencyRecord;
use crate::ports::outbound::{ActionLogger, LicenseSource};
use crate::shared::error::AuditError;
use crate::shared::Result;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Output;
use tokio::process::Command;

/// Log group wrapping the cargo-license invocation
const LISTING_GROUP: &str = "Calling cargo-license (JSON output)";

/// CargoLicenseSource adapter running `cargo license --json` on the current project
///
/// cargo-license is installed on first use when missing. The lockfile is
/// (re)generated first so the listing reflects resolved versions.
pub struct CargoLicenseSource<L: ActionLogger> {
    cargo: OsString,
    manifest_path: Option<PathBuf>,
    all_features: bool,
    logger: L,
}

impl<L: ActionLogger> CargoLicenseSource<L> {
    pub fn new(logger: L) -> Self {
        Self {
            cargo: OsString::from("cargo"),
            manifest_path: None,
            all_features: true,
            logger,
        }
    }

    pub fn with_manifest_path(mut self, manifest_path: Option<PathBuf>) -> Self {
        self.manifest_path = manifest_path;
        self
    }

    pub fn with_all_features(mut self, all_features: bool) -> Self {
        self.all_features = all_features;
        self
    }

    /// Overrides the cargo executable (defaults to `cargo` on PATH)
    pub fn with_cargo(mut self, cargo: impl Into<OsString>) -> Self {
        self.cargo = cargo.into();
        self
    }

    fn manifest_args(&self) -> Vec<OsString> {
        match &self.manifest_path {
            Some(path) => vec!["--manifest-path".into(), path.clone().into_os_string()],
            None => Vec::new(),
        }
    }

    fn listing_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["license".into(), "--json".into()];
        if self.all_features {
            args.push("--all-features".into());
        }
        args.push("--do-not-bundle".into());
        args.extend(self.manifest_args());
        args
    }

    fn lockfile_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["generate-lockfile".into()];
        args.extend(self.manifest_args());
        args
    }

    async fn cargo_output(&self, args: &[OsString]) -> std::io::Result<Output> {
        Command::new(&self.cargo).args(args).output().await
    }

    async fn is_installed(&self) -> bool {
        let args: Vec<OsString> = vec!["license".into(), "--version".into()];
        matches!(self.cargo_output(&args).await, Ok(output) if output.status.success())
    }

    async fn ensure_installed(&self) -> Result<()> {
        if self.is_installed().await {
            self.logger.debug("cargo-license is already installed");
            return Ok(());
        }

        self.logger.info("cargo-license not found, installing it");
        let args: Vec<OsString> = vec!["install".into(), "cargo-license".into()];
        let status = Command::new(&self.cargo)
            .args(&args)
            .status()
            .await
            .map_err(|e| AuditError::LicenseToolError {
                details: format!("failed to run `cargo install cargo-license`: {}", e),
                suggestion: "Make sure cargo is installed and on PATH".to_string(),
            })?;

        if !status.success() {
            return Err(AuditError::LicenseToolError {
                details: format!("`cargo install cargo-license` exited with {}", status),
                suggestion: "Install it manually with `cargo install cargo-license`, or pass a pre-generated listing with --input".to_string(),
            }
            .into());
        }
        Ok(())
    }

    async fn generate_lockfile(&self) -> Result<()> {
        let output = self
            .cargo_output(&self.lockfile_args())
            .await
            .map_err(|e| AuditError::LicenseToolError {
                details: format!("failed to run `cargo generate-lockfile`: {}", e),
                suggestion: "Make sure cargo is installed and on PATH".to_string(),
            })?;

        if !output.status.success() {
            return Err(AuditError::LicenseToolError {
                details: format!(
                    "`cargo generate-lockfile` exited with {}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
                suggestion: "Check that --manifest-path points to a valid Cargo.toml".to_string(),
            }
            .into());
        }
        Ok(())
    }

    async fn run_listing(&self) -> Result<Vec<DependencyRecord>> {
        let args = self.listing_args();
        self.logger.debug(&format!(
            "Running cargo {}",
            args.iter()
                .map(|a| a.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        ));

        // cargo-license exits non-zero for some workspaces while still printing a listing
        let output = self
            .cargo_output(&args)
            .await
            .map_err(|e| AuditError::LicenseToolError {
                details: format!("failed to run `cargo license`: {}", e),
                suggestion: "Make sure cargo-license is installed".to_string(),
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            self.logger.debug(stderr.trim());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        self.logger.info(&format!("{}\n", stdout.trim_end()));
        parse_listing(&stdout, "cargo-license")
    }
}

#[async_trait]
impl<L: ActionLogger> LicenseSource for CargoLicenseSource<L> {
    async fn list_dependencies(&self) -> Result<Vec<DependencyRecord>> {
        self.ensure_installed().await?;
        self.generate_lockfile().await?;

        self.logger.start_group(LISTING_GROUP);
        let result = self.run_listing().await;
        self.logger.end_group();

        result
    }
}
