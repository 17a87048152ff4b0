use crate::application::dto::{AuditRequest, AuditResponse};
use crate::license_compliance::services::ViolationClassifier;
use crate::ports::outbound::{ActionLogger, LicenseSource};
use crate::shared::Result;

/// AuditLicensesUseCase - Lists dependency licenses and classifies violations
///
/// # Type Parameters
/// * `S` - LicenseSource implementation
/// * `L` - ActionLogger implementation
pub struct AuditLicensesUseCase<S, L> {
    license_source: S,
    logger: L,
}

impl<S, L> AuditLicensesUseCase<S, L>
where
    S: LicenseSource,
    L: ActionLogger,
{
    /// Creates a new AuditLicensesUseCase with injected dependencies
    pub fn new(license_source: S, logger: L) -> Self {
        Self {
            license_source,
            logger,
        }
    }

    /// Executes the audit
    ///
    /// # Returns
    /// AuditResponse with the number of scanned dependencies and the
    /// violations in listing order
    ///
    /// # Errors
    /// Returns an error if the license listing cannot be obtained.
    pub async fn execute(&self, request: AuditRequest) -> Result<AuditResponse> {
        let records = self.license_source.list_dependencies().await?;
        self.logger.debug(&format!(
            "Checking {} dependencies against {} denied license(s)",
            records.len(),
            request.deny_list.entries().len()
        ));

        let violations = ViolationClassifier::classify(&records, &request.deny_list);

        if violations.is_empty() {
            self.logger.info("No warnings were found");
        } else {
            self.logger
                .warning(&format!("{} warnings found!", violations.len()));
        }

        Ok(AuditResponse::new(records.len(), violations))
    }
}
