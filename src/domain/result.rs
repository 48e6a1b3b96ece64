//! Result type alias for the audit crate

use super::errors::AuditError;

/// Result type alias for audit operations
///
/// # Examples
///
/// ```
/// use edital_audit::domain::result::Result;
/// use edital_audit::domain::errors::AuditError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(AuditError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, AuditError>;
