//! Domain-level constants.
//!
//! These constants define business rules and presentation formats.

// =============================================================================
// Validation
// =============================================================================

/// Field name reported when the first name is missing
pub const FIELD_FIRST_NAME: &str = "First name";

/// Field name reported when the email is missing
pub const FIELD_EMAIL: &str = "Email";

// =============================================================================
// Presentation
// =============================================================================

/// Human-readable timestamp format used in employee responses
pub const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Separator placed between first and last name
pub const FULL_NAME_SEPARATOR: &str = " ";
