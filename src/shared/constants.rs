// =============================================================================
// REPORT CONSTANTS
// =============================================================================

/// Severity given to any category missing from the severity table
pub const DEFAULT_SEVERITY: u8 = 1;

/// Prefix of generated reporter identifiers
pub const REPORTER_ID_PREFIX: &str = "citizen_";

/// Number of random characters after the reporter prefix
pub const REPORTER_ID_SUFFIX_LEN: usize = 9;

// =============================================================================
// GAMIFICATION CONSTANTS
// =============================================================================

/// Maximum length of a profile name
pub const MAX_PROFILE_NAME_LENGTH: usize = 64;
