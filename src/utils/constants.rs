//! Constants used throughout the validation system

/// Minimum length of a login, in characters
pub const MIN_LOGIN_LENGTH: usize = 5;
/// Maximum length of a login, in characters
pub const MAX_LOGIN_LENGTH: usize = 20;
/// Minimum length of a password, in characters
pub const MIN_PASSWORD_LENGTH: usize = 7;
/// Maximum length of a password, in characters
pub const MAX_PASSWORD_LENGTH: usize = 33;
