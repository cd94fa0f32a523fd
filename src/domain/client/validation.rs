//! Client registration validation utilities

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Maximum length for client names, in characters
pub const MAX_CLIENT_NAME_LENGTH: usize = 100;

/// Structural email pattern. The domain part admits a single dot before a
/// TLD of at least two letters.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([a-zA-Z0-9]+[a-zA-Z0-9_+.~-]*[a-zA-Z0-9]*)*[a-zA-Z0-9]+(@([a-zA-Z0-9]+[a-zA-Z0-9-]*[a-zA-Z0-9]*)*[a-zA-Z0-9]\.([a-zA-Z]+[a-zA-Z-]*[a-zA-Z]+)+)$",
    )
    .unwrap()
});

/// Two or more consecutive characters outside `[a-zA-Z0-9]`
static CONSECUTIVE_SPECIALS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]{2,}").unwrap());

/// Errors that can occur while validating a registration
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClientValidationError {
    #[error("Please give your name!")]
    MissingName,

    #[error("Name must be shorter than {0} characters!")]
    NameTooLong(usize),

    #[error("Please give an email address!")]
    MissingEmail,

    #[error("Email already registered!")]
    EmailAlreadyRegistered,

    #[error("Please give a valid email address!")]
    MalformedEmail,
}

impl ClientValidationError {
    /// Whether the error concerns the client name rather than the email
    pub fn is_name_error(&self) -> bool {
        matches!(self, Self::MissingName | Self::NameTooLong(_))
    }
}

/// Whitespace for the blank-input checks
///
/// Unicode space, line and paragraph separators other than the no-break
/// spaces, plus the ASCII control whitespace `\t`..`\r` and the
/// information separators U+001C..U+001F.
fn is_blank_char(c: char) -> bool {
    match c {
        '\u{00A0}' | '\u{2007}' | '\u{202F}' | '\u{0085}' => false,
        '\u{001C}'..='\u{001F}' => true,
        c => c.is_whitespace(),
    }
}

fn is_blank(value: &str) -> bool {
    value.chars().all(is_blank_char)
}

/// Length in UTF-16 code units, so characters outside the Basic
/// Multilingual Plane count twice
fn name_length(name: &str) -> usize {
    name.encode_utf16().count()
}

/// Validate a client name
///
/// Rules:
/// - Must be present and contain something other than whitespace
/// - At most 100 UTF-16 code units
pub fn validate_client_name(name: Option<&str>) -> Result<&str, ClientValidationError> {
    let name = match name {
        Some(n) if !is_blank(n) => n,
        _ => return Err(ClientValidationError::MissingName),
    };

    if name_length(name) > MAX_CLIENT_NAME_LENGTH {
        return Err(ClientValidationError::NameTooLong(MAX_CLIENT_NAME_LENGTH));
    }

    Ok(name)
}

/// Check that an email was supplied and is not blank
pub fn validate_email_presence(email: Option<&str>) -> Result<&str, ClientValidationError> {
    match email {
        Some(e) if !is_blank(e) => Ok(e),
        _ => Err(ClientValidationError::MissingEmail),
    }
}

/// Validate the shape of an email address
///
/// The address must match the structural pattern and must not contain two
/// consecutive non-alphanumeric characters anywhere. The second rule also
/// rejects some addresses that are valid per RFC 5322; it is kept for
/// compatibility with previously issued registrations.
pub fn validate_email_format(email: &str) -> Result<(), ClientValidationError> {
    if !EMAIL_PATTERN.is_match(email) || has_consecutive_special_characters(email) {
        return Err(ClientValidationError::MalformedEmail);
    }

    Ok(())
}

/// Check for a run of two or more non-alphanumeric characters
pub fn has_consecutive_special_characters(value: &str) -> bool {
    CONSECUTIVE_SPECIALS.is_match(value)
}
