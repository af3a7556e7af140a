use derive_more::derive::Display;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{EnumIter, IntoStaticStr};
use thiserror::Error;

use crate::utils::constants::{
    MAX_LOGIN_LENGTH, MAX_PASSWORD_LENGTH, MIN_LOGIN_LENGTH, MIN_PASSWORD_LENGTH,
};

// A capitalized word, entirely Latin or entirely Cyrillic
static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[А-Я][а-яё]{1,23}|[A-Z][a-z]{1,23})$")
        .expect("Failed to compile name regex")
});

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)+$")
        .expect("Failed to compile email regex")
});

static LOGIN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]+$").expect("Failed to compile login regex")
});

/// The rule an input field violated.
///
/// Variants are declared in the order the registration check evaluates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ValidationError {
    #[error("Login incorrect : seuls les minuscules latines et les chiffres sont autorisés")]
    LoginCharset,

    #[error("Longueur du login invalide, {}-{} caractères", MIN_LOGIN_LENGTH, MAX_LOGIN_LENGTH)]
    LoginLength,

    #[error(
        "Longueur du mot de passe invalide, {}-{} caractères",
        MIN_PASSWORD_LENGTH,
        MAX_PASSWORD_LENGTH
    )]
    PasswordLength,

    #[error("Adresse email incorrecte")]
    Email,

    #[error("Nom incorrect")]
    Name,
}

impl ValidationError {
    /// Stable identifier of the violated rule, e.g. `login_length`
    pub fn code(&self) -> &'static str {
        self.into()
    }
}

/// Returns true if `name` is a single capitalized Latin or Cyrillic word
/// of 2 to 24 characters.
pub fn is_valid_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Returns true if `login` is non-empty and only made of `a-z` and `0-9`
pub fn is_valid_login_charset(login: &str) -> bool {
    LOGIN_REGEX.is_match(login)
}

/// Returns true if the login length, counted in characters, is within
/// [MIN_LOGIN_LENGTH, MAX_LOGIN_LENGTH]
pub fn is_valid_login_length(login: &str) -> bool {
    (MIN_LOGIN_LENGTH..=MAX_LOGIN_LENGTH).contains(&login.chars().count())
}

/// Returns true if the password length, counted in characters, is within
/// [MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH]
pub fn is_valid_password_length(password: &str) -> bool {
    (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&password.chars().count())
}

fn login_validation(login: &str) -> Result<(), ValidationError> {
    // Charset is checked before length, the order is observable
    if !is_valid_login_charset(login) {
        return Err(ValidationError::LoginCharset);
    }
    if !is_valid_login_length(login) {
        return Err(ValidationError::LoginLength);
    }
    Ok(())
}

/// Wrapper type for a login that has been validated
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[serde(try_from = "String")]
pub struct Login(String);

impl TryFrom<String> for Login {
    type Error = ValidationError;

    fn try_from(login: String) -> Result<Self, Self::Error> {
        login_validation(&login)?;
        Ok(Self(login))
    }
}

impl TryFrom<&str> for Login {
    type Error = ValidationError;

    fn try_from(login: &str) -> Result<Self, Self::Error> {
        login_validation(login)?;
        Ok(Self(login.to_owned()))
    }
}

impl AsRef<str> for Login {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Wrapper type for a password whose length has been checked.
///
/// Never printed: there is no `Display` and `Debug` is redacted.
#[derive(Clone, Deserialize, PartialEq, Eq)]
#[serde(try_from = "String")]
pub struct Password(String);

impl TryFrom<String> for Password {
    type Error = ValidationError;

    fn try_from(password: String) -> Result<Self, Self::Error> {
        if is_valid_password_length(&password) {
            Ok(Self(password))
        } else {
            Err(ValidationError::PasswordLength)
        }
    }
}

impl TryFrom<&str> for Password {
    type Error = ValidationError;

    fn try_from(password: &str) -> Result<Self, Self::Error> {
        if is_valid_password_length(password) {
            Ok(Self(password.to_owned()))
        } else {
            Err(ValidationError::PasswordLength)
        }
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Wrapper type for an email address that has been validated
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[serde(try_from = "String")]
pub struct Email(String);

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(email: String) -> Result<Self, Self::Error> {
        if is_valid_email(&email) {
            Ok(Self(email))
        } else {
            Err(ValidationError::Email)
        }
    }
}

impl TryFrom<&str> for Email {
    type Error = ValidationError;

    fn try_from(email: &str) -> Result<Self, Self::Error> {
        if is_valid_email(email) {
            Ok(Self(email.to_owned()))
        } else {
            Err(ValidationError::Email)
        }
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Wrapper type for a display name that has been validated
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[serde(try_from = "String")]
pub struct DisplayName(String);

impl TryFrom<String> for DisplayName {
    type Error = ValidationError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        if is_valid_name(&name) {
            Ok(Self(name))
        } else {
            Err(ValidationError::Name)
        }
    }
}

impl TryFrom<&str> for DisplayName {
    type Error = ValidationError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        if is_valid_name(name) {
            Ok(Self(name.to_owned()))
        } else {
            Err(ValidationError::Name)
        }
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
