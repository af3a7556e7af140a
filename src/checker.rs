//! Vérifications complètes à l'inscription et à la mise à jour du profil.
//!
//! Each check evaluates its rules in a fixed order and stops at the first
//! violated one: the caller only ever hears about a single rule.

use crate::utils::input_validation::{DisplayName, Email, Login, Password, ValidationError};
use log::{debug, info};

/// The fields of a registration form, all validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub login: Login,
    pub password: Password,
    pub email: Email,
    pub name: DisplayName,
}

/// The fields of a profile update form, all validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub password: Password,
    pub email: Email,
    pub name: DisplayName,
}

/// Validates a registration form.
///
/// Rules are applied in this order: login charset, login length,
/// password length, email format, name format.
pub fn validate_registration(
    login: &str,
    password: &str,
    email: &str,
    name: &str,
) -> Result<Registration, ValidationError> {
    let registration = Login::try_from(login)
        .and_then(|login| {
            Ok(Registration {
                login,
                password: Password::try_from(password)?,
                email: Email::try_from(email)?,
                name: DisplayName::try_from(name)?,
            })
        })
        .inspect_err(|rule| debug!("Registration rejected for login {login:?}: {}", rule.code()))?;

    info!("Registration form accepted for {}", registration.login);
    Ok(registration)
}

/// Validates a profile update form.
///
/// Rules are applied in this order: password length, email format,
/// name format.
pub fn validate_update(
    password: &str,
    email: &str,
    name: &str,
) -> Result<ProfileUpdate, ValidationError> {
    let update = Password::try_from(password)
        .and_then(|password| {
            Ok(ProfileUpdate {
                password,
                email: Email::try_from(email)?,
                name: DisplayName::try_from(name)?,
            })
        })
        .inspect_err(|rule| debug!("Profile update rejected: {}", rule.code()))?;

    info!("Profile update accepted for {}", update.email);
    Ok(update)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod registration_tests {
        use super::*;

        #[test]
        fn test_valid_registration() {
            let registration =
                validate_registration("validuser123", "longenoughpassword", "a@b.com", "Ivan")
                    .unwrap();

            assert_eq!(registration.login.as_ref(), "validuser123");
            assert_eq!(registration.password.as_ref(), "longenoughpassword");
            assert_eq!(registration.email.as_ref(), "a@b.com");
            assert_eq!(registration.name.as_ref(), "Ivan");
        }

        #[test]
        fn test_short_login_is_reported_before_anything_else() {
            assert_eq!(
                validate_registration("ab", "validpass", "a@b.com", "Ivan").unwrap_err(),
                ValidationError::LoginLength
            );
        }

        #[test]
        fn test_email_is_reported_before_name() {
            assert_eq!(
                validate_registration("validuser123", "longenoughpassword", "bad-email", "Ivan")
                    .unwrap_err(),
                ValidationError::Email
            );
        }

        #[test]
        fn test_first_violated_rule_wins() {
            // (login, password, email, name, expected rule)
            let test_cases = vec![
                ("Bad_Login", "short", "bad-email", "ivan", ValidationError::LoginCharset),
                ("", "short", "bad-email", "ivan", ValidationError::LoginCharset),
                ("abcd", "short", "bad-email", "ivan", ValidationError::LoginLength),
                ("abcde", "short", "bad-email", "ivan", ValidationError::PasswordLength),
                ("abcde", "longenough", "bad-email", "ivan", ValidationError::Email),
                ("abcde", "longenough", "a@b.com", "ivan", ValidationError::Name),
            ];

            for (login, password, email, name, expected) in test_cases {
                assert_eq!(
                    validate_registration(login, password, email, name).unwrap_err(),
                    expected,
                    "Unexpected rule reported for login {:?}",
                    login
                );
            }
        }
    }

    mod update_tests {
        use super::*;

        #[test]
        fn test_valid_update() {
            let update = validate_update("shortpw", "a@b.com", "Иван").unwrap();
            assert_eq!(update.email.as_ref(), "a@b.com");
            assert_eq!(update.name.as_ref(), "Иван");
        }

        #[test]
        fn test_short_password_is_reported_first() {
            assert_eq!(
                validate_update("short1", "a@b.com", "Ivan").unwrap_err(),
                ValidationError::PasswordLength
            );
            assert_eq!(
                validate_update("short1", "bad-email", "ivan").unwrap_err(),
                ValidationError::PasswordLength
            );
        }

        #[test]
        fn test_update_ignores_login_rules() {
            assert_eq!(
                validate_update("longenough", "a@b", "Ivan").unwrap_err(),
                ValidationError::Email
            );
            assert_eq!(
                validate_update("longenough", "a@b.com", "IvanS").unwrap_err(),
                ValidationError::Name
            );
        }
    }
}
