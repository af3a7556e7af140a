//! Validation des champs saisis à l'inscription et à la mise à jour du profil.
//!
//! The predicates in [`utils::input_validation`] are pure and total, the
//! composite checks in [`checker`] stop at the first violated rule, and
//! [`notification`] turns that rule into a payload for whatever displays it.

pub mod checker;
pub mod notification;
pub mod utils;

pub use checker::{validate_registration, validate_update, ProfileUpdate, Registration};
pub use notification::{check_registration, check_update, LogSink, Notification, NotificationSink, Severity};
pub use utils::input_validation::{DisplayName, Email, Login, Password, ValidationError};
