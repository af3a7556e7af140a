//! Notifications affichées à l'utilisateur quand une saisie est refusée.
//!
//! The validators never talk to a UI directly. A failure is turned into a
//! [`Notification`] and handed to a [`NotificationSink`] chosen by the caller
//! (a session flash store, a terminal, a log file...).

use crate::checker::{validate_registration, validate_update};
use crate::utils::input_validation::ValidationError;
use derive_more::derive::Display;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};

/// Title of every validation notification
pub const VALIDATION_TITLE: &str = "Erreur";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[display("info")]
    Info,
    #[display("warning")]
    Warning,
    #[display("error")]
    Error,
}

/// A user-facing message describing exactly one problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl From<ValidationError> for Notification {
    fn from(rule: ValidationError) -> Self {
        Self {
            title: VALIDATION_TITLE.to_owned(),
            message: rule.to_string(),
            severity: Severity::Error,
        }
    }
}

/// Receives the notifications produced by the checks.
///
/// Delivery is fire-and-forget: a sink must not fail the caller.
pub trait NotificationSink {
    fn flash(&mut self, notification: Notification);
}

impl NotificationSink for Vec<Notification> {
    fn flash(&mut self, notification: Notification) {
        self.push(notification);
    }
}

/// Sink writing every notification to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn flash(&mut self, notification: Notification) {
        let Notification { title, message, severity } = notification;
        match severity {
            Severity::Info => info!("{title}: {message}"),
            Severity::Warning => warn!("{title}: {message}"),
            Severity::Error => error!("{title}: {message}"),
        }
    }
}

/// Flashes the violated rule, if any, and tells whether the outcome was a success
fn flash_outcome<T, S: NotificationSink + ?Sized>(
    sink: &mut S,
    outcome: Result<T, ValidationError>,
) -> bool {
    match outcome {
        Ok(_) => true,
        Err(rule) => {
            sink.flash(rule.into());
            false
        }
    }
}

/// Runs [`validate_registration`] and flashes the first violated rule.
///
/// Returns true if every field is valid, in which case nothing is flashed.
pub fn check_registration<S: NotificationSink + ?Sized>(
    sink: &mut S,
    login: &str,
    password: &str,
    email: &str,
    name: &str,
) -> bool {
    flash_outcome(sink, validate_registration(login, password, email, name))
}

/// Runs [`validate_update`] and flashes the first violated rule.
pub fn check_update<S: NotificationSink + ?Sized>(
    sink: &mut S,
    password: &str,
    email: &str,
    name: &str,
) -> bool {
    flash_outcome(sink, validate_update(password, email, name))
}
