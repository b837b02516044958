//! Registration form state and validation rules.
//!
//! # Responsibility
//! - Track field values and touched flags for the registration view.
//! - Evaluate field-level rules and the password/confirmation cross-field
//!   rule.
//!
//! # Invariants
//! - Empty required fields report only the `Required` failure; length and
//!   format rules do not fire on empty input.
//! - The cross-field rule never masks a more specific failure already
//!   present on the confirmation field.
//! - Form state is never persisted; it lives and dies with the view.

use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};

const USERNAME_MIN_CHARS: usize = 6;
const USERNAME_MAX_CHARS: usize = 20;
const PASSWORD_MIN_CHARS: usize = 8;
const EMAIL_MAX_CHARS: usize = 254;
const EMAIL_LOCAL_MAX_CHARS: usize = 64;

static EMAIL_FORMAT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("valid email regex")
});

/// Fields of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegisterField {
    Username,
    Email,
    Password,
    ConfirmPassword,
    InvitationCode,
}

impl RegisterField {
    /// All fields in view order.
    pub const ALL: [RegisterField; 5] = [
        RegisterField::Username,
        RegisterField::Email,
        RegisterField::Password,
        RegisterField::ConfirmPassword,
        RegisterField::InvitationCode,
    ];

    /// Stable string id used in diagnostics and envelope payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm_password",
            Self::InvitationCode => "invitation_code",
        }
    }
}

/// One validation failure, renderable next to a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldFailure {
    Required,
    TooShort { min: usize, actual: usize },
    TooLong { max: usize, actual: usize },
    InvalidEmail,
    /// The cross-field failure raised when a value and its confirmation
    /// differ.
    FieldsMustMatch,
}

impl Display for FieldFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => write!(f, "value is required"),
            Self::TooShort { min, actual } => {
                write!(f, "must be at least {min} characters (got {actual})")
            }
            Self::TooLong { max, actual } => {
                write!(f, "must be at most {max} characters (got {actual})")
            }
            Self::InvalidEmail => write!(f, "email address is not well-formed"),
            Self::FieldsMustMatch => write!(f, "fields must match"),
        }
    }
}

/// Result of one submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All rules passed; registration is acknowledged without side effects.
    Accepted,
    /// At least one rule failed; all fields are now touched.
    Rejected,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FieldState {
    value: String,
    touched: bool,
}

/// In-memory state of the registration form.
///
/// Created on form mount, mutated on every keystroke and blur, discarded on
/// submit or navigation away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    username: FieldState,
    email: FieldState,
    password: FieldState,
    confirm_password: FieldState,
    invitation_code: FieldState,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces one field value (keystroke).
    pub fn set_value(&mut self, field: RegisterField, value: impl Into<String>) {
        self.state_mut(field).value = value.into();
    }

    /// Marks one field as touched (blur).
    pub fn touch(&mut self, field: RegisterField) {
        self.state_mut(field).touched = true;
    }

    pub fn value(&self, field: RegisterField) -> &str {
        &self.state(field).value
    }

    pub fn is_touched(&self, field: RegisterField) -> bool {
        self.state(field).touched
    }

    pub fn mark_all_touched(&mut self) {
        for field in RegisterField::ALL {
            self.touch(field);
        }
    }

    /// Field-level rule failures for one field.
    ///
    /// The cross-field rule is excluded; see [`RegisterForm::visible_failures`].
    pub fn field_failures(&self, field: RegisterField) -> Vec<FieldFailure> {
        let value = self.value(field);
        match field {
            RegisterField::Username => required_then(value, |v| {
                length_window(v, USERNAME_MIN_CHARS, USERNAME_MAX_CHARS)
            }),
            RegisterField::Email => required_then(value, email_failures),
            RegisterField::Password => {
                required_then(value, |v| min_length(v, PASSWORD_MIN_CHARS))
            }
            RegisterField::ConfirmPassword => required_then(value, |_| Vec::new()),
            RegisterField::InvitationCode => Vec::new(),
        }
    }

    /// Cross-field rule outcome, evaluated against the whole form.
    pub fn cross_field_failure(&self) -> Option<FieldFailure> {
        must_match(
            self.value(RegisterField::Password),
            self.value(RegisterField::ConfirmPassword),
            &self.field_failures(RegisterField::ConfirmPassword),
        )
    }

    /// Failures the view renders next to one field.
    ///
    /// The cross-field mismatch surfaces on the confirmation field.
    pub fn visible_failures(&self, field: RegisterField) -> Vec<FieldFailure> {
        let mut failures = self.field_failures(field);
        if field == RegisterField::ConfirmPassword {
            if let Some(failure) = self.cross_field_failure() {
                failures.push(failure);
            }
        }
        failures
    }

    /// Aggregate validity: all field rules plus the cross-field rule.
    pub fn is_valid(&self) -> bool {
        RegisterField::ALL
            .iter()
            .all(|field| self.field_failures(*field).is_empty())
            && self.cross_field_failure().is_none()
    }

    /// Submits the form.
    ///
    /// # Contract
    /// - Valid form: reports `Accepted`; nothing is persisted or sent.
    /// - Invalid form: every field becomes touched so latent failures
    ///   render, and the outcome is `Rejected`.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_valid() {
            info!("event=register_submit module=register status=ok");
            SubmitOutcome::Accepted
        } else {
            self.mark_all_touched();
            info!("event=register_submit module=register status=rejected");
            SubmitOutcome::Rejected
        }
    }

    fn state(&self, field: RegisterField) -> &FieldState {
        match field {
            RegisterField::Username => &self.username,
            RegisterField::Email => &self.email,
            RegisterField::Password => &self.password,
            RegisterField::ConfirmPassword => &self.confirm_password,
            RegisterField::InvitationCode => &self.invitation_code,
        }
    }

    fn state_mut(&mut self, field: RegisterField) -> &mut FieldState {
        match field {
            RegisterField::Username => &mut self.username,
            RegisterField::Email => &mut self.email,
            RegisterField::Password => &mut self.password,
            RegisterField::ConfirmPassword => &mut self.confirm_password,
            RegisterField::InvitationCode => &mut self.invitation_code,
        }
    }
}

/// Cross-field equality rule between a field and its confirmation.
///
/// Policy, in order:
/// 1. An empty `first` with a non-empty `second` passes: the rule only
///    starts matching once both fields are populated. Confirming an empty
///    value against a non-empty confirmation therefore passes silently.
/// 2. When `second` already carries a failure of its own, the rule defers
///    so the more specific failure stays visible.
/// 3. Otherwise the rule passes iff the values are equal.
pub fn must_match(
    first: &str,
    second: &str,
    second_failures: &[FieldFailure],
) -> Option<FieldFailure> {
    if first.is_empty() && !second.is_empty() {
        return None;
    }
    if second_failures
        .iter()
        .any(|failure| !matches!(failure, FieldFailure::FieldsMustMatch))
    {
        return None;
    }
    if first == second {
        None
    } else {
        Some(FieldFailure::FieldsMustMatch)
    }
}

fn required_then(
    value: &str,
    rules: impl FnOnce(&str) -> Vec<FieldFailure>,
) -> Vec<FieldFailure> {
    if value.is_empty() {
        vec![FieldFailure::Required]
    } else {
        rules(value)
    }
}

fn length_window(value: &str, min: usize, max: usize) -> Vec<FieldFailure> {
    let actual = value.chars().count();
    if actual < min {
        vec![FieldFailure::TooShort { min, actual }]
    } else if actual > max {
        vec![FieldFailure::TooLong { max, actual }]
    } else {
        Vec::new()
    }
}

fn min_length(value: &str, min: usize) -> Vec<FieldFailure> {
    let actual = value.chars().count();
    if actual < min {
        vec![FieldFailure::TooShort { min, actual }]
    } else {
        Vec::new()
    }
}

fn email_failures(value: &str) -> Vec<FieldFailure> {
    if email_is_well_formed(value) {
        Vec::new()
    } else {
        vec![FieldFailure::InvalidEmail]
    }
}

/// Bounded-length email format check.
///
/// The overall and local-part caps come from the reference validator; the
/// pattern itself carries no length bounds.
fn email_is_well_formed(value: &str) -> bool {
    if value.chars().count() > EMAIL_MAX_CHARS {
        return false;
    }
    let Some(at) = value.find('@') else {
        return false;
    };
    if at == 0 || at > EMAIL_LOCAL_MAX_CHARS {
        return false;
    }
    EMAIL_FORMAT_RE.is_match(value)
}
