//! Session gate state machine.
//!
//! # Responsibility
//! - Drive login attempts through the verifier capability.
//! - Persist the session marker and track the gate state.
//!
//! # Invariants
//! - A verifier accept is the only transition into `Authenticated`.
//! - A rejected attempt never mutates storage.
//! - The persisted marker is never cleared by this service.

use crate::auth::verifier::{CredentialVerifier, Credentials, VerifyOutcome};
use crate::nav::router::ARTICLE_LIST_PATH;
use crate::repo::session_repo::SessionRepository;
use crate::repo::RepoError;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Message shown inline when a login attempt is rejected.
pub const LOGIN_REJECTED_MESSAGE: &str = "Invalid username or password.";

/// Service error for session use-cases.
#[derive(Debug)]
pub enum SessionError {
    /// Marker persistence failed.
    Repo(RepoError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for SessionError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Gate state as the login view observes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No persisted marker and no rejected attempt yet.
    Anonymous,
    /// Last attempt was rejected; the message renders inline.
    LoginRejected { message: String },
    /// Marker persisted; catalog views are reachable.
    Authenticated,
}

/// Outcome of one login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials accepted; the caller navigates to `redirect_to`.
    Accepted { redirect_to: &'static str },
    /// Credentials rejected; `message` renders next to the form.
    Rejected { message: String },
}

/// Login gate in front of the catalog views.
pub struct SessionGate<V: CredentialVerifier, S: SessionRepository> {
    verifier: V,
    store: S,
    state: SessionState,
}

impl<V: CredentialVerifier, S: SessionRepository> SessionGate<V, S> {
    /// Builds the gate, restoring `Authenticated` from a persisted marker.
    pub fn new(verifier: V, store: S) -> Result<Self, SessionError> {
        let state = match store.load_marker()? {
            Some(_) => SessionState::Authenticated,
            None => SessionState::Anonymous,
        };
        Ok(Self {
            verifier,
            store,
            state,
        })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Inline error message, present only after a rejected attempt.
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            SessionState::LoginRejected { message } => Some(message),
            _ => None,
        }
    }

    /// Attempts a login with the submitted pair.
    ///
    /// # Contract
    /// - Accept: marker persisted wholesale, error state cleared, outcome
    ///   carries the list-view redirect.
    /// - Reject: no storage mutation; state and outcome carry the inline
    ///   message.
    pub fn login(&mut self, username: &str, password: &str) -> Result<LoginOutcome, SessionError> {
        let credentials = Credentials::new(username, password);
        match self.verifier.verify(&credentials) {
            VerifyOutcome::Accepted => {
                self.store.save_marker(&credentials)?;
                self.state = SessionState::Authenticated;
                info!("event=login module=session status=ok");
                Ok(LoginOutcome::Accepted {
                    redirect_to: ARTICLE_LIST_PATH,
                })
            }
            VerifyOutcome::Rejected => {
                self.state = SessionState::LoginRejected {
                    message: LOGIN_REJECTED_MESSAGE.to_string(),
                };
                warn!("event=login module=session status=rejected");
                Ok(LoginOutcome::Rejected {
                    message: LOGIN_REJECTED_MESSAGE.to_string(),
                })
            }
        }
    }
}
