//! Pluggable credential verification.
//!
//! # Responsibility
//! - Define the verification capability the session gate depends on.
//! - Provide the fixed single-pair verifier used by this application.
//!
//! # Invariants
//! - Verifiers are pure: no storage writes, no side effects.
//! - Comparison is exact; values are not trimmed or case-folded.

/// One username/password pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Outcome of one verification attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    Accepted,
    Rejected,
}

/// Verification capability behind the session gate.
///
/// A real credential store can be substituted here without touching gate or
/// navigation logic.
pub trait CredentialVerifier {
    fn verify(&self, credentials: &Credentials) -> VerifyOutcome;
}

/// Verifier accepting exactly one configured pair.
pub struct FixedCredentialVerifier {
    expected: Credentials,
}

impl FixedCredentialVerifier {
    pub fn new(expected: Credentials) -> Self {
        Self { expected }
    }
}

impl Default for FixedCredentialVerifier {
    /// The application's built-in pair.
    fn default() -> Self {
        Self::new(Credentials::new("admin", "admin"))
    }
}

impl CredentialVerifier for FixedCredentialVerifier {
    fn verify(&self, credentials: &Credentials) -> VerifyOutcome {
        if credentials == &self.expected {
            VerifyOutcome::Accepted
        } else {
            VerifyOutcome::Rejected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CredentialVerifier, Credentials, FixedCredentialVerifier, VerifyOutcome};

    #[test]
    fn accepts_only_the_exact_configured_pair() {
        let verifier = FixedCredentialVerifier::default();
        assert_eq!(
            verifier.verify(&Credentials::new("admin", "admin")),
            VerifyOutcome::Accepted
        );
        assert_eq!(
            verifier.verify(&Credentials::new("admin", "wrong")),
            VerifyOutcome::Rejected
        );
        assert_eq!(
            verifier.verify(&Credentials::new("Admin", "admin")),
            VerifyOutcome::Rejected
        );
        assert_eq!(
            verifier.verify(&Credentials::new(" admin", "admin")),
            VerifyOutcome::Rejected
        );
    }

    #[test]
    fn custom_pairs_are_supported() {
        let verifier = FixedCredentialVerifier::new(Credentials::new("editor", "s3cret"));
        assert_eq!(
            verifier.verify(&Credentials::new("editor", "s3cret")),
            VerifyOutcome::Accepted
        );
        assert_eq!(
            verifier.verify(&Credentials::new("admin", "admin")),
            VerifyOutcome::Rejected
        );
    }
}
