//! Provider signup placeholders for the registration view.
//!
//! # Responsibility
//! - Keep the third-party signup buttons as acknowledged no-ops.
//!
//! # Invariants
//! - Nothing here persists data or talks to a network.

use log::info;

/// Third-party signup providers offered on the registration view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupProvider {
    Twitter,
    Google,
    WeChat,
}

impl SignupProvider {
    /// Stable string id used in diagnostics and envelope payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::Google => "google",
            Self::WeChat => "wechat",
        }
    }
}

/// Acknowledgement for one provider signup click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignupAck {
    pub provider: SignupProvider,
    /// Always `false`; provider flows are not wired up.
    pub available: bool,
}

/// Handles a provider signup click.
///
/// The click is consumed (no default action) and nothing else happens.
pub fn provider_signup(provider: SignupProvider) -> SignupAck {
    info!(
        "event=provider_signup module=register status=noop provider={}",
        provider.as_str()
    );
    SignupAck {
        provider,
        available: false,
    }
}
