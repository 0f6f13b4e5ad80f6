//! Admin access gate.
//!
//! The comparison lives behind [`AuthenticationPolicy`] so the shared-secret
//! check can be replaced without touching callers. A successful login yields a
//! [`SessionToken`] that is valid until logout or until the gate is dropped.

use uuid::Uuid;

/// Decides whether a presented credential grants admin access.
pub trait AuthenticationPolicy {
    fn verify(&self, credential: &str) -> bool;
}

/// One shared secret for every admin. An empty secret admits nobody.
#[derive(Clone)]
pub struct SharedSecretPolicy {
    secret: String,
}

impl SharedSecretPolicy {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl std::fmt::Debug for SharedSecretPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedSecretPolicy")
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl AuthenticationPolicy for SharedSecretPolicy {
    fn verify(&self, credential: &str) -> bool {
        !self.secret.is_empty() && credential == self.secret
    }
}

/// Opaque proof of a successful login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionToken(Uuid);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid admin credential")]
    InvalidCredential,
    #[error("Admin session required")]
    NotAuthenticated,
}

/// Holds at most one admin session for the lifetime of the gate.
#[derive(Debug)]
pub struct AdminGate<P> {
    policy: P,
    session: Option<SessionToken>,
}

impl<P: AuthenticationPolicy> AdminGate<P> {
    pub fn new(policy: P) -> Self {
        Self {
            policy,
            session: None,
        }
    }

    /// Checks `credential` and opens a session. A wrong credential leaves any
    /// existing session untouched; there is no lockout.
    pub fn login(&mut self, credential: &str) -> Result<SessionToken, AuthError> {
        if !self.policy.verify(credential) {
            log::info!("admin login rejected");
            return Err(AuthError::InvalidCredential);
        }
        let token = SessionToken(Uuid::new_v4());
        self.session = Some(token);
        log::info!("admin session opened");
        Ok(token)
    }

    pub fn logout(&mut self) {
        if self.session.take().is_some() {
            log::info!("admin session closed");
        }
    }

    pub fn is_authenticated(&self, token: &SessionToken) -> bool {
        self.session.as_ref() == Some(token)
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    pub fn authorize(&self, token: &SessionToken) -> Result<(), AuthError> {
        if self.is_authenticated(token) {
            Ok(())
        } else {
            Err(AuthError::NotAuthenticated)
        }
    }
}
