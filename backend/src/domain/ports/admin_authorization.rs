//! Capability check guarding administrative operations.
//!
//! The original deployment gates message deletion on a static shared secret
//! supplied in a request header. Modelling the comparison as a port keeps the
//! board service decoupled from where the secret lives.

/// Decides whether a presented token carries the admin capability.
#[cfg_attr(test, mockall::automock)]
pub trait AdminAuthorization: Send + Sync {
    /// True when `token` is acceptable.
    fn authorize(&self, token: &str) -> bool;
}

/// Production implementation comparing against one configured token.
#[derive(Debug, Clone)]
pub struct StaticTokenAuthorization {
    expected: String,
}

impl StaticTokenAuthorization {
    /// Build a check around the configured shared secret.
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl AdminAuthorization for StaticTokenAuthorization {
    fn authorize(&self, token: &str) -> bool {
        !self.expected.is_empty() && token == self.expected
    }
}
