/**
 * Admin Access Gate
 *
 * Classifies a request as admin-authorized or not based on a single
 * configured secret. This is the whole of the authorization model: no
 * tokens, no sessions, no roles-to-permissions mapping. The value arrives
 * on the `x-admin-key` header and is compared verbatim.
 */

/// Header carrying the shared admin secret
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Outcome of an authorization check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The presented value equals the configured secret
    Authorized,
    /// Missing header or wrong value
    Denied,
}

/// Shared-secret admin gate
///
/// Constructed once at startup from the configuration value and cloned into
/// the application state; there is no ambient global secret.
#[derive(Debug, Clone)]
pub struct AdminGate {
    secret: String,
}

impl AdminGate {
    /// Create a gate around the configured secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Classify a presented header value
    pub fn authorize(&self, header_value: Option<&str>) -> Access {
        match header_value {
            Some(value) if value == self.secret => Access::Authorized,
            _ => Access::Denied,
        }
    }

    /// Convenience predicate over [`AdminGate::authorize`]
    pub fn is_authorized(&self, header_value: Option<&str>) -> bool {
        self.authorize(header_value) == Access::Authorized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_secret_is_authorized() {
        let gate = AdminGate::new("hunter2");
        assert_eq!(gate.authorize(Some("hunter2")), Access::Authorized);
    }

    #[test]
    fn test_wrong_secret_is_denied() {
        let gate = AdminGate::new("hunter2");
        assert_eq!(gate.authorize(Some("hunter3")), Access::Denied);
        assert_eq!(gate.authorize(Some("")), Access::Denied);
    }

    #[test]
    fn test_missing_header_is_denied() {
        let gate = AdminGate::new("hunter2");
        assert_eq!(gate.authorize(None), Access::Denied);
    }
}
