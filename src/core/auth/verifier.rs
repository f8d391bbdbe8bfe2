//! Credential verification

use crate::config::SecretString;
use secrecy::ExposeSecret;
use subtle::ConstantTimeEq;

/// Checks a username/password pair
///
/// Implementations must not leak timing information about which part of the
/// pair was wrong.
pub trait CredentialVerifier: Send + Sync {
    /// Returns `true` when the credentials are accepted
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Accepts exactly one configured username/password pair
pub struct StaticCredentialVerifier {
    username: String,
    password: SecretString,
}

impl StaticCredentialVerifier {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }
}

impl CredentialVerifier for StaticCredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> bool {
        let user_ok = self.username.as_bytes().ct_eq(username.as_bytes());
        let pass_ok = self
            .password
            .expose_secret()
            .as_ref()
            .as_bytes()
            .ct_eq(password.as_bytes());
        (user_ok & pass_ok).unwrap_u8() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    fn verifier() -> StaticCredentialVerifier {
        StaticCredentialVerifier::new("admin", secret_string("password".to_string()))
    }

    #[test]
    fn test_accepts_configured_pair() {
        assert!(verifier().verify("admin", "password"));
    }

    #[test]
    fn test_rejects_wrong_password() {
        assert!(!verifier().verify("admin", "Password"));
        assert!(!verifier().verify("admin", ""));
    }

    #[test]
    fn test_rejects_wrong_username() {
        assert!(!verifier().verify("root", "password"));
        assert!(!verifier().verify("admin ", "password"));
    }
}
