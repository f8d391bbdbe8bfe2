//! Session authentication
//!
//! Login checks a username/password pair through a [`CredentialVerifier`]
//! and, on success, issues an opaque bearer token tracked by the
//! [`SessionStore`]. Tokens are only kept as SHA-256 digests.
//!
//! # Example
//!
//! ```rust
//! use myclinic::config::secret_string;
//! use myclinic::core::auth::{SessionStore, StaticCredentialVerifier, CredentialVerifier};
//! use chrono::Duration;
//!
//! let verifier = StaticCredentialVerifier::new("admin", secret_string("password".to_string()));
//! assert!(verifier.verify("admin", "password"));
//!
//! let sessions = SessionStore::new(Duration::minutes(30));
//! let issued = sessions.open("admin").unwrap();
//! assert_eq!(sessions.validate(&issued.token).unwrap().username, "admin");
//! ```

pub mod session;
pub mod verifier;

pub use session::{generate_token, hash_token, IssuedSession, Session, SessionStore};
pub use verifier::{CredentialVerifier, StaticCredentialVerifier};
