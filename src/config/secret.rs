//! Passwords read from the config file and environment
//!
//! The PostgreSQL password and the login password are held as
//! [`SecretString`]: zeroed on drop, redacted in `Debug`, and reachable only
//! through `expose_secret()`.
//!
//! ```rust
//! use myclinic::config::secret_string;
//! use secrecy::ExposeSecret;
//!
//! let password = secret_string("clinic-admin".to_string());
//! assert_eq!(password.expose_secret().as_ref(), "clinic-admin");
//! assert!(!format!("{password:?}").contains("clinic-admin"));
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret, SerializableSecret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

/// Password text that zeroes itself on drop
#[derive(Clone, Debug, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}
impl SerializableSecret for SecretValue {}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for SecretValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SecretValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(SecretValue)
    }
}

/// A configured password
pub type SecretString = Secret<SecretValue>;

/// Wraps a plain string read from TOML defaults or an env override
#[inline]
pub fn secret_string(value: String) -> SecretString {
    Secret::new(SecretValue::from(value))
}
