//! Credential types for Mode client configuration.
//!
//! Responsibilities:
//! - Hold the workspace name and the API token/password pair.
//! - Handle serialization of the secret half of the credential.
//!
//! Does NOT handle:
//! - The batch signature-token exchange (see client crate).
//!
//! Invariants:
//! - The password is a `secrecy::SecretString`; `Debug` output never reveals it.
//! - Serialization includes the secret for persistence; secrecy is for runtime safety.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Workspace credentials.
///
/// Mode authenticates API calls with HTTP Basic auth where the username is an
/// API token and the password is that token's secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Workspace (organization) name; part of every URL path.
    pub workspace: String,
    /// API token name, used as the basic-auth username.
    pub token: String,
    /// API token secret, used as the basic-auth password.
    #[serde(with = "secret_string")]
    pub password: SecretString,
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn sample() -> AuthConfig {
        AuthConfig {
            workspace: "acme".to_string(),
            token: "tok-123".to_string(),
            password: SecretString::new("super-secret-456".to_string().into()),
        }
    }

    #[test]
    fn test_auth_config_debug_does_not_expose_password() {
        let debug_output = format!("{:?}", sample());

        assert!(
            !debug_output.contains("super-secret-456"),
            "Debug output should not contain the password"
        );
        // Non-secret parts stay visible for diagnostics
        assert!(debug_output.contains("acme"));
        assert!(debug_output.contains("tok-123"));
    }

    #[test]
    fn test_auth_config_serde_round_trip() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("super-secret-456"));

        let decoded: AuthConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.workspace, "acme");
        assert_eq!(decoded.token, "tok-123");
        assert_eq!(decoded.password.expose_secret(), "super-secret-456");
    }
}
