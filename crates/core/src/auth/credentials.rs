//! Operator credential check.

use pavilion_shared::config::OperatorConfig;

/// The configured operator credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Creates credentials from a username and password.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Checks a sign-in attempt.
    ///
    /// The username is matched case-insensitively, the password exactly.
    #[must_use]
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.username.eq_ignore_ascii_case(username) && self.password == password
    }
}

impl From<&OperatorConfig> for Credentials {
    fn from(config: &OperatorConfig) -> Self {
        Self::new(config.username.clone(), config.password.clone())
    }
}
