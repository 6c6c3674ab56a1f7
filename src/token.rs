/// AccessToken is the bearer credential obtained from the token exchange.
/// It is passed explicitly to every authenticated activity call; the client
/// itself holds no token state.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Create a new AccessToken from its string form
    pub fn new(token: impl Into<String>) -> Self {
        AccessToken(token.into())
    }

    /// Get the raw token string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether the token is the empty string
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for AccessToken {
    fn from(token: String) -> Self {
        AccessToken(token)
    }
}

impl From<&str> for AccessToken {
    fn from(token: &str) -> Self {
        AccessToken(token.to_string())
    }
}

// Implement Debug manually to avoid exposing the credential
impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AccessToken").field(&"<redacted>").finish()
    }
}
