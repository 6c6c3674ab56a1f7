use reqwest::blocking::ClientBuilder;

/// Create the HTTP client used for all Nike+ requests. The cookie store
/// carries the login session; timeout behavior is left to the transport's
/// own defaults.
pub(crate) fn create_api_client() -> reqwest::blocking::Client {
    ClientBuilder::new()
        .cookie_store(true)
        .pool_max_idle_per_host(50)
        .build()
        .expect("Failed to create HTTP client")
}

/// Configuration for the Nike+ API client
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the activity API
    pub api_url: String,
    /// Base URL of the developer portal handling login and token exchange
    pub developer_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: "https://api.nike.com".to_string(),
            developer_url: "https://developer.nike.com".to_string(),
        }
    }
}

impl Config {
    /// Create a configuration with custom base URLs; trailing slashes are
    /// stripped so paths can be appended directly
    pub fn new(api_url: impl Into<String>, developer_url: impl Into<String>) -> Self {
        Config {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            developer_url: developer_url.into().trim_end_matches('/').to_string(),
        }
    }
}

/// Client for the Nike+ API.
///
/// Owns the HTTP client and its cookie store for the lifetime of the
/// instance. Authentication state beyond the session cookie is not kept
/// here: [`ask_access_token`](Client::ask_access_token) returns an
/// [`AccessToken`](crate::AccessToken) that callers pass to every activity
/// operation, so a shared `&Client` is safe to use from multiple threads.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) http: reqwest::blocking::Client,
    pub(crate) config: Config,
}

impl Client {
    /// Create a new client against the production Nike+ hosts
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: Config) -> Self {
        Client {
            http: create_api_client(),
            config,
        }
    }

    /// Get the active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_targets_production_hosts() {
        let client = Client::new();

        assert_eq!(client.config().api_url, "https://api.nike.com");
        assert_eq!(client.config().developer_url, "https://developer.nike.com");
    }

    #[test]
    fn test_custom_config_strips_trailing_slashes() {
        let config = Config::new("http://localhost:8080/", "http://localhost:8081/");

        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.developer_url, "http://localhost:8081");
    }
}
