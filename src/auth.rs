use std::collections::HashMap;

use reqwest::header::ACCEPT;
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use crate::client::Client;
use crate::error::{Error, Result};
use crate::response;
use crate::token::AccessToken;

const LOGIN_PATH: &str = "/login";
const TOKEN_PATH: &str = "/get_auth_token";

/// Landing page the portal redirects to after a login attempt
const CONTINUE_URL: &str = "/categories";

impl Client {
    /// Log in to the Nike+ developer portal with email and password.
    ///
    /// Submits form-encoded credentials and lets the transport follow the
    /// service's redirects; the outcome is judged solely from the final
    /// redirect URL, never from a status code. A query string carrying an
    /// `error=` marker means the login was rejected, and the returned error
    /// names that query string. On success the client's cookie store holds
    /// the authenticated session; no other state changes.
    pub fn login(&self, email: &str, password: &str) -> Result<()> {
        let url = Url::parse(&format!("{}{}", self.config.developer_url, LOGIN_PATH))?;
        debug!(url = %url, email = %email, "logging in");

        let form = [
            ("email", email),
            ("password", password),
            ("continue_url", CONTINUE_URL),
        ];
        let response = self.http.post(url).form(&form).send()?;

        let query = response.url().query().unwrap_or("");
        if query.contains("error=") {
            warn!(query = %query, "login rejected");
            return Err(Error::LoginRejected {
                query: query.to_string(),
            });
        }

        info!(email = %email, "login succeeded");
        Ok(())
    }

    /// Exchange the login session for an access token.
    ///
    /// Relies on the session cookie established by [`login`](Client::login);
    /// calling this first works only if a valid session cookie reached the
    /// store by other means (a precondition, not enforced here). The
    /// response must carry an `auth_token` string field, returned as the
    /// [`AccessToken`] that authenticates activity calls.
    pub fn ask_access_token(&self) -> Result<AccessToken> {
        let url = Url::parse(&format!("{}{}", self.config.developer_url, TOKEN_PATH))?;
        debug!(url = %url, "requesting access token");

        let response = self
            .http
            .post(url)
            .header(ACCEPT, "application/json")
            .send()?;
        let fields: HashMap<String, Value> = response::decode_response(response)?;

        match fields.get("auth_token").and_then(Value::as_str) {
            Some(token) => {
                info!("obtained access token");
                Ok(AccessToken::new(token))
            }
            None => Err(Error::TokenMissing),
        }
    }
}
