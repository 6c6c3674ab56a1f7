use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::client::Client;
use crate::error::Result;
use crate::models::{Activities, Activity};
use crate::params::{self, Params};
use crate::response;
use crate::token::AccessToken;

const ACTIVITIES_PATH: &str = "/me/sport/activities";

impl Client {
    /// Fetch one activity by id, including its per-interval metric series.
    ///
    /// # Arguments
    /// * `token` - Access token from [`ask_access_token`](Client::ask_access_token)
    /// * `activity_id` - Activity identifier as returned by the list endpoints
    pub fn get_activity_details(
        &self,
        token: &AccessToken,
        activity_id: &str,
    ) -> Result<Activity> {
        let url = Url::parse(&format!(
            "{}{}/{}?access_token={}",
            self.config.api_url,
            ACTIVITIES_PATH,
            activity_id,
            token.as_str()
        ))?;
        self.fetch(url)
    }

    /// Fetch one page of the user's activities
    pub fn get_activities(
        &self,
        token: &AccessToken,
        params: Option<&Params>,
    ) -> Result<Activities> {
        let url = Url::parse(&format!(
            "{}{}?{}",
            self.config.api_url,
            ACTIVITIES_PATH,
            params::to_query_string(token, params)
        ))?;
        self.fetch(url)
    }

    /// Fetch one page of the user's activities of a single kind, e.g. `RUN`
    pub fn get_activities_by_type(
        &self,
        token: &AccessToken,
        activity_type: &str,
        params: Option<&Params>,
    ) -> Result<Activities> {
        let url = Url::parse(&format!(
            "{}{}/{}?{}",
            self.config.api_url,
            ACTIVITIES_PATH,
            activity_type,
            params::to_query_string(token, params)
        ))?;
        self.fetch(url)
    }

    /// Issue an authenticated GET and decode the JSON body
    fn fetch<T>(&self, url: Url) -> Result<T>
    where
        T: DeserializeOwned,
    {
        debug!(url = %url, "fetching activities");
        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()?;
        response::decode_response(response)
    }
}
