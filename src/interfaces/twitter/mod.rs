use serde::Deserialize;
use thiserror::Error;
use url::Url;

mod oauth;

pub use oauth::{Credentials, OAuthError};

const USER_TIMELINE_PATH: &str = "statuses/user_timeline.json";
const UPDATE_STATUS_PATH: &str = "statuses/update.json";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Error, Debug)]
pub enum TwitterError {
    #[error(transparent)]
    Http(#[from] ureq::Error),
    #[error("Twitter API returned HTTP {status}: {body}")]
    Api { status: u16, body: String },
    #[error("could not parse Twitter response: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Url(#[from] url::ParseError),
    #[error(transparent)]
    OAuth(#[from] OAuthError),
}

#[derive(Debug, Deserialize)]
struct Tweet {
    text: String,
}

/// Minimal Twitter v1.1 client for the authenticated account.
pub struct TwitterClient {
    agent: ureq::Agent,
    base_url: Url,
    credentials: Credentials,
}

impl TwitterClient {
    pub fn new(agent: ureq::Agent, base_url: Url, credentials: Credentials) -> Self {
        TwitterClient {
            agent,
            base_url,
            credentials,
        }
    }

    fn sign(&self, method: &str, url: &Url, params: &[(&str, &str)]) -> Result<String, TwitterError> {
        Ok(self.credentials.authorization_header(
            method,
            url,
            params,
            &oauth::nonce(),
            chrono::Utc::now().timestamp(),
        )?)
    }

    /// Text of the account's most recent tweet, or `None` if it has never tweeted.
    pub fn last_tweet_text(&self) -> Result<Option<String>, TwitterError> {
        let url = self.base_url.join(USER_TIMELINE_PATH)?;
        let params = [("count", "1")];
        let auth = self.sign("GET", &url, &params)?;

        let mut resp = self
            .agent
            .get(format!("{url}?{}", oauth::encode_pairs(&params)))
            .header("Authorization", auth.as_str())
            .call()?;
        let body = read_success_body(&mut resp)?;
        let timeline: Vec<Tweet> = serde_json::from_str(&body)?;
        Ok(timeline.into_iter().next().map(|t| t.text))
    }

    pub fn update_status(&self, status: &str, place_id: Option<&str>) -> Result<(), TwitterError> {
        let url = self.base_url.join(UPDATE_STATUS_PATH)?;
        let mut params = vec![("status", status)];
        if let Some(place_id) = place_id {
            params.push(("place_id", place_id));
        }
        let auth = self.sign("POST", &url, &params)?;

        let mut resp = self
            .agent
            .post(url.as_str())
            .header("Authorization", auth.as_str())
            .header("Content-Type", FORM_CONTENT_TYPE)
            .send(oauth::encode_pairs(&params))?;
        read_success_body(&mut resp)?;
        Ok(())
    }
}

fn read_success_body(resp: &mut ureq::http::Response<ureq::Body>) -> Result<String, TwitterError> {
    let status = resp.status();
    let body = resp.body_mut().read_to_string()?;
    if !status.is_success() {
        return Err(TwitterError::Api {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}
