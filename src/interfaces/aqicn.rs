use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum AqicnError {
    #[error(transparent)]
    Http(#[from] ureq::Error),
    #[error("AQICN returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

/// Client for the AQICN (WAQI) feed of a single monitoring station.
pub struct AqicnClient {
    agent: ureq::Agent,
    feed_url: Url,
    token: String,
}

impl AqicnClient {
    pub fn new(
        agent: ureq::Agent,
        base_url: &Url,
        station: &str,
        token: &str,
    ) -> Result<Self, url::ParseError> {
        Ok(AqicnClient {
            agent,
            feed_url: base_url.join(&format!("feed/{station}/"))?,
            token: token.to_string(),
        })
    }

    pub fn feed_url(&self) -> &Url {
        &self.feed_url
    }

    /// Fetch the raw feed body. Only transport-level success is checked here.
    pub fn get_feed(&self) -> Result<String, AqicnError> {
        log::debug!("Requesting {}", self.feed_url);
        let mut resp = self
            .agent
            .get(self.feed_url.as_str())
            .query("token", &self.token)
            .call()?;
        let status = resp.status();
        let body = resp.body_mut().read_to_string()?;
        if !status.is_success() {
            return Err(AqicnError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use mockito::Matcher;

    use crate::constants::defaults;
    use crate::interfaces::http_api::{get_ureq_agent, parse_base_url};

    const TOKEN: &str = "secret";

    fn client_for(server: &mockito::Server) -> AqicnClient {
        let base = parse_base_url(&server.url()).unwrap();
        AqicnClient::new(
            get_ureq_agent(defaults::API_REQUEST_TIMEOUT),
            &base,
            "@3308",
            TOKEN,
        )
        .unwrap()
    }

    #[test]
    fn feed_url_includes_station() {
        let base = parse_base_url(defaults::AQICN_BASE_URL).unwrap();
        let client = AqicnClient::new(
            get_ureq_agent(defaults::API_REQUEST_TIMEOUT),
            &base,
            "@3308",
            TOKEN,
        )
        .unwrap();
        assert_eq!(
            client.feed_url().as_str(),
            "https://api.waqi.info/feed/@3308/"
        );
    }

    #[test]
    fn get_feed_sends_token() {
        let mut server = mockito::Server::new();
        let m = server
            .mock("GET", "/feed/@3308/")
            .match_query(Matcher::UrlEncoded("token".into(), TOKEN.into()))
            .with_body(r#"{"status":"ok"}"#)
            .expect(1)
            .create();

        assert_eq!(client_for(&server).get_feed().unwrap(), r#"{"status":"ok"}"#);
        m.assert();
    }

    #[test]
    fn get_feed_reports_http_error_status() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("GET", "/feed/@3308/")
            .match_query(Matcher::Any)
            .with_status(503)
            .with_body("unavailable")
            .create();

        match client_for(&server).get_feed() {
            Err(AqicnError::Status { status, body }) => {
                assert_eq!(status, 503);
                assert_eq!(body, "unavailable");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
