//! OAuth 1.0a request signing (HMAC-SHA1), as required by the Twitter v1.1 API.

use base64::Engine;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use thiserror::Error;
use url::Url;

type HmacSha1 = Hmac<Sha1>;

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";

#[derive(Error, Debug)]
pub enum OAuthError {
    #[error("invalid signing key: {0}")]
    Key(#[from] hmac::digest::InvalidLength),
}

#[derive(Clone, Debug)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub token: String,
    pub token_secret: String,
}

/// RFC 3986 encoding; only unreserved characters are left as-is.
pub fn encode(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}

/// `k=v&k=v` with both sides percent-encoded, in the given order.
pub fn encode_pairs(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

pub fn nonce() -> String {
    hex::encode(rand::random::<[u8; 16]>())
}

impl Credentials {
    /// Build the `Authorization` header value for a request. `params` are the
    /// query and form-body parameters the request carries.
    pub fn authorization_header(
        &self,
        method: &str,
        url: &Url,
        params: &[(&str, &str)],
        nonce: &str,
        timestamp: i64,
    ) -> Result<String, OAuthError> {
        let timestamp = timestamp.to_string();
        let mut oauth_params = vec![
            ("oauth_consumer_key", self.consumer_key.as_str()),
            ("oauth_nonce", nonce),
            ("oauth_signature_method", SIGNATURE_METHOD),
            ("oauth_timestamp", timestamp.as_str()),
            ("oauth_token", self.token.as_str()),
            ("oauth_version", OAUTH_VERSION),
        ];

        let signature = self.signature(method, url, &oauth_params, params)?;
        oauth_params.push(("oauth_signature", signature.as_str()));
        oauth_params.sort();

        let fields = oauth_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", encode(k), encode(v)))
            .collect::<Vec<_>>()
            .join(", ");
        Ok(format!("OAuth {fields}"))
    }

    fn signature(
        &self,
        method: &str,
        url: &Url,
        oauth_params: &[(&str, &str)],
        params: &[(&str, &str)],
    ) -> Result<String, OAuthError> {
        let base = signature_base_string(method, url, oauth_params, params);
        let key = format!(
            "{}&{}",
            encode(&self.consumer_secret),
            encode(&self.token_secret)
        );
        let mut mac = HmacSha1::new_from_slice(key.as_bytes())?;
        mac.update(base.as_bytes());
        Ok(base64::engine::general_purpose::STANDARD.encode(mac.finalize().into_bytes()))
    }
}

fn signature_base_string(
    method: &str,
    url: &Url,
    oauth_params: &[(&str, &str)],
    params: &[(&str, &str)],
) -> String {
    let mut encoded: Vec<(String, String)> = oauth_params
        .iter()
        .chain(params)
        .map(|(k, v)| (encode(k), encode(v)))
        .collect();
    encoded.sort();
    let param_string = encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut base_url = url.clone();
    base_url.set_query(None);
    base_url.set_fragment(None);

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        encode(base_url.as_str()),
        encode(&param_string)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use regex::Regex;

    // Worked example from Twitter's "Creating a signature" documentation
    fn doc_credentials() -> Credentials {
        Credentials {
            consumer_key: "xvz1evFS4wEEPTGEFPHBog".into(),
            consumer_secret: "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw".into(),
            token: "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb".into(),
            token_secret: "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE".into(),
        }
    }
    const DOC_NONCE: &str = "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg";
    const DOC_TIMESTAMP: i64 = 1318622958;
    const DOC_STATUS: &str = "Hello Ladies + Gentlemen, a signed OAuth request!";

    #[test]
    fn encodes_reserved_characters() {
        assert_eq!(encode("Ladies + Gentlemen"), "Ladies%20%2B%20Gentlemen");
        assert_eq!(encode("a-b.c_d~e"), "a-b.c_d~e");
        assert_eq!(encode("PM2.5!"), "PM2.5%21");
        assert_eq!(encode_pairs(&[("count", "1"), ("a b", "c")]), "count=1&a%20b=c");
    }

    #[test]
    fn signs_documentation_example() {
        let url = Url::parse("https://api.twitter.com/1.1/statuses/update.json").unwrap();
        let params = [("include_entities", "true"), ("status", DOC_STATUS)];
        let header = doc_credentials()
            .authorization_header("POST", &url, &params, DOC_NONCE, DOC_TIMESTAMP)
            .unwrap();

        assert!(header.contains(r#"oauth_signature="hCtSmYh%2BiHYCEqBWrE7C7hYmtUk%3D""#));
        assert!(header.contains(r#"oauth_timestamp="1318622958""#));
    }

    #[test]
    fn header_lists_oauth_fields_only() {
        let url = Url::parse("https://api.twitter.com/1.1/statuses/user_timeline.json").unwrap();
        let header = doc_credentials()
            .authorization_header("GET", &url, &[("count", "1")], "abc", 1)
            .unwrap();

        let re = Regex::new(r#"^OAuth (oauth_[a-z_]+="[^"]*"(, )?){7}$"#).unwrap();
        assert!(re.is_match(&header), "{header}");
        assert!(!header.contains("count"));
    }

    #[test]
    fn query_is_not_part_of_base_url() {
        let url = Url::parse("https://example.com/path?x=1#frag").unwrap();
        let base = signature_base_string("get", &url, &[], &[("x", "1")]);
        assert_eq!(base, "GET&https%3A%2F%2Fexample.com%2Fpath&x%3D1");
    }

    #[test]
    fn nonces_differ() {
        assert_ne!(nonce(), nonce());
        assert_eq!(nonce().len(), 32);
    }
}
