use std::time::Duration;

use ureq::tls::{RootCerts, TlsConfig, TlsProvider};
use url::Url;

/// Build a blocking agent that hands non-2xx responses back to the caller
/// instead of turning them into errors, so the body can be logged.
pub fn get_ureq_agent(timeout: Duration) -> ureq::Agent {
    let config = ureq::Agent::config_builder()
        .timeout_global(Some(timeout))
        .http_status_as_error(false)
        .tls_config(
            TlsConfig::builder()
                .provider(TlsProvider::NativeTls)
                .root_certs(RootCerts::PlatformVerifier)
                .build(),
        )
        .build();
    ureq::Agent::new_with_config(config)
}

/// Parse a base URL, making sure it ends in a slash so that `Url::join`
/// appends to it rather than replacing the last path segment.
pub fn parse_base_url(base: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(base)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
