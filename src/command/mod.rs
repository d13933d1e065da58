use anyhow::Result;

use crate::config::{AqicnConfig, TwitterConfig};
use crate::interfaces::aqicn::AqicnClient;
use crate::interfaces::twitter::TwitterClient;
use crate::publish::Publisher;

mod once;
mod run;
mod show;

pub use once::once;
pub use run::run;
pub use show::show;

fn aqicn_client(config: &AqicnConfig, agent: ureq::Agent) -> Result<AqicnClient> {
    Ok(AqicnClient::new(
        agent,
        &config.base_url,
        &config.station,
        &config.token,
    )?)
}

fn publisher(config: TwitterConfig, agent: ureq::Agent) -> Publisher<TwitterClient> {
    Publisher::new(
        TwitterClient::new(agent, config.base_url, config.credentials),
        config.place_id,
    )
}
