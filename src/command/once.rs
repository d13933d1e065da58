use anyhow::Result;

use crate::config::Config;
use crate::interfaces::http_api::get_ureq_agent;
use crate::readings::ReadingSource;

use super::{aqicn_client, publisher};

/// Fetch the current reading and tweet it unless it repeats the last tweet.
pub fn once() -> Result<()> {
    let config = Config::from_env()?;
    let agent = get_ureq_agent(config.http_timeout);

    let reading = aqicn_client(&config.aqicn, agent.clone())?.fetch()?;
    let outcome = publisher(config.twitter, agent).publish(&reading)?;
    log::info!("Finished: {:?}", outcome);
    Ok(())
}
