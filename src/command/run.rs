use anyhow::Result;

use crate::config::Config;
use crate::helpers::ThreadSleeper;
use crate::interfaces::http_api::get_ureq_agent;
use crate::poller::Poller;

use super::{aqicn_client, publisher};

/// Poll the station and tweet every new reading, until killed.
pub fn run() -> Result<()> {
    let config = Config::from_env()?;
    let agent = get_ureq_agent(config.http_timeout);

    let source = aqicn_client(&config.aqicn, agent.clone())?;
    log::info!("Watching station {}", source.feed_url());
    let publisher = publisher(config.twitter, agent);

    let mut poller = Poller::new(source, publisher, ThreadSleeper, config.polling);
    poller.run()?;
    Ok(())
}
