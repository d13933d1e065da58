use anyhow::Result;

use crate::config::{http_timeout_from_env, AqicnConfig};
use crate::interfaces::http_api::get_ureq_agent;
use crate::publish::compose_status;
use crate::readings::ReadingSource;

use super::aqicn_client;

/// Print the status that would be tweeted, without touching Twitter.
pub fn show() -> Result<()> {
    let config = AqicnConfig::from_env()?;
    let agent = get_ureq_agent(http_timeout_from_env()?);

    let reading = aqicn_client(&config, agent)?.fetch()?;
    log::debug!("Reading: {:?}", reading);
    println!("{}", compose_status(&reading));
    Ok(())
}
