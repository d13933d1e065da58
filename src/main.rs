use anyhow::{anyhow, Result};
use env_logger::Env;

use aqi_tweeter::command;
use aqi_tweeter::constants::{defaults, envvars};
use aqi_tweeter::helpers::load_dotenv;

const CMD_RUN: &str = "run";
const CMD_ONCE: &str = "once";
const CMD_SHOW: &str = "show";

fn main() -> Result<()> {
    load_dotenv();
    env_logger::Builder::from_env(Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL))
        .init();

    let mut args = pico_args::Arguments::from_env();
    let subcommand = args.subcommand()?;
    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(anyhow!("Unexpected arguments: {:?}", remaining));
    }

    match subcommand.as_deref() {
        None | Some(CMD_RUN) => command::run(),
        Some(CMD_ONCE) => command::once(),
        Some(CMD_SHOW) => command::show(),
        Some(other) => Err(anyhow!(
            "Unknown subcommand '{other}'; must be one of 'run', 'once', 'show'"
        )),
    }
}
