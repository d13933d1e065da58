pub mod command;
pub mod config;
pub mod constants;
pub mod helpers;
pub mod interfaces;
pub mod poller;
pub mod publish;
pub mod readings;
