pub mod archive;
pub mod clock;
pub mod config;
pub mod db;
pub mod events;
pub mod hours;
pub mod init;
pub mod log;
pub mod rating;
pub mod redemption;
pub mod register;
pub mod status;
pub mod users;

use crate::cli::parser::Cli;
use crate::core::clock::{Clock, FixedClock, SystemClock};
use crate::errors::AppResult;
use crate::utils::time::parse_timestamp;

/// Wall clock for this invocation: `--now` pins it, otherwise local time.
pub fn clock_for(cli: &Cli) -> AppResult<Box<dyn Clock>> {
    match &cli.now {
        Some(s) => Ok(Box::new(FixedClock(parse_timestamp(s)?))),
        None => Ok(Box::new(SystemClock)),
    }
}
