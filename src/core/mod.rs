pub mod access;
pub mod archive;
pub mod calculator;
pub mod clock;
pub mod config;
pub mod log;
pub mod records;
pub mod recorder;
pub mod register;
pub mod report;
pub mod status;
