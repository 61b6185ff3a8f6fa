pub mod archive;
pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod queries;
pub mod records;
pub mod stats;
pub mod users;
