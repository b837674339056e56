pub mod config;
pub mod logging;

pub mod discover;
pub mod process;
pub mod report;
pub mod strip;
