pub mod config;
pub mod logging;

pub mod download;
pub mod http;
pub mod media;
pub mod naming;
pub mod run;
