//! Tracing setup shared by native hosts and the browser build

pub mod config;
pub mod init;

pub use config::InstrumentationConfig;
pub use init::{init_default, init_dev, init_tracing};
