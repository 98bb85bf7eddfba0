//! HTTP host for the calculator module: configuration, logging, routing and
//! graceful shutdown. The `calculator-server` binary is a thin CLI over this crate.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![forbid(unsafe_code)]

pub mod config;
pub mod logging;
pub mod server;
pub mod shutdown;
pub mod web;

pub use config::AppConfig;
