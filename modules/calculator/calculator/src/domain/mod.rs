//! Domain layer for calculator module
//!
//! Contains the arithmetic evaluation logic.

pub mod service;

pub use service::Service;
