//! Calculator Module
//!
//! Stateless arithmetic evaluation exposed over REST.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Core arithmetic logic
//! - `client.rs` - `CalculatorClientV1` implementation over the domain service
//! - `api/rest/` - DTOs, handlers, routes, problem mapping and OpenAPI document
//! - `module.rs` - Module wiring: builds the service and registers routes
//!
//! External consumers should depend on `calculator-sdk` and receive an
//! `Arc<dyn CalculatorClientV1>` from [`CalculatorModule::client`].
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// === MODULE DEFINITION ===
mod module;
pub use module::CalculatorModule;

// === PUBLIC EXPORTS ===
pub mod client;
pub use client::LocalCalculatorClient;
pub mod domain;
pub use domain::Service;

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod api;
