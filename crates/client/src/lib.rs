//! Read-only client for the YNAB API.
//!
//! Wraps the v1 REST endpoints for budgets, accounts, categories, payees,
//! transactions, months, and scheduled transactions. Domain data is passed
//! through as opaque JSON; this crate never reinterprets upstream payloads.

pub mod client;
pub mod config;
pub mod error;

pub use client::YnabClient;
pub use config::{Config, DEFAULT_BASE_URL};
pub use error::{YnabError, YnabResult};
