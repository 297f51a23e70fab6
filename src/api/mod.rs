//! The HTTP client for the remote finance service that stores transactions
//! and budgets.

mod client;

pub use client::ApiClient;
