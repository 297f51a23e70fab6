//! Dashboard module
//!
//! Shows the headline totals, the monthly and per-category expense charts and
//! the most recent transactions.

mod cards;
mod handlers;
mod tables;

pub use handlers::get_dashboard_page;
