//! Monthly budgets per category: the model exchanged with the finance service,
//! the budgets page and the endpoint for setting a budget.

mod budgets_page;
mod core;
mod create_endpoint;

pub use budgets_page::get_budgets_page;
pub use core::{Budget, NewBudget};
pub use create_endpoint::create_budget_endpoint;
