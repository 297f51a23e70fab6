//! Transactions: the model exchanged with the finance service, the pages for
//! listing, creating and editing them, and the endpoints behind those pages.

mod core;
mod create_endpoint;
mod create_page;
mod delete_endpoint;
mod edit_endpoint;
mod edit_page;
mod form;
mod transactions_page;

pub use core::{Transaction, TransactionFields, TransactionKind};
pub use create_endpoint::create_transaction_endpoint;
pub use create_page::get_new_transaction_page;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use edit_page::get_edit_transaction_page;
pub use form::category_select;
pub use transactions_page::{amount_cell, get_transactions_page};
