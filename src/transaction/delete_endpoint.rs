use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{api::ApiClient, endpoints, transaction::core::TransactionId};

/// A route handler for deleting a transaction, redirects to the transactions
/// view so the list is fetched again.
pub async fn delete_transaction_endpoint(
    State(api): State<ApiClient>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    if let Err(error) = api.delete_transaction(&transaction_id).await {
        tracing::error!("could not delete transaction {transaction_id}: {error}");
        return error.into_alert_response();
    }

    tracing::info!("deleted transaction {transaction_id}");

    (
        HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
