//! Defines the endpoint for updating an existing transaction.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{
    api::ApiClient,
    endpoints,
    transaction::{
        core::{TransactionFields, TransactionId},
        form::TransactionForm,
    },
};

/// A route handler for replacing the fields of a transaction, redirects to
/// the transactions view on success.
pub async fn edit_transaction_endpoint(
    State(api): State<ApiClient>,
    Path(transaction_id): Path<TransactionId>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let fields = match TransactionFields::try_from(form) {
        Ok(fields) => fields,
        Err(error) => {
            tracing::debug!("rejected update to transaction {transaction_id}: {error}");
            return error.into_alert_response();
        }
    };

    if let Err(error) = api.update_transaction(&transaction_id, &fields).await {
        tracing::error!("could not update transaction {transaction_id}: {error}");
        return error.into_alert_response();
    }

    tracing::info!("updated transaction {transaction_id}");

    (
        HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
