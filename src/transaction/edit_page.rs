//! Defines the route handler for the page for editing an existing transaction.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::Date;

use crate::{
    Error,
    api::ApiClient,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, LINK_STYLE, base, dollar_input_styles,
        loading_spinner,
    },
    navigation::NavBar,
    transaction::{
        core::{Transaction, TransactionId},
        form::{TransactionFormDefaults, transaction_form_fields},
    },
};

/// Renders the page for editing a transaction.
///
/// Responds with the 404 page if the finance service does not have a
/// transaction with the ID in the path.
pub async fn get_edit_transaction_page(
    State(api): State<ApiClient>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Response, Error> {
    let transaction = api
        .get_transaction(&transaction_id)
        .await
        .inspect_err(|error| {
            tracing::error!("could not get transaction {transaction_id}: {error}")
        })?;

    let Some(date) = transaction.parsed_date() else {
        tracing::error!(
            "transaction {transaction_id} has the unrecognised date \"{}\"",
            transaction.date
        );
        return Err(Error::Parse(format!(
            "transaction {transaction_id} has an invalid date"
        )));
    };

    Ok(edit_transaction_view(&transaction, date).into_response())
}

fn edit_transaction_view(transaction: &Transaction, date: Date) -> Markup {
    let nav_bar = NavBar::new(endpoints::EDIT_TRANSACTION_VIEW).into_html();
    let update_route = format_endpoint(endpoints::TRANSACTION, &transaction.id);
    let spinner = loading_spinner();
    let defaults = TransactionFormDefaults {
        kind: transaction.kind,
        amount: Some(transaction.amount),
        date,
        description: Some(transaction.description.as_str()),
        category: transaction.category.known(),
    };

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            form
                hx-put=(update_route)
                hx-target-error="#alert-container"
                class="w-full space-y-4 md:space-y-6"
            {
                h2 class="text-xl font-bold" { "Edit Transaction" }

                (transaction_form_fields(&defaults))

                button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
                {
                    span id="indicator" class="inline htmx-indicator" { (spinner) }
                    " Update Transaction"
                }

                p class="text-sm text-center"
                {
                    a href=(endpoints::TRANSACTIONS_VIEW) class=(LINK_STYLE) { "Cancel" }
                }
            }
        }
    };

    base("Edit Transaction", &[dollar_input_styles()], &content)
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };

    use super::get_edit_transaction_page;
    use crate::{
        Error,
        category::Category,
        test_utils::{
            FakeFinanceService, assert_checked_radio, assert_form_input_with_value,
            assert_form_select, assert_form_submit_button, assert_hx_endpoint, assert_status,
            assert_valid_html, must_get_form, parse_html_document, transaction_record,
        },
    };

    #[tokio::test]
    async fn form_is_prefilled_with_transaction() {
        let service = FakeFinanceService::with_records(
            vec![transaction_record(
                "65f1c0a2",
                42.5,
                "Utilities",
                "2024-03-05T00:00:00.000Z",
                "expense",
            )],
            vec![],
        )
        .await;

        let response =
            get_edit_transaction_page(State(service.client()), Path("65f1c0a2".to_owned()))
                .await
                .unwrap();

        assert_status(&response, StatusCode::OK);
        let document = parse_html_document(response).await;
        assert_valid_html(&document);
        let form = must_get_form(&document);
        assert_hx_endpoint(&form, "/api/transactions/65f1c0a2", "hx-put");
        assert_checked_radio(&form, "type", "expense");
        assert_form_input_with_value(&form, "amount", "number", "42.50");
        assert_form_input_with_value(&form, "date", "date", "2024-03-05");
        assert_form_input_with_value(&form, "description", "text", "Utilities expense");
        assert_form_select(
            &form,
            "category",
            &Category::ALL.map(|category| category.as_str()),
            "Utilities",
        );
        assert_form_submit_button(&form, "Update Transaction");
    }

    #[tokio::test]
    async fn unknown_category_is_not_preselected() {
        let service = FakeFinanceService::with_records(
            vec![transaction_record("p1", 40.0, "Pets", "2024-03-05", "expense")],
            vec![],
        )
        .await;

        let response = get_edit_transaction_page(State(service.client()), Path("p1".to_owned()))
            .await
            .unwrap();

        let document = parse_html_document(response).await;
        assert_valid_html(&document);
        let form = must_get_form(&document);
        let mut options = vec![""];
        options.extend(Category::ALL.map(|category| category.as_str()));
        assert_form_select(&form, "category", &options, "");
    }

    #[tokio::test]
    async fn unknown_transaction_is_not_found() {
        let service = FakeFinanceService::start().await;

        let result =
            get_edit_transaction_page(State(service.client()), Path("missing".to_owned())).await;

        assert!(matches!(result, Err(Error::NotFound)), "got {result:?}");
    }
}
