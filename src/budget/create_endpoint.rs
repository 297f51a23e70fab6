//! Defines the endpoint for setting a budget.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use serde::Deserialize;

use crate::{
    Error, api::ApiClient, budget::core::NewBudget, calendar::YearMonth, category::Category,
    endpoints,
};

/// The form data for setting a budget.
#[derive(Debug, Deserialize)]
pub struct BudgetForm {
    pub category: String,
    pub amount: String,
    /// The month as `yyyy-MM`.
    pub month: String,
}

impl TryFrom<BudgetForm> for NewBudget {
    type Error = Error;

    fn try_from(form: BudgetForm) -> Result<Self, Self::Error> {
        let category = form.category.parse::<Category>()?;
        let amount = form.amount.trim().parse::<f64>().map_err(|_| {
            Error::Validation(format!("\"{}\" is not a number", form.amount.trim()))
        })?;
        let month = form.month.parse::<YearMonth>()?;

        NewBudget::new(category, amount, month)
    }
}

/// A route handler for setting a budget, redirects to the budgets page for
/// the budget's month on success.
pub async fn create_budget_endpoint(
    State(api): State<ApiClient>,
    Form(form): Form<BudgetForm>,
) -> Response {
    let budget = match NewBudget::try_from(form) {
        Ok(budget) => budget,
        Err(error) => {
            tracing::debug!("rejected budget: {error}");
            return error.into_alert_response();
        }
    };

    if let Err(error) = api.create_budget(&budget).await {
        tracing::error!("could not set budget: {error}");
        return error.into_alert_response();
    }

    tracing::info!(
        "set {} budget for {} to {}",
        budget.category(),
        budget.month(),
        budget.amount()
    );

    (
        HxRedirect(endpoints::budgets_for_month(budget.month())),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
