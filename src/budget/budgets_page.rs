//! The page for setting budgets and comparing them with spending for a month.

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Error,
    aggregation::{BudgetVsActual, budget_vs_actual},
    api::ApiClient,
    calendar::YearMonth,
    category::Category,
    charts::{DashboardChart, budget_vs_actual_chart, charts_script, charts_view},
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, ECHARTS_SCRIPT, EXPENSE_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, HeadElement, INCOME_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, TABLE_STYLE, base, dollar_input_styles,
        format_currency, loading_spinner,
    },
    navigation::NavBar,
    timezone::local_today,
    transaction::category_select,
};

/// The state needed for the budgets page.
#[derive(Debug, Clone)]
pub struct BudgetsPageState {
    pub api: ApiClient,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for BudgetsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The query parameters for the budgets page.
#[derive(Debug, Default, Deserialize)]
pub struct BudgetsQuery {
    /// The month to show as `yyyy-MM`, the current month if absent or blank.
    pub month: Option<String>,
}

/// Route handler for the budgets page.
pub async fn get_budgets_page(
    State(state): State<BudgetsPageState>,
    Query(query): Query<BudgetsQuery>,
) -> Result<Response, Error> {
    let month = match query.month.as_deref().map(str::trim) {
        Some(month) if !month.is_empty() => month
            .parse::<YearMonth>()
            .inspect_err(|error| tracing::debug!("rejected budgets month: {error}"))?,
        _ => YearMonth::from_date(local_today(&state.local_timezone)?),
    };

    let (transactions, budgets) =
        tokio::try_join!(state.api.list_transactions(), state.api.list_budgets())
            .inspect_err(|error| tracing::error!("could not load budgets page data: {error}"))?;

    let rows = budget_vs_actual(&transactions, &budgets, month);

    Ok(budgets_view(month, &rows).into_response())
}

fn budgets_view(month: YearMonth, rows: &[BudgetVsActual]) -> Markup {
    let nav_bar = NavBar::new(endpoints::BUDGETS_VIEW).into_html();
    let charts = [DashboardChart {
        id: "budget-vs-actual-chart",
        options: budget_vs_actual_chart(rows).to_string(),
    }];

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-5xl space-y-6"
            {
                div class="flex justify-between flex-wrap items-end gap-4"
                {
                    h1 class="text-xl font-bold" { "Budgets for " (month.label()) }

                    (month_selector(month))
                }

                (set_budget_form(month))

                (charts_view(&charts))

                (summary_table(rows))
            }
        }
    );

    let head_elements = [
        HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned()),
        charts_script(&charts),
        dollar_input_styles(),
    ];

    base("Budgets", &head_elements, &content)
}

fn month_selector(month: YearMonth) -> Markup {
    html!(
        form
            id="month-selector"
            method="get"
            action=(endpoints::BUDGETS_VIEW)
            class="flex items-end gap-2"
        {
            div
            {
                label for="selected-month" class=(FORM_LABEL_STYLE) { "Month" }

                input
                    name="month"
                    id="selected-month"
                    type="month"
                    value=(month)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class="px-4 py-2.5 bg-blue-500 hover:bg-blue-600 text-white rounded"
            {
                "Show"
            }
        }
    )
}

fn set_budget_form(month: YearMonth) -> Markup {
    let spinner = loading_spinner();

    html!(
        form
            id="set-budget"
            hx-post=(endpoints::BUDGETS_API)
            hx-target-error="#alert-container"
            class="grid grid-cols-1 md:grid-cols-4 gap-4 items-end"
        {
            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                (category_select(Some(Category::Food)))
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Budget" }

                div class="input-wrapper w-full"
                {
                    input
                        name="amount"
                        id="amount"
                        type="number"
                        step="0.01"
                        min="0"
                        placeholder="0.00"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div
            {
                label for="budget-month" class=(FORM_LABEL_STYLE) { "Month" }

                input
                    name="month"
                    id="budget-month"
                    type="month"
                    value=(month)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE)
            {
                span id="indicator" class="inline htmx-indicator" { (spinner) }
                " Set Budget"
            }
        }
    )
}

fn summary_table(rows: &[BudgetVsActual]) -> Markup {
    let total_budget: f64 = rows.iter().map(|row| row.budget).sum();
    let total_actual: f64 = rows.iter().map(|row| row.actual).sum();

    html!(
        div class="overflow-x-auto dark:bg-gray-800"
        {
            table id="budget-summary" class=(TABLE_STYLE)
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class="px-6 py-4 text-right" { "Budget" }
                        th scope="col" class="px-6 py-4 text-right" { "Actual" }
                        th scope="col" class="px-6 py-4 text-right" { "Remaining" }
                    }
                }

                tbody
                {
                    @for row in rows {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            td class=(TABLE_CELL_STYLE) { (row.category) }
                            td class="px-6 py-4 text-right" { (format_currency(row.budget)) }
                            td class="px-6 py-4 text-right" { (format_currency(row.actual)) }
                            (remaining_cell(row.remaining))
                        }
                    }
                }

                tfoot class="font-semibold text-gray-900 dark:text-white"
                {
                    tr
                    {
                        th scope="row" class=(TABLE_CELL_STYLE) { "Total" }
                        td class="px-6 py-4 text-right" { (format_currency(total_budget)) }
                        td class="px-6 py-4 text-right" { (format_currency(total_actual)) }
                        (remaining_cell(total_budget - total_actual))
                    }
                }
            }
        }
    )
}

fn remaining_cell(remaining: f64) -> Markup {
    let style = if remaining < 0.0 {
        EXPENSE_STYLE
    } else {
        INCOME_STYLE
    };

    html!(
        td class={ "px-6 py-4 text-right " (style) } { (format_currency(remaining)) }
    )
}
