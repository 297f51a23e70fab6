//! HTTP handler for the dashboard page.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    aggregation::{Totals, category_expenses, monthly_expenses, recent_transactions, totals},
    api::ApiClient,
    charts::{
        DashboardChart, category_expenses_chart, charts_script, charts_view,
        monthly_expenses_chart,
    },
    dashboard::{cards::totals_cards_view, tables::recent_transactions_table},
    endpoints,
    html::{ECHARTS_SCRIPT, HeadElement, base, link},
    navigation::NavBar,
    transaction::Transaction,
};

const RECENT_TRANSACTION_COUNT: usize = 5;

/// Display a page with an overview of the user's transactions.
pub async fn get_dashboard_page(State(api): State<ApiClient>) -> Result<Response, Error> {
    let transactions = api
        .list_transactions()
        .await
        .inspect_err(|error| tracing::error!("could not load dashboard data: {error}"))?;

    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW);

    if transactions.is_empty() {
        return Ok(dashboard_no_data_view(nav_bar).into_response());
    }

    let charts = [
        DashboardChart {
            id: "monthly-expenses-chart",
            options: monthly_expenses_chart(&monthly_expenses(&transactions)).to_string(),
        },
        DashboardChart {
            id: "category-expenses-chart",
            options: category_expenses_chart(&category_expenses(&transactions)).to_string(),
        },
    ];

    Ok(dashboard_view(
        nav_bar,
        &totals(&transactions),
        &charts,
        recent_transactions(&transactions, RECENT_TRANSACTION_COUNT),
    )
    .into_response())
}

fn dashboard_no_data_view(nav_bar: NavBar) -> Markup {
    let nav_bar = nav_bar.into_html();
    let new_transaction_link = link(endpoints::NEW_TRANSACTION_VIEW, "adding one");

    let content = html!(
        (nav_bar)

        div class="flex flex-col items-center px-6 py-8 mx-auto text-gray-900 dark:text-white"
        {
            h2 class="text-xl font-bold" { "Nothing here yet..." }

            p
            {
                "Totals and charts will show up here once you have some transactions.
                Get started by " (new_transaction_link) "."
            }
        }
    );

    base("Dashboard", &[], &content)
}

fn dashboard_view(
    nav_bar: NavBar<'_>,
    totals: &Totals,
    charts: &[DashboardChart],
    recent: &[Transaction],
) -> Markup {
    let nav_bar = nav_bar.into_html();

    let content = html!(
        (nav_bar)

        div
            id="dashboard-content"
            class="flex flex-col items-center px-2 lg:px-6 lg:py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            (totals_cards_view(totals))
            (charts_view(charts))
            (recent_transactions_table(recent))
        }
    );

    let scripts = [
        HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned()),
        charts_script(charts),
    ];

    base("Dashboard", &scripts, &content)
}
