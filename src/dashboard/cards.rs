//! Cards with the headline totals across all transactions.

use maud::{Markup, html};

use crate::{
    aggregation::Totals,
    html::{EXPENSE_STYLE, INCOME_STYLE, format_currency},
};

const CARD_STYLE: &str = "bg-white dark:bg-gray-800 border border-gray-200 \
    dark:border-gray-700 rounded-lg p-4 shadow-md";

/// Renders the balance, income and expense cards.
pub(super) fn totals_cards_view(totals: &Totals) -> Markup {
    let balance_style = if totals.balance < 0.0 {
        EXPENSE_STYLE
    } else {
        INCOME_STYLE
    };

    html! {
        section id="totals" class="w-full mx-auto mb-4"
        {
            div class="grid grid-cols-1 sm:grid-cols-3 gap-4"
            {
                (card("balance", "Balance", totals.balance, balance_style))
                (card("income", "Income", totals.income, INCOME_STYLE))
                (card("expenses", "Expenses", totals.expenses, EXPENSE_STYLE))
            }
        }
    }
}

fn card(id: &str, title: &str, amount: f64, amount_style: &str) -> Markup {
    html! {
        div id={ (id) "-card" } class=(CARD_STYLE)
        {
            h4 class="text-sm font-medium text-gray-600 dark:text-gray-400 mb-2" { (title) }

            div class={ "text-3xl font-bold " (amount_style) } { (format_currency(amount)) }
        }
    }
}
