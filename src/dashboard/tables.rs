//! The table of the most recent transactions on the dashboard.

use maud::{Markup, html};

use crate::{
    calendar::format_long_date,
    endpoints,
    html::{LINK_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, TABLE_STYLE},
    transaction::{Transaction, amount_cell},
};

pub(super) fn recent_transactions_table(transactions: &[Transaction]) -> Markup {
    html! {
        section id="recent-transactions" class="w-full mx-auto mb-4"
        {
            div class="flex justify-between items-baseline mb-4"
            {
                h3 class="text-xl font-semibold" { "Recent Transactions" }

                a href=(endpoints::TRANSACTIONS_VIEW) class=(LINK_STYLE) { "View all" }
            }

            div class="overflow-x-auto rounded-lg shadow"
            {
                table class=(TABLE_STYLE)
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class="px-6 py-4 text-right" { "Amount" }
                        }
                    }

                    tbody
                    {
                        @for transaction in transactions {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td class=(TABLE_CELL_STYLE)
                                {
                                    @match transaction.parsed_date() {
                                        Some(date) => { (format_long_date(date)) }
                                        None => { (transaction.date) }
                                    }
                                }
                                td class=(TABLE_CELL_STYLE) { (transaction.description) }
                                td class=(TABLE_CELL_STYLE) { (transaction.category) }
                                (amount_cell(transaction))
                            }
                        }
                    }
                }
            }
        }
    }
}
