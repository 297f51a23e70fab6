//! The form shared by the new and edit transaction pages, and the parsing of
//! what it submits.

use maud::{Markup, html};
use serde::Deserialize;
use time::{Date, macros::format_description};

use crate::{
    Error,
    category::Category,
    html::{
        FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE, FORM_RADIO_INPUT_STYLE, FORM_RADIO_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE,
    },
    transaction::core::{TransactionFields, TransactionKind},
};

/// The form data for creating or updating a transaction.
///
/// Every field is kept as text so that bad input is reported as an alert
/// instead of being rejected by the extractor with a bare 422.
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub date: String,
}

impl TryFrom<TransactionForm> for TransactionFields {
    type Error = Error;

    fn try_from(form: TransactionForm) -> Result<Self, Self::Error> {
        let kind = form.kind.parse::<TransactionKind>()?;
        let amount = form.amount.trim().parse::<f64>().map_err(|_| {
            Error::Validation(format!("\"{}\" is not a number", form.amount.trim()))
        })?;
        let category = form.category.parse::<Category>()?;
        let date = Date::parse(form.date.trim(), format_description!("[year]-[month]-[day]"))
            .map_err(|_| {
                Error::Validation(format!("\"{}\" is not a date in the format YYYY-MM-DD", form.date))
            })?;

        TransactionFields::new(amount, &form.description, category, date, kind)
    }
}

/// The values the form fields start with.
pub struct TransactionFormDefaults<'a> {
    pub kind: TransactionKind,
    pub amount: Option<f64>,
    pub date: Date,
    pub description: Option<&'a str>,
    /// `None` when the stored label is outside the enumeration, so the user
    /// has to pick one.
    pub category: Option<Category>,
}

impl TransactionFormDefaults<'_> {
    /// An empty expense dated `today`.
    pub fn blank(today: Date) -> Self {
        Self {
            kind: TransactionKind::Expense,
            amount: None,
            date: today,
            description: None,
            category: Some(Category::Food),
        }
    }
}

pub fn transaction_form_fields(defaults: &TransactionFormDefaults<'_>) -> Markup {
    let amount_str = defaults.amount.map(|amount| format!("{amount:.2}"));

    let kind_radio = |kind: TransactionKind, label: &str| {
        let id = format!("transaction-type-{kind}");

        html! {
            div class="flex items-center gap-3"
            {
                input
                    name="type"
                    id=(id)
                    type="radio"
                    value=(kind)
                    checked[defaults.kind == kind]
                    required
                    class=(FORM_RADIO_INPUT_STYLE);

                label for=(id) class=(FORM_RADIO_LABEL_STYLE) { (label) }
            }
        }
    };

    html! {
        fieldset class="space-y-2"
        {
            legend class=(FORM_LABEL_STYLE) { "Transaction type" }

            div class=(FORM_RADIO_GROUP_STYLE)
            {
                (kind_radio(TransactionKind::Expense, "Expense"))
                (kind_radio(TransactionKind::Income, "Income"))
            }
        }

        div
        {
            label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

            // w-full needed to ensure input takes the full width when prefilled with a value
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
                    autofocus
                    value=[amount_str.as_deref()]
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }

        div
        {
            label for="date" class=(FORM_LABEL_STYLE) { "Date" }

            input
                name="date"
                id="date"
                type="date"
                value=(defaults.date)
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label for="description" class=(FORM_LABEL_STYLE) { "Description" }

            input
                name="description"
                id="description"
                type="text"
                placeholder="Description"
                value=[defaults.description]
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label for="category" class=(FORM_LABEL_STYLE) { "Category" }

            (category_select(defaults.category))
        }
    }
}

/// A select offering every category with `selected` chosen.
///
/// Without a selection a disabled placeholder is shown, which `required`
/// stops the browser from submitting.
pub fn category_select(selected: Option<Category>) -> Markup {
    html! {
        select
            name="category"
            id="category"
            required
            class=(FORM_TEXT_INPUT_STYLE)
        {
            @if selected.is_none() {
                option value="" disabled selected { "Choose a category" }
            }

            @for category in Category::ALL {
                option value=(category) selected[Some(category) == selected] { (category) }
            }
        }
    }
}
