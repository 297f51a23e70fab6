//! The transaction model exchanged with the finance service.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::Date;

use crate::{
    Error,
    calendar::parse_iso_date,
    category::{Category, CategoryLabel},
};

/// The ID the finance service assigned to a transaction.
pub type TransactionId = String;

/// Whether a transaction takes money out of or puts money into the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money spent.
    Expense,
    /// Money received.
    Income,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Expense => "expense",
            TransactionKind::Income => "income",
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "expense" => Ok(TransactionKind::Expense),
            "income" => Ok(TransactionKind::Income),
            other => Err(Error::Validation(format!(
                "\"{other}\" is not a transaction type, use expense or income"
            ))),
        }
    }
}

/// A transaction as stored by the finance service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "_id")]
    pub id: TransactionId,
    /// The value of the transaction in dollars, never negative.
    pub amount: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: CategoryLabel,
    /// The date exactly as the service sent it, see [Transaction::parsed_date].
    /// Empty if the service sent no date.
    #[serde(default, deserialize_with = "string_or_null")]
    pub date: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

fn string_or_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Transaction {
    /// The calendar date of the transaction, or `None` if the service sent
    /// something that is not an ISO-8601 date.
    pub fn parsed_date(&self) -> Option<Date> {
        parse_iso_date(&self.date)
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

/// The fields a user sets on a transaction.
///
/// This is the body sent to the finance service when creating or updating a
/// transaction. Construct it with [TransactionFields::new] so the amount and
/// description are checked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionFields {
    amount: f64,
    description: String,
    category: Category,
    #[serde(serialize_with = "serialize_date")]
    date: Date,
    #[serde(rename = "type")]
    kind: TransactionKind,
}

fn serialize_date<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(date)
}

impl TransactionFields {
    /// Check and bundle the fields of a transaction.
    ///
    /// # Errors
    /// Returns [Error::Validation] if `amount` is negative or not finite, or if
    /// `description` is blank.
    pub fn new(
        amount: f64,
        description: &str,
        category: Category,
        date: Date,
        kind: TransactionKind,
    ) -> Result<Self, Error> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(Error::Validation(format!(
                "{amount} is not a valid amount, enter zero or a positive number"
            )));
        }

        let description = description.trim();

        if description.is_empty() {
            return Err(Error::Validation("Description cannot be empty".to_owned()));
        }

        Ok(Self {
            amount,
            description: description.to_owned(),
            category,
            date,
            kind,
        })
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }
}
