//! The budget model exchanged with the finance service.

use serde::{Deserialize, Serialize, Serializer};

use crate::{
    Error,
    calendar::{YearMonth, parse_iso_month},
    category::{Category, CategoryLabel},
};

/// A spending ceiling for one category in one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub category: CategoryLabel,
    /// The most that should be spent in dollars.
    pub amount: f64,
    /// The month exactly as the service sent it, see [Budget::parsed_month].
    pub month: String,
}

impl Budget {
    /// The month the budget applies to, or `None` if the service sent
    /// something that is neither `yyyy-MM` nor an ISO-8601 date.
    pub fn parsed_month(&self) -> Option<YearMonth> {
        parse_iso_month(&self.month)
    }
}

/// A budget to send to the finance service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewBudget {
    category: Category,
    amount: f64,
    #[serde(serialize_with = "serialize_month")]
    month: YearMonth,
}

// The service stores months as dates, so send the first day of the month.
fn serialize_month<S: Serializer>(month: &YearMonth, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&month.first_day())
}

impl NewBudget {
    /// # Errors
    /// Returns [Error::Validation] if `amount` is negative or not finite.
    pub fn new(category: Category, amount: f64, month: YearMonth) -> Result<Self, Error> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(Error::Validation(format!(
                "{amount} is not a valid budget, enter zero or a positive number"
            )));
        }

        Ok(Self {
            category,
            amount,
            month,
        })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn month(&self) -> YearMonth {
        self.month
    }
}
