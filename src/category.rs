//! The fixed set of labels used to classify transactions and budgets.
//!
//! The aggregation, the input forms and the wire format all read the
//! enumeration from here, so adding a category is a one-line change.
//! Records fetched from the finance service carry a [CategoryLabel], which
//! keeps labels outside the enumeration as they were written.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// A transaction or budget category.
///
/// The declaration order is the display order used by every table and chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "&'static str")]
pub enum Category {
    /// Groceries, restaurants.
    Food,
    /// Fuel, fares, parking.
    Transportation,
    /// Rent or mortgage.
    Housing,
    /// Power, water, internet.
    Utilities,
    /// Going out, subscriptions.
    Entertainment,
    /// Clothes, household goods.
    Shopping,
    /// Doctor, pharmacy.
    Healthcare,
    /// Anything else.
    Other,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Transportation,
        Category::Housing,
        Category::Utilities,
        Category::Entertainment,
        Category::Shopping,
        Category::Healthcare,
        Category::Other,
    ];

    /// The label used on the wire and in the UI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transportation => "Transportation",
            Category::Housing => "Housing",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Healthcare => "Healthcare",
            Category::Other => "Other",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Parse user input. Unlike [CategoryLabel], unknown labels are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| Error::Validation(format!("\"{s}\" is not a valid category")))
    }
}

impl From<Category> for &'static str {
    fn from(value: Category) -> Self {
        value.as_str()
    }
}

/// The category of a record as stored by the finance service.
///
/// Other clients of the service may store labels outside [Category]. Those
/// are kept verbatim so they never count towards a known category and are
/// written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryLabel {
    Known(Category),
    Unknown(String),
}

impl CategoryLabel {
    pub fn as_str(&self) -> &str {
        match self {
            CategoryLabel::Known(category) => category.as_str(),
            CategoryLabel::Unknown(label) => label,
        }
    }

    /// The category, or `None` if the label is outside the enumeration.
    pub fn known(&self) -> Option<Category> {
        match self {
            CategoryLabel::Known(category) => Some(*category),
            CategoryLabel::Unknown(_) => None,
        }
    }
}

// A record without a category belongs to none of them.
impl Default for CategoryLabel {
    fn default() -> Self {
        CategoryLabel::Unknown(String::new())
    }
}

impl Display for CategoryLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Category> for CategoryLabel {
    fn from(value: Category) -> Self {
        CategoryLabel::Known(value)
    }
}

impl From<String> for CategoryLabel {
    fn from(value: String) -> Self {
        match value.parse::<Category>() {
            Ok(category) => CategoryLabel::Known(category),
            Err(_) => {
                tracing::warn!("unknown category \"{value}\" from the finance service");
                CategoryLabel::Unknown(value)
            }
        }
    }
}

impl From<CategoryLabel> for String {
    fn from(value: CategoryLabel) -> Self {
        match value {
            CategoryLabel::Known(category) => category.as_str().to_owned(),
            CategoryLabel::Unknown(label) => label,
        }
    }
}

impl PartialEq<Category> for CategoryLabel {
    fn eq(&self, other: &Category) -> bool {
        self.known() == Some(*other)
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, CategoryLabel};
    use crate::Error;

    #[test]
    fn parses_every_label() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn rejects_unknown_label_from_user_input() {
        let result = "Groceries".parse::<Category>();

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn decodes_known_label_from_service() {
        let label: CategoryLabel = serde_json::from_str("\"Food\"").unwrap();

        assert_eq!(label, CategoryLabel::Known(Category::Food));
        assert_eq!(label, Category::Food);
    }

    #[test]
    fn keeps_unknown_label_from_service() {
        let label: CategoryLabel = serde_json::from_str("\"Pets\"").unwrap();

        assert_eq!(label, CategoryLabel::Unknown("Pets".to_owned()));
        assert_ne!(label, Category::Other);
        assert_eq!(label.known(), None);
        assert_eq!(serde_json::to_string(&label).unwrap(), "\"Pets\"");
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&Category::Healthcare).unwrap();

        assert_eq!(json, "\"Healthcare\"");
    }

    #[test]
    fn all_is_in_display_order() {
        let mut sorted = Category::ALL;
        sorted.sort();

        assert_eq!(sorted, Category::ALL);
    }
}
