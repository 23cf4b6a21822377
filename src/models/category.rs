//! Defines the fixed set of spending categories that expenses are grouped by.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// A spending category, e.g. 'Housing', 'Food & Dining'.
///
/// The set of categories is fixed. Every expense belongs to exactly one
/// category; income records may carry one for information but it never
/// contributes to expense summaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Rent, mortgage and other housing costs.
    Housing,
    /// Fuel, fares and vehicle costs.
    Transportation,
    /// Groceries and eating out.
    Food,
    /// Power, water, internet and similar bills.
    Utilities,
    /// Medical costs and insurance.
    Healthcare,
    /// Leisure spending.
    Entertainment,
    /// General retail purchases.
    Shopping,
    /// Tuition, courses and study materials.
    Education,
    /// Money put aside.
    Savings,
    /// Anything that fits nowhere else.
    Other,
}

impl Category {
    /// Every category, in the order a form presents them.
    pub const ALL: [Category; 10] = [
        Category::Housing,
        Category::Transportation,
        Category::Food,
        Category::Utilities,
        Category::Healthcare,
        Category::Entertainment,
        Category::Shopping,
        Category::Education,
        Category::Savings,
        Category::Other,
    ];

    /// The human readable name of the category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Housing => "Housing",
            Category::Transportation => "Transportation",
            Category::Food => "Food & Dining",
            Category::Utilities => "Utilities",
            Category::Healthcare => "Healthcare",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Education => "Education",
            Category::Savings => "Savings",
            Category::Other => "Other",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Parse a category from its lowercase name as used in the persisted
    /// snapshot, e.g. `"food"`.
    ///
    /// # Errors
    /// This function will return an [Error::UnknownCategory] if `input` does
    /// not name a category.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "housing" => Ok(Category::Housing),
            "transportation" => Ok(Category::Transportation),
            "food" => Ok(Category::Food),
            "utilities" => Ok(Category::Utilities),
            "healthcare" => Ok(Category::Healthcare),
            "entertainment" => Ok(Category::Entertainment),
            "shopping" => Ok(Category::Shopping),
            "education" => Ok(Category::Education),
            "savings" => Ok(Category::Savings),
            "other" => Ok(Category::Other),
            _ => Err(Error::UnknownCategory(input.to_owned())),
        }
    }
}

#[cfg(test)]
mod category_tests {
    use super::Category;
    use crate::Error;

    #[test]
    fn every_category_parses_from_its_wire_name() {
        for category in Category::ALL {
            let wire_name = serde_json::to_string(&category).unwrap();
            let wire_name = wire_name.trim_matches('"');

            assert_eq!(wire_name.parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn parse_fails_on_unknown_name() {
        let result = "groceries".parse::<Category>();

        assert_eq!(result, Err(Error::UnknownCategory("groceries".to_owned())));
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("Food".parse::<Category>().is_err());
    }

    #[test]
    fn label_matches_display() {
        assert_eq!(Category::Food.label(), "Food & Dining");
        assert_eq!(Category::Food.to_string(), "Food & Dining");
    }

    #[test]
    fn serializes_as_lowercase_name() {
        let serialized = serde_json::to_string(&Category::Healthcare).unwrap();

        assert_eq!(serialized, "\"healthcare\"");
    }
}
