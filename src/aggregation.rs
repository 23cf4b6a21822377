//! Transaction data aggregation for summary cards and charts.
//!
//! Pure functions that derive totals, a balance, a monthly income/expense
//! series and per-category expense totals from a transaction list snapshot.
//! Formatting for display (currency symbols, rounding, colors) is left to
//! the consumer.

use std::collections::HashMap;

use serde::Serialize;
use time::{Date, Month};

use crate::models::{Category, Transaction, TransactionKind, TransactionType};

/// The income and expense sums for one calendar month.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MonthlySummary {
    /// The month the sums cover, e.g. `"Jan 2024"`.
    pub month: String,
    /// Sum of the income amounts dated in the month.
    pub income: f64,
    /// Sum of the expense amounts dated in the month.
    pub expense: f64,
}

/// The total amount spent in one category.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// The spending category.
    pub category: Category,
    /// Sum of the expense amounts in the category.
    pub total: f64,
}

/// Sums the amounts of the transactions whose type matches.
///
/// Returns 0 for an empty list or when nothing matches.
pub fn total_for(transactions: &[Transaction], transaction_type: TransactionType) -> f64 {
    transactions
        .iter()
        .filter(|transaction| transaction.transaction_type() == transaction_type)
        .map(Transaction::amount)
        .sum()
}

/// The overall balance: total income minus total expenses.
pub fn balance(transactions: &[Transaction]) -> f64 {
    total_for(transactions, TransactionType::Income)
        - total_for(transactions, TransactionType::Expense)
}

/// Aggregates income and expense sums per calendar month.
///
/// Transactions dated anywhere within the same month and year merge into one
/// entry. Entries come back in chronological order regardless of the input
/// order. An empty input produces an empty vector.
pub fn group_by_month(transactions: &[Transaction]) -> Vec<MonthlySummary> {
    let mut totals: HashMap<Date, (f64, f64)> = HashMap::new();

    for transaction in transactions {
        let month = transaction.date().replace_day(1).unwrap();
        let (income, expense) = totals.entry(month).or_insert((0.0, 0.0));

        match transaction.transaction_type() {
            TransactionType::Income => *income += transaction.amount(),
            TransactionType::Expense => *expense += transaction.amount(),
        }
    }

    let mut months: Vec<Date> = totals.keys().copied().collect();
    months.sort();

    months
        .into_iter()
        .map(|month| {
            let (income, expense) = totals[&month];

            MonthlySummary {
                month: format_month_label(month),
                income,
                expense,
            }
        })
        .collect()
}

/// Aggregates expense totals per category, largest first.
///
/// Only expenses contribute; income records are ignored even when they carry
/// an informational category. Categories with equal totals keep the order
/// they were first encountered in, which is not a behavior callers should
/// rely on. No expenses produces an empty vector.
pub fn group_by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for transaction in transactions {
        let TransactionKind::Expense { category } = *transaction.kind() else {
            continue;
        };

        match totals.iter_mut().find(|entry| entry.category == category) {
            Some(entry) => entry.total += transaction.amount(),
            None => totals.push(CategoryTotal {
                category,
                total: transaction.amount(),
            }),
        }
    }

    totals.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    totals
}

/// Formats a month as a three-letter abbreviation followed by the year,
/// e.g. `"Jan 2024"`.
fn format_month_label(month: Date) -> String {
    let name = match month.month() {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    };

    format!("{name} {}", month.year())
}
