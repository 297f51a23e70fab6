//! Transaction and budget aggregation for the dashboard and budget pages.
//!
//! Every function here is pure: the same input always yields the same rows.
//! Records with dates that could not be parsed never cause an error, they are
//! left out of any grouping that needs the date.

use std::collections::HashMap;

use crate::{
    budget::Budget,
    calendar::YearMonth,
    category::{Category, CategoryLabel},
    transaction::Transaction,
};

/// Total expenses for one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyExpense {
    /// The month formatted as e.g. "Mar 2024".
    pub month: String,
    pub amount: f64,
}

/// Total expenses for one category across all time.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryExpense {
    pub category: CategoryLabel,
    pub amount: f64,
}

/// How the spending in a category compares to its budget for one month.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetVsActual {
    pub category: Category,
    /// The budgeted amount, zero if no budget was set.
    pub budget: f64,
    /// The sum of expenses in the month.
    pub actual: f64,
    /// `budget - actual`, negative when over budget.
    pub remaining: f64,
}

/// Headline figures for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub income: f64,
    pub expenses: f64,
    /// `income - expenses`.
    pub balance: f64,
}

/// Sums expenses by calendar month.
///
/// Months appear in the order they are first seen in `transactions`, not in
/// chronological order. Expenses with an unparseable date are skipped.
pub fn monthly_expenses(transactions: &[Transaction]) -> Vec<MonthlyExpense> {
    let mut index_by_month: HashMap<YearMonth, usize> = HashMap::new();
    let mut totals: Vec<(YearMonth, f64)> = Vec::new();

    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        let Some(date) = transaction.parsed_date() else {
            continue;
        };

        let month = YearMonth::from_date(date);

        match index_by_month.get(&month) {
            Some(&index) => totals[index].1 += transaction.amount,
            None => {
                index_by_month.insert(month, totals.len());
                totals.push((month, transaction.amount));
            }
        }
    }

    totals
        .into_iter()
        .map(|(month, amount)| MonthlyExpense {
            month: month.label(),
            amount,
        })
        .collect()
}

/// Sums expenses by category across all time.
///
/// Only categories with at least one expense appear, in [Category::ALL] order.
/// Labels outside the enumeration follow, each grouped under its own label in
/// the order they are first seen.
pub fn category_expenses(transactions: &[Transaction]) -> Vec<CategoryExpense> {
    let mut totals: HashMap<&CategoryLabel, f64> = HashMap::new();
    let mut unknown_labels: Vec<&CategoryLabel> = Vec::new();

    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        let label = &transaction.category;

        if label.known().is_none() && !totals.contains_key(label) {
            unknown_labels.push(label);
        }

        *totals.entry(label).or_insert(0.0) += transaction.amount;
    }

    Category::ALL
        .into_iter()
        .map(CategoryLabel::Known)
        .chain(unknown_labels.into_iter().cloned())
        .filter_map(|category| {
            totals
                .get(&category)
                .copied()
                .map(|amount| CategoryExpense { category, amount })
        })
        .collect()
}

/// Compares spending against budgets for `month`.
///
/// Returns exactly one row per category in [Category::ALL] order. Only
/// expenses dated within `month` (inclusive of the first and last day)
/// count towards `actual`. Records with a label outside the enumeration
/// match no row. If several budgets exist for the same category
/// and month, the one that comes last in `budgets` wins.
pub fn budget_vs_actual(
    transactions: &[Transaction],
    budgets: &[Budget],
    month: YearMonth,
) -> Vec<BudgetVsActual> {
    let expenses_in_month: Vec<&Transaction> = transactions
        .iter()
        .filter(|transaction| transaction.is_expense())
        .filter(|transaction| {
            transaction
                .parsed_date()
                .is_some_and(|date| month.contains(date))
        })
        .collect();

    Category::ALL
        .into_iter()
        .map(|category| {
            let budget = budgets
                .iter()
                .rev()
                .find(|budget| budget.category == category && budget.parsed_month() == Some(month))
                .map(|budget| budget.amount)
                .unwrap_or(0.0);

            let actual = expenses_in_month
                .iter()
                .filter(|transaction| transaction.category == category)
                .map(|transaction| transaction.amount)
                .sum();

            BudgetVsActual {
                category,
                budget,
                actual,
                remaining: budget - actual,
            }
        })
        .collect()
}

/// Total income, total expenses and their difference across all transactions.
pub fn totals(transactions: &[Transaction]) -> Totals {
    let (income, expenses) =
        transactions
            .iter()
            .fold((0.0, 0.0), |(income, expenses), transaction| {
                if transaction.is_expense() {
                    (income, expenses + transaction.amount)
                } else {
                    (income + transaction.amount, expenses)
                }
            });

    Totals {
        income,
        expenses,
        balance: income - expenses,
    }
}

/// The first `count` transactions in the order the service returned them.
pub fn recent_transactions(transactions: &[Transaction], count: usize) -> &[Transaction] {
    &transactions[..count.min(transactions.len())]
}
