//! Chart generation and rendering for the dashboard and budget pages.
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with a matching HTML container and JavaScript initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger},
    series::{Pie, bar},
};
use maud::{Markup, PreEscaped, html};

use crate::{
    aggregation::{BudgetVsActual, CategoryExpense, MonthlyExpense},
    html::HeadElement,
};

/// A chart with its HTML container ID and ECharts configuration.
pub struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML containers for `charts`, two per row on wide screens.
pub fn charts_view(charts: &[DashboardChart]) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            div class="grid grid-cols-1 xl:grid-cols-2 gap-4"
            {
                @for chart in charts {
                    div
                        id=(chart.id)
                        class="min-h-[380px] rounded dark:bg-gray-100"
                    {}
                }
            }
        }
    )
}

/// Generates JavaScript initialization code for `charts`.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
pub fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

/// A bar per month in the order the months were first seen.
pub fn monthly_expenses_chart(monthly_expenses: &[MonthlyExpense]) -> Chart {
    let labels: Vec<String> = monthly_expenses.iter().map(|row| row.month.clone()).collect();
    let values: Vec<f64> = monthly_expenses.iter().map(|row| row.amount).collect();

    Chart::new()
        .title(Title::new().text("Monthly Expenses"))
        .tooltip(currency_tooltip())
        .grid(default_grid())
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(bar::Bar::new().name("Expenses").data(values))
}

/// A pie slice per category that has expenses.
pub fn category_expenses_chart(category_expenses: &[CategoryExpense]) -> Chart {
    let slices: Vec<(f64, &str)> = category_expenses
        .iter()
        .map(|row| (row.amount, row.category.as_str()))
        .collect();

    Chart::new()
        .title(Title::new().text("Expenses by Category"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .legend(Legend::new().bottom("0%"))
        .series(
            Pie::new()
                .name("Expenses")
                .radius(vec!["35%", "65%"])
                .data(slices),
        )
}

/// Side-by-side budget and actual bars for every category.
pub fn budget_vs_actual_chart(rows: &[BudgetVsActual]) -> Chart {
    let labels: Vec<&str> = rows.iter().map(|row| row.category.as_str()).collect();
    let budgets: Vec<f64> = rows.iter().map(|row| row.budget).collect();
    let actuals: Vec<f64> = rows.iter().map(|row| row.actual).collect();

    Chart::new()
        .title(Title::new().text("Budget vs Actual"))
        .tooltip(currency_tooltip())
        .legend(Legend::new().top("1%"))
        .grid(default_grid().top(60))
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(bar::Bar::new().name("Budget").data(budgets))
        .series(bar::Bar::new().name("Actual").data(actuals))
}

fn default_grid() -> Grid {
    Grid::new()
        .left("3%")
        .right("4%")
        .bottom("3%")
        .contain_label(true)
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}

#[cfg(test)]
mod tests {
    use super::{
        DashboardChart, budget_vs_actual_chart, category_expenses_chart, charts_script,
        charts_view, monthly_expenses_chart,
    };
    use crate::{
        aggregation::{BudgetVsActual, CategoryExpense, MonthlyExpense},
        category::{Category, CategoryLabel},
        html::HeadElement,
    };

    #[test]
    fn monthly_chart_keeps_month_order() {
        let rows = [
            MonthlyExpense {
                month: "Mar 2024".to_owned(),
                amount: 80.0,
            },
            MonthlyExpense {
                month: "Jan 2024".to_owned(),
                amount: 5.5,
            },
        ];

        let options = monthly_expenses_chart(&rows).to_string();

        let march = options.find("Mar 2024").expect("want Mar 2024 label");
        let january = options.find("Jan 2024").expect("want Jan 2024 label");
        assert!(march < january, "want months in first-seen order");
    }

    #[test]
    fn category_chart_has_a_slice_per_row() {
        let rows = [
            CategoryExpense {
                category: Category::Food.into(),
                amount: 12.5,
            },
            CategoryExpense {
                category: Category::Healthcare.into(),
                amount: 40.0,
            },
            CategoryExpense {
                category: CategoryLabel::Unknown("Pets".to_owned()),
                amount: 9.0,
            },
        ];

        let options = category_expenses_chart(&rows).to_string();

        assert!(options.contains("\"pie\""), "want a pie series");
        assert!(options.contains("\"Food\""));
        assert!(options.contains("\"Healthcare\""));
        assert!(options.contains("\"Pets\""));
        assert!(!options.contains("\"Housing\""), "want no slice without expenses");
    }

    #[test]
    fn budget_chart_has_budget_and_actual_series() {
        let rows: Vec<_> = Category::ALL
            .into_iter()
            .map(|category| BudgetVsActual {
                category,
                budget: 100.0,
                actual: 25.0,
                remaining: 75.0,
            })
            .collect();

        let options = budget_vs_actual_chart(&rows).to_string();

        assert!(options.contains("\"Budget\""));
        assert!(options.contains("\"Actual\""));
        for category in Category::ALL {
            assert!(
                options.contains(&format!("\"{category}\"")),
                "want an axis label for {category}"
            );
        }
    }

    #[test]
    fn charts_view_has_a_container_per_chart() {
        let charts = [
            DashboardChart {
                id: "first-chart",
                options: "{}".to_owned(),
            },
            DashboardChart {
                id: "second-chart",
                options: "{}".to_owned(),
            },
        ];

        let html = charts_view(&charts).into_string();

        assert!(html.contains("id=\"first-chart\""));
        assert!(html.contains("id=\"second-chart\""));
    }

    #[test]
    fn charts_script_initializes_each_chart() {
        let charts = [DashboardChart {
            id: "expenses-chart",
            options: "{\"series\":[]}".to_owned(),
        }];

        let HeadElement::ScriptSource(script) = charts_script(&charts) else {
            panic!("want inline script");
        };

        assert!(script.0.contains("getElementById(\"expenses-chart\")"));
        assert!(script.0.contains("{\"series\":[]}"));
    }
}
