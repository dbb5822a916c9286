//! Metrics comparison
//!
//! Expands user-selected metric categories into concrete metric lists for
//! company comparison. Pure lookup, no remote calls: unknown entries pass
//! through unchanged so callers can mix categories with ad-hoc metrics.

/// Default metrics for a recognized category.
fn category_metrics(category: &str) -> Option<&'static [&'static str]> {
    match category {
        "financial" => Some(&[
            "Revenue",
            "Gross Margin",
            "Net Profit Margin",
            "Earnings Per Share (EPS)",
            "Return on Equity (ROE)",
            "Debt-to-Equity Ratio",
        ]),
        "market" => Some(&[
            "Market Capitalization",
            "Price-to-Earnings Ratio (P/E)",
            "Enterprise Value (EV)",
            "Revenue Growth Rate",
        ]),
        "operational" => Some(&[
            "Asset Turnover Ratio",
            "Inventory Turnover",
            "Employee Productivity",
        ]),
        "customer" => Some(&[
            "Customer Retention Rate",
            "Customer Acquisition Cost (CAC)",
            "Lifetime Value (LTV)",
        ]),
        "industry_specific" => Some(&[
            "Tech: Monthly Active Users (MAU)",
            "Tech: Daily Active Users (DAU)",
            "Retail: Same-Store Sales Growth",
            "Manufacturing: Production Efficiency",
            "SaaS: Churn Rate",
            "SaaS: Annual Recurring Revenue (ARR)",
        ]),
        _ => None,
    }
}

/// Expand each selected entry: recognized categories become their default
/// metric lists in catalog order, anything else is kept as-is.
pub fn expand_metrics(selected: &[String]) -> Vec<String> {
    let mut expanded = Vec::new();
    for metric in selected {
        match category_metrics(metric) {
            Some(defaults) => expanded.extend(defaults.iter().map(|m| m.to_string())),
            None => expanded.push(metric.clone()),
        }
    }
    expanded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn empty_selection_expands_to_nothing() {
        assert!(expand_metrics(&[]).is_empty());
    }

    #[test]
    fn recognized_category_expands_in_catalog_order() {
        let expanded = expand_metrics(&selected(&["customer"]));
        assert_eq!(
            expanded,
            vec![
                "Customer Retention Rate",
                "Customer Acquisition Cost (CAC)",
                "Lifetime Value (LTV)"
            ]
        );
    }

    #[test]
    fn unrecognized_entries_pass_through() {
        let expanded = expand_metrics(&selected(&["Net Promoter Score"]));
        assert_eq!(expanded, vec!["Net Promoter Score"]);
    }

    #[test]
    fn mixed_selection_preserves_input_order() {
        let expanded = expand_metrics(&selected(&["operational", "Custom KPI", "market"]));
        assert_eq!(expanded[0], "Asset Turnover Ratio");
        assert_eq!(expanded[3], "Custom KPI");
        assert_eq!(expanded[4], "Market Capitalization");
        assert_eq!(expanded.len(), 3 + 1 + 4);
    }
}
