//! Candidate function selection
//!
//! Maps query keywords to catalog function names through the
//! [`SelectionStrategy`] seam, so the keyword table can be swapped for a
//! real model-backed selector without touching the orchestrator.

use indexmap::IndexSet;

/// Pluggable selection strategy
///
/// Implementations must be deterministic: the iteration order of the
/// returned set becomes the plan's execution order.
pub trait SelectionStrategy: Send + Sync + std::fmt::Debug {
    /// Select candidate function names for a query, in first-insertion order
    fn select(&self, query: &str) -> IndexSet<&'static str>;

    /// Strategy name (for debugging/logging)
    fn name(&self) -> &'static str;
}

/// Ordered (trigger keywords, function names) rules
const SELECTION_RULES: &[(&[&str], &[&str])] = &[
    (
        &["invoice", "billing", "payment"],
        &["retrieveInvoices", "calculateTotal", "generateSummary"],
    ),
    (&["email", "send", "notify"], &["sendEmail", "createNotification"]),
    (&["report", "generate", "export"], &["generateReport", "exportData"]),
    (&["customer", "user", "client"], &["getCustomerData", "validatePermissions"]),
    (
        &["data", "retrieve", "fetch", "get"],
        &["searchDatabase", "filterData", "sortData"],
    ),
    (
        &["analyze", "analysis", "metrics"],
        &["performAnalysis", "generateMetrics", "createChart"],
    ),
    (&["workflow", "automate", "schedule"], &["createWorkflow", "scheduleTask"]),
    (
        &["authenticate", "login", "security"],
        &["authenticateUser", "validatePermissions", "auditLog"],
    ),
];

/// Fallback pair when no rule matches
const DEFAULT_SELECTION: &[&str] = &["searchDatabase", "generateSummary"];

/// Keyword-table selector
///
/// For every rule whose keyword set has a lowercase substring match in the
/// query, unions the rule's function names into the candidate set.
/// Duplicates across rules collapse; first insertion wins the position.
#[derive(Debug, Default, Clone)]
pub struct KeywordSelector;

impl KeywordSelector {
    /// Create a new keyword selector
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SelectionStrategy for KeywordSelector {
    fn select(&self, query: &str) -> IndexSet<&'static str> {
        let lower = query.to_lowercase();
        let mut selected = IndexSet::new();

        for (keywords, functions) in SELECTION_RULES {
            if keywords.iter().any(|kw| lower.contains(kw)) {
                for func in *functions {
                    selected.insert(*func);
                }
            }
        }

        if selected.is_empty() {
            selected.extend(DEFAULT_SELECTION.iter().copied());
        }

        selected
    }

    fn name(&self) -> &'static str {
        "keyword"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(query: &str) -> Vec<&'static str> {
        KeywordSelector::new().select(query).into_iter().collect()
    }

    #[test]
    fn email_query_selects_communication_pair() {
        assert_eq!(select("send an email"), vec!["sendEmail", "createNotification"]);
    }

    #[test]
    fn no_match_falls_back_to_default_pair() {
        assert_eq!(select("xyz"), vec!["searchDatabase", "generateSummary"]);
    }

    #[test]
    fn duplicates_across_rules_collapse() {
        // "customer" and "security" both contribute validatePermissions;
        // it keeps its first position.
        let names = select("customer security check");
        assert_eq!(
            names,
            vec![
                "getCustomerData",
                "validatePermissions",
                "authenticateUser",
                "auditLog",
            ]
        );
    }

    #[test]
    fn rule_order_drives_set_order() {
        // Invoice rule fires before the report rule; functions keep
        // rule-evaluation order, then in-rule listing order.
        let names = select("generate an invoice report");
        assert_eq!(
            names,
            vec![
                "retrieveInvoices",
                "calculateTotal",
                "generateSummary",
                "generateReport",
                "exportData",
            ]
        );
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        assert_eq!(select("SEND it"), vec!["sendEmail", "createNotification"]);
        // "getting" contains "get"
        assert!(select("getting started").contains(&"searchDatabase"));
    }

    #[test]
    fn selection_is_deterministic() {
        let a = select("fetch customer data and send a report");
        let b = select("fetch customer data and send a report");
        assert_eq!(a, b);
    }
}
