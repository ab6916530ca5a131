//! Final advice formatting

use super::messages;
use super::rules::Finding;

/// Map findings to the final message strings, in evaluator order.
/// No findings means a single "all clear" message, never an empty list.
pub fn format_advice(findings: Vec<Finding>) -> Vec<String> {
    if findings.is_empty() {
        return vec![messages::ALL_CLEAR.to_string()];
    }
    findings.into_iter().map(|f| f.message).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advice::rules::RuleKind;

    #[test]
    fn test_empty_findings_become_all_clear() {
        let out = format_advice(vec![]);
        assert_eq!(out, vec![messages::ALL_CLEAR.to_string()]);
    }

    #[test]
    fn test_findings_pass_through_in_order() {
        let findings = vec![
            Finding::new(RuleKind::CategoryOverspend, "first"),
            Finding::new(RuleKind::SavingsPace, "second"),
            Finding::new(RuleKind::BurnRate, "third"),
        ];
        assert_eq!(format_advice(findings), vec!["first", "second", "third"]);
    }
}
