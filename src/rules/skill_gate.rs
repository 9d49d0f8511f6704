//! Skill authorization: is a matched shape currently enabled?

use crate::core::RuleSet;
use crate::shapes::group_name;

/// Suffix of the size wildcard rule, as in `"4-orb-any"`.
pub const WILDCARD_SUFFIX: &str = "-orb-any";

/// Build the wildcard rule string for a given orb count.
#[must_use]
pub fn wildcard_rule(orb_count: usize) -> String {
    format!("{orb_count}{WILDCARD_SUFFIX}")
}

/// Decide whether a shape is authorized by the rule set.
///
/// Succeeds if the exact shape name, its group name, or the
/// `"{orb_count}-orb-any"` wildcard is enabled.
#[must_use]
pub fn authorize(shape: &str, orb_count: usize, rules: &RuleSet) -> bool {
    if rules.is_empty() {
        return false;
    }
    rules.contains(shape)
        || rules.contains(group_name(shape))
        || rules.contains(&wildcard_rule(orb_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_name() {
        let rules = RuleSet::new().with("2-orb_v");
        assert!(authorize("2-orb_v", 2, &rules));
        assert!(!authorize("2-orb_h", 2, &rules));
    }

    #[test]
    fn test_group_name() {
        let rules = RuleSet::new().with("4-orb-L");
        for variant in ["4-orb-L_1", "4-orb-L_2", "4-orb-L_3", "4-orb-L_4"] {
            assert!(authorize(variant, 4, &rules), "{variant}");
        }
        assert!(!authorize("4-orb-square", 4, &rules));
    }

    #[test]
    fn test_wildcard_matches_count_only() {
        let rules = RuleSet::new().with("4-orb-any");
        assert!(authorize("4-orb-square", 4, &rules));
        assert!(authorize("4-orb-I_h", 4, &rules));
        assert!(!authorize("3-orb-I_h", 3, &rules));
        assert!(!authorize("6-orb-Rect", 6, &rules));
    }

    #[test]
    fn test_empty_rules_authorize_nothing() {
        assert!(!authorize("1-orb", 1, &RuleSet::new()));
    }

    #[test]
    fn test_wildcard_rule_format() {
        assert_eq!(wildcard_rule(6), "6-orb-any");
    }
}
