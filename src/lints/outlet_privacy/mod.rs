pub(crate) mod outlet_privacy;

#[cfg(test)]
mod tests {
    use crate::rule_options::{OutletPrivacyOptions, ResolvedRuleOptions};
    use crate::utils_test::*;

    #[test]
    fn test_lint_outlet_privacy() {
        expect_lint(&outlet_class(vec![]), "outlet_privacy");
        // Unrelated modifiers don't hide the outlet.
        expect_lint(&outlet_class(vec![weak_modifier()]), "outlet_privacy");
        // Without the option, `private(set)` is not enough.
        expect_lint(&outlet_class(vec![private_set_modifier()]), "outlet_privacy");
    }

    #[test]
    fn violation_points_at_the_introducing_keyword() {
        let tree = outlet_class(vec![]);
        let source = tree.source_text();
        assert_eq!(
            lint_positions(&tree, "outlet_privacy"),
            vec![source.find("var").unwrap()]
        );
    }

    #[test]
    fn test_no_lint_outlet_privacy() {
        expect_no_lint(&outlet_class(vec![private_modifier()]), "outlet_privacy");
        expect_no_lint(&outlet_class(vec![fileprivate_modifier()]), "outlet_privacy");
        // Modifier order is irrelevant.
        expect_no_lint(
            &outlet_class(vec![weak_modifier(), private_modifier()]),
            "outlet_privacy",
        );
        expect_no_lint(
            &outlet_class(vec![private_modifier(), weak_modifier()]),
            "outlet_privacy",
        );
        // Only the outlet marker itself triggers the rule.
        expect_no_lint(
            &class_with_attributed_var("IBAction", vec![]),
            "outlet_privacy",
        );
    }

    #[test]
    fn private_set_honored_only_when_opted_in() {
        let tree = outlet_class(vec![private_set_modifier()]);
        let opted_in = ResolvedRuleOptions {
            outlet_privacy: OutletPrivacyOptions {
                allow_private_set: true,
            },
        };
        assert!(diagnostics_for(&tree, "outlet_privacy", opted_in).is_empty());
        assert_eq!(
            diagnostics_for(&tree, "outlet_privacy", ResolvedRuleOptions::default()).len(),
            1
        );
    }
}
