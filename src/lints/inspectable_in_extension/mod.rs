pub(crate) mod inspectable_in_extension;

#[cfg(test)]
mod tests {
    use crate::utils_test::*;

    #[test]
    fn test_lint_inspectable_in_extension() {
        expect_lint(&inspectable_extension(false), "inspectable_in_extension");
        // Nesting depth is arbitrary: a declaration in a type declared
        // inside an extension is still inside that extension.
        expect_lint(&inspectable_extension(true), "inspectable_in_extension");
    }

    #[test]
    fn violation_points_at_the_attribute() {
        let tree = inspectable_extension(false);
        let source = tree.source_text();
        assert_eq!(
            lint_positions(&tree, "inspectable_in_extension"),
            vec![source.find('@').unwrap()]
        );
    }

    #[test]
    fn test_no_lint_inspectable_in_extension() {
        // Re-parenting the declaration from the extension to a type body
        // flips the result.
        expect_no_lint(
            &class_with_attributed_var("IBInspectable", vec![]),
            "inspectable_in_extension",
        );
        // Other attributes in an extension are not this rule's concern.
        expect_no_lint(&inspectable_extension_with("IBOutlet"), "inspectable_in_extension");
    }

    fn inspectable_extension_with(attribute: &str) -> crate::syntax::SyntaxTree {
        use crate::syntax::Token;
        use crate::syntax::builder::TreeBuilder;

        let mut b = TreeBuilder::new();
        let attr = b.attribute(
            Token::new("@").with_leading("  "),
            Token::new(attribute).with_trailing(" "),
            None,
        );
        let decl = b.variable_decl(
            vec![attr],
            vec![],
            Token::new("var").with_trailing(" "),
            Token::new("label").with_trailing("\n"),
            None,
            None,
            None,
        );
        let extension = b.extension_decl(
            vec![],
            Token::new("extension").with_trailing(" "),
            Token::new("Foo").with_trailing(" "),
            Token::new("{").with_trailing("\n"),
            vec![decl],
            Token::new("}").with_trailing("\n"),
        );
        let root = b.source_file(vec![extension]);
        b.finish(root)
    }
}
