pub(crate) mod explicit_init;

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::correct::correct;
    use crate::location::SourceRange;
    use crate::utils_test::*;
    use insta::assert_snapshot;

    #[test]
    fn test_lint_explicit_init() {
        expect_lint(&simple_init_call("Foo"), "explicit_init");
        // The heuristic is lexical, so nesting depth does not matter.
        expect_lint(&init_call_in_func("Foo"), "explicit_init");
        expect_lint(&flat_map_init_tree(), "explicit_init");
        expect_lint(&conditional_init_tree(), "explicit_init");
    }

    #[test]
    fn violation_sits_at_the_end_of_the_base_identifier() {
        let tree = flat_map_init_tree();
        let source = tree.source_text();
        let expected = source.find("String").unwrap() + "String".len();
        assert_eq!(lint_positions(&tree, "explicit_init"), vec![expected]);

        // Stable under blank lines and indentation before `.init(`.
        let tree = multiline_init_tree();
        assert_eq!(
            lint_positions(&tree, "explicit_init"),
            vec!["let int = Int".len()]
        );
    }

    #[test]
    fn test_no_lint_explicit_init() {
        // `self` and `super` are lowercase keywords, excluded by the same
        // first-character test as any other lowercase base.
        expect_no_lint(&simple_init_call("self"), "explicit_init");
        expect_no_lint(&simple_init_call("super"), "explicit_init");
        expect_no_lint(&init_call_in_func("self"), "explicit_init");
        expect_no_lint(&init_call_in_func("super"), "explicit_init");
        // A lowercase variable may well hold a metatype; not flagging it is
        // the documented false negative of the heuristic.
        expect_no_lint(&simple_init_call("type"), "explicit_init");
        // `String.init` passed as a bare function reference has no call
        // wrapper.
        expect_no_lint(&bare_init_reference(), "explicit_init");
    }

    #[test]
    fn fix_drops_the_init_layer() {
        assert_snapshot!(
            get_fixed_text(&flat_map_init_tree(), &[]),
            @"[1].flatMap{String($0)}"
        );
        assert_snapshot!(
            get_fixed_text(&nested_init_tree(), &[]),
            @"let x = Foo(Bar(1))"
        );
    }

    #[test]
    fn fix_collapses_trivia_before_init() {
        // Intervening blank lines and indentation disappear; trailing
        // trivia after the call survives untouched.
        let tree = multiline_init_tree();
        assert_eq!(tree.source_text(), "let int = Int\n\n\n      .init(1.0)\n");
        assert_eq!(get_fixed_text(&tree, &[]), "let int = Int(1.0)\n");
    }

    #[test]
    fn fix_drops_space_carried_by_the_opening_paren() {
        // A provider may attach the space in `Foo.init (1)` to the paren
        // rather than to a preceding token; it goes away all the same.
        let tree = spaced_paren_init_tree();
        assert_eq!(tree.source_text(), "let x = Foo.init (1)\n");
        assert_eq!(get_fixed_text(&tree, &[]), "let x = Foo(1)\n");
    }

    /// `let x = Foo.init (1)\n`, the space held as the paren's leading
    /// trivia.
    fn spaced_paren_init_tree() -> crate::syntax::SyntaxTree {
        use crate::syntax::Token;
        use crate::syntax::builder::TreeBuilder;

        let mut b = TreeBuilder::new();
        let base = b.identifier(Token::new("Foo").with_leading(" "));
        let callee = b.member_access(base, Token::new("."), Token::new("init"));
        let one = b.literal(Token::new("1"));
        let arg = b.argument(None, None, one, None);
        let call = b.call(
            callee,
            Some(Token::new("(").with_leading(" ")),
            vec![arg],
            Some(Token::new(")").with_trailing("\n")),
            None,
        );
        let decl = b.variable_decl(
            vec![],
            vec![],
            Token::new("let").with_trailing(" "),
            Token::new("x"),
            None,
            Some(Token::new("=").with_leading(" ")),
            Some(call),
        );
        let root = b.source_file(vec![decl]);
        b.finish(root)
    }

    #[test]
    fn fix_applies_inside_conditional_compilation() {
        assert_eq!(
            get_fixed_text(&conditional_init_tree(), &[]),
            "#if DEBUG\nlet x = Foo(1)\n#endif\n"
        );
    }

    #[test]
    fn replacement_text_is_the_bare_call() {
        let (_, corrections) = correct(&multiline_init_tree(), &[]);
        assert_eq!(corrections.len(), 1);
        assert_eq!(corrections[0].position, "let int = Int".len());
        assert_eq!(corrections[0].replacement, "Int(1.0)");
    }

    #[test]
    fn correction_reaches_a_fixed_point() {
        let tree = flat_map_init_tree();
        let (fixed, corrections) = correct(&tree, &[]);
        assert_eq!(corrections.len(), 1);

        // Detection on the corrected output is empty, and correcting again
        // changes nothing.
        expect_no_lint(&fixed, "explicit_init");
        let (fixed_again, corrections_again) = correct(&fixed, &[]);
        assert!(corrections_again.is_empty());
        assert_eq!(fixed_again.source_text(), fixed.source_text());
    }

    #[test]
    fn disabled_region_suppresses_the_fix_but_not_the_lint() {
        let tree = multiline_init_tree();
        let position = lint_positions(&tree, "explicit_init")[0];
        let region = SourceRange::new(0, position + 1);

        // Still detected...
        let diagnostics =
            crate::check::detect(&tree, &Config::with_rules(&["explicit_init"]).unwrap()).unwrap();
        assert_eq!(diagnostics.len(), 1);

        // ...but not corrected, and the tree passes through unchanged.
        let (fixed, corrections) = correct(&tree, &[region]);
        assert!(corrections.is_empty());
        assert_eq!(fixed.source_text(), tree.source_text());
    }
}
