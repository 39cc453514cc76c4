//! The correcting rewriter.
//!
//! Rewriting is strictly bottom-up and single-pass: children are rewritten
//! into a fresh arena before their parent is reconstructed, so a parent's
//! pattern match observes the final form of its children and a freshly
//! rewritten node can never be matched again within the same pass. The input
//! tree is never mutated.

use tracing::trace;

use crate::diagnostic::Correction;
use crate::lints::explicit_init::explicit_init::match_init_call;
use crate::location::SourceRange;
use crate::syntax::builder::TreeBuilder;
use crate::syntax::{NodeId, NodeKind, SyntaxTree, Token};

/// Apply every safe rewrite outside the disabled regions and return the new
/// tree together with the applied corrections, ordered by position.
///
/// Detection is never suppressed; the regions only filter the rewrite step.
/// A skipped node passes through unchanged while its children are still
/// visited and corrected.
pub fn correct(tree: &SyntaxTree, disabled_regions: &[SourceRange]) -> (SyntaxTree, Vec<Correction>) {
    let mut builder = TreeBuilder::new();
    let mut corrections = vec![];
    let root = rewrite(tree, tree.root(), &mut builder, disabled_regions, &mut corrections);
    // Bottom-up emission appends a call's own correction after those of its
    // arguments; order by source position before handing the list out.
    corrections.sort_by_key(|correction| correction.position);
    (builder.finish(root), corrections)
}

fn rewrite(
    old: &SyntaxTree,
    id: NodeId,
    builder: &mut TreeBuilder,
    disabled: &[SourceRange],
    corrections: &mut Vec<Correction>,
) -> NodeId {
    match old.kind(id) {
        NodeKind::SourceFile { items } => {
            let items = rewrite_all(old, items, builder, disabled, corrections);
            builder.source_file(items)
        }
        NodeKind::TypeDecl {
            attributes,
            modifiers,
            keyword,
            name,
            open_brace,
            members,
            close_brace,
        } => {
            let attributes = rewrite_all(old, attributes, builder, disabled, corrections);
            let members = rewrite_all(old, members, builder, disabled, corrections);
            builder.type_decl(
                attributes,
                modifiers.clone(),
                keyword.clone(),
                name.clone(),
                open_brace.clone(),
                members,
                close_brace.clone(),
            )
        }
        NodeKind::ExtensionDecl {
            attributes,
            keyword,
            name,
            open_brace,
            members,
            close_brace,
        } => {
            let attributes = rewrite_all(old, attributes, builder, disabled, corrections);
            let members = rewrite_all(old, members, builder, disabled, corrections);
            builder.extension_decl(
                attributes,
                keyword.clone(),
                name.clone(),
                open_brace.clone(),
                members,
                close_brace.clone(),
            )
        }
        NodeKind::VariableDecl {
            attributes,
            modifiers,
            keyword,
            name,
            ty,
            equals,
            initializer,
        } => {
            let attributes = rewrite_all(old, attributes, builder, disabled, corrections);
            let initializer = initializer
                .map(|init| rewrite(old, init, builder, disabled, corrections));
            builder.variable_decl(
                attributes,
                modifiers.clone(),
                keyword.clone(),
                name.clone(),
                ty.clone(),
                equals.clone(),
                initializer,
            )
        }
        NodeKind::FunctionDecl {
            attributes,
            modifiers,
            keyword,
            name,
            signature,
            open_brace,
            body,
            close_brace,
        } => {
            let attributes = rewrite_all(old, attributes, builder, disabled, corrections);
            let body = rewrite_all(old, body, builder, disabled, corrections);
            builder.function_decl(
                attributes,
                modifiers.clone(),
                keyword.clone(),
                name.clone(),
                signature.clone(),
                open_brace.clone(),
                body,
                close_brace.clone(),
            )
        }
        NodeKind::ConditionalCompilation {
            pound_if,
            statements,
            pound_endif,
        } => {
            let statements = rewrite_all(old, statements, builder, disabled, corrections);
            builder.conditional_compilation(pound_if.clone(), statements, pound_endif.clone())
        }
        NodeKind::Attribute { at, name, arguments } => {
            builder.attribute(at.clone(), name.clone(), arguments.clone())
        }
        NodeKind::Identifier { token } => builder.identifier(token.clone()),
        NodeKind::Literal { token } => builder.literal(token.clone()),
        NodeKind::MemberAccess { base, dot, name } => {
            let base = rewrite(old, *base, builder, disabled, corrections);
            builder.member_access(base, dot.clone(), name.clone())
        }
        NodeKind::Call {
            callee,
            left_paren,
            arguments,
            right_paren,
            trailing_closure,
        } => {
            // The callee of a matching call is a member access over a bare
            // identifier. Neither kind is itself rewritable, so matching on
            // the input node observes exactly the shape the finished callee
            // has; arguments and closure are rewritten before the call is
            // reconstructed either way.
            if let Some(matched) = match_init_call(old, id)
                && !disabled.iter().any(|region| region.contains(matched.position))
                && let NodeKind::Identifier { token } = old.kind(matched.base)
            {
                // Drop the member-access layer. The bare identifier keeps
                // its leading trivia; everything between it and the opening
                // paren goes away, whichever token the provider attached
                // it to.
                let bare = token.without_trailing();
                let arguments = rewrite_all(old, arguments, builder, disabled, corrections);
                let trailing_closure = trailing_closure
                    .map(|closure| rewrite(old, closure, builder, disabled, corrections));
                let new_callee = builder.identifier(bare);
                let call = builder.call(
                    new_callee,
                    left_paren.as_ref().map(Token::without_leading),
                    arguments,
                    right_paren.clone(),
                    trailing_closure,
                );
                let replacement = builder.node_text_trimmed(call);
                trace!(position = matched.position, %replacement, "rewrote explicit init call");
                corrections.push(Correction {
                    position: matched.position,
                    replacement,
                });
                return call;
            }

            let new_callee = rewrite(old, *callee, builder, disabled, corrections);
            let arguments = rewrite_all(old, arguments, builder, disabled, corrections);
            let trailing_closure = trailing_closure
                .map(|closure| rewrite(old, closure, builder, disabled, corrections));
            builder.call(
                new_callee,
                left_paren.clone(),
                arguments,
                right_paren.clone(),
                trailing_closure,
            )
        }
        NodeKind::Argument {
            label,
            colon,
            value,
            comma,
        } => {
            let value = rewrite(old, *value, builder, disabled, corrections);
            builder.argument(label.clone(), colon.clone(), value, comma.clone())
        }
        NodeKind::Closure {
            open_brace,
            statements,
            close_brace,
        } => {
            let statements = rewrite_all(old, statements, builder, disabled, corrections);
            builder.closure(open_brace.clone(), statements, close_brace.clone())
        }
        NodeKind::ArrayLiteral {
            open_bracket,
            elements,
            close_bracket,
        } => {
            let elements = rewrite_all(old, elements, builder, disabled, corrections);
            builder.array_literal(open_bracket.clone(), elements, close_bracket.clone())
        }
    }
}

fn rewrite_all(
    old: &SyntaxTree,
    ids: &[NodeId],
    builder: &mut TreeBuilder,
    disabled: &[SourceRange],
    corrections: &mut Vec<Correction>,
) -> Vec<NodeId> {
    ids.iter()
        .map(|id| rewrite(old, *id, builder, disabled, corrections))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::detect;
    use crate::config::Config;
    use crate::utils_test::*;

    #[test]
    fn corrections_are_a_subset_of_detections() {
        let tree = nested_init_tree();
        let detected = detect(&tree, &Config::default()).unwrap();
        let detected_positions: Vec<usize> =
            detected.iter().map(|d| d.position()).collect();

        let (_, corrections) = correct(&tree, &[]);
        for correction in &corrections {
            assert!(detected_positions.contains(&correction.position));
        }
        assert_eq!(corrections.len(), detected_positions.len());
    }

    #[test]
    fn corrections_come_back_ordered_by_position() {
        let tree = nested_init_tree();
        let (_, corrections) = correct(&tree, &[]);
        assert_eq!(corrections.len(), 2);
        assert!(corrections[0].position < corrections[1].position);
    }

    #[test]
    fn disabled_region_keeps_the_node_but_not_its_children() {
        // Outer call suppressed, inner call still corrected.
        let tree = nested_init_tree();
        let detected = detect(&tree, &Config::default()).unwrap();
        let outer = detected.iter().map(|d| d.position()).min().unwrap();

        let region = SourceRange::new(outer, outer + 1);
        let (fixed, corrections) = correct(&tree, &[region]);
        assert_eq!(corrections.len(), 1);
        assert!(corrections[0].position > outer);
        assert_eq!(fixed.source_text(), "let x = Foo.init(Bar(1))\n");
    }

    #[test]
    fn untouched_trees_render_identically() {
        let tree = outlet_class(vec![]);
        let (fixed, corrections) = correct(&tree, &[]);
        assert!(corrections.is_empty());
        assert_eq!(fixed.source_text(), tree.source_text());
    }
}
