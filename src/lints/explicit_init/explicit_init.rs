use crate::diagnostic::*;
use crate::location::SourceRange;
use crate::syntax::{NodeId, NodeKind, NodeStore, SyntaxTree};

pub struct ExplicitInit;

/// ## What it does
///
/// Check for explicit initializer calls written as `Type.init(args)` and
/// rewrite them to the bare form `Type(args)`.
///
/// ## Why is this bad?
///
/// Calling a type directly already invokes its initializer; spelling out
/// `.init` adds noise without adding meaning.
///
/// ## Example
///
/// ```swift
/// let label = UILabel.init(frame: .zero)
/// ```
///
/// Use instead:
/// ```swift
/// let label = UILabel(frame: .zero)
/// ```
///
/// The base must be a bare identifier whose first character is uppercase.
/// That lexical test is the only notion of "this is a type" the rule has,
/// and it is deliberately unsound: `type.init(...)` through a lowercase
/// variable holding a metatype is never flagged, a documented false
/// negative rather than a defect. `self.init(...)` and `super.init(...)`
/// fall out structurally, since those base tokens are lowercase keywords.
/// A bare `Type.init` reference without a call is a member access, not a
/// call, and is never flagged either.
impl Violation for ExplicitInit {
    fn name(&self) -> String {
        "explicit_init".to_string()
    }
    fn body(&self) -> String {
        "Explicitly calling `.init` on a type is redundant.".to_string()
    }
    fn suggestion(&self) -> Option<String> {
        Some("Call the type directly.".to_string())
    }
}

/// A call expression matched by the rule.
pub(crate) struct InitCall {
    /// The bare identifier the callee member access is based on.
    pub base: NodeId,
    /// End offset of the base identifier token, trailing trivia excluded.
    /// Stable no matter how much trivia separates the base from `.init(`.
    pub position: usize,
}

/// Structural match shared by detection and the rewriter. Works on any node
/// store so the rewriter can match nodes whose children it has just rebuilt.
pub(crate) fn match_init_call(store: &impl NodeStore, call: NodeId) -> Option<InitCall> {
    let NodeKind::Call { callee, .. } = store.kind(call) else {
        return None;
    };
    let NodeKind::MemberAccess { base, name, .. } = store.kind(*callee) else {
        return None;
    };
    if name.text() != "init" {
        return None;
    }
    let NodeKind::Identifier { token } = store.kind(*base) else {
        return None;
    };
    token
        .text()
        .chars()
        .next()
        .filter(|c| c.is_uppercase())
        .map(|_| InitCall {
            base: *base,
            position: token.end_offset(),
        })
}

pub fn explicit_init(tree: &SyntaxTree, call: NodeId) -> anyhow::Result<Option<Diagnostic>> {
    Ok(match_init_call(tree, call).map(|matched| {
        Diagnostic::new(ExplicitInit, SourceRange::empty_at(matched.position))
    }))
}
