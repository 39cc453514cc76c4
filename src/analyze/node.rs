use crate::analyze;
use crate::checker::Checker;
use crate::syntax::{NodeId, NodeKind, SyntaxTree};

/// Dispatch a node to its set of rules, then recurse into its children.
///
/// The match lists every kind a rule is attached to today; the default arm
/// is for all the other kinds, which only recurse. Each node is visited
/// exactly once per traversal.
pub(crate) fn check_node(
    tree: &SyntaxTree,
    id: NodeId,
    checker: &mut Checker,
) -> anyhow::Result<()> {
    match tree.kind(id) {
        NodeKind::VariableDecl { .. } => {
            analyze::declaration::variable_decl(tree, id, checker)?;
        }
        NodeKind::Attribute { .. } => {
            analyze::attribute::attribute(tree, id, checker)?;
        }
        NodeKind::Call { .. } => {
            analyze::call::call(tree, id, checker)?;
        }
        _ => {}
    }

    for child in tree.children(id) {
        check_node(tree, child, checker)?;
    }
    Ok(())
}
