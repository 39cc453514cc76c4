use crate::checker::Checker;
use crate::lints::explicit_init::explicit_init::explicit_init;
use crate::syntax::{NodeId, SyntaxTree};

pub(crate) fn call(tree: &SyntaxTree, call: NodeId, checker: &mut Checker) -> anyhow::Result<()> {
    if checker.is_rule_enabled("explicit_init") {
        checker.report_diagnostic(explicit_init(tree, call)?);
    }
    Ok(())
}
