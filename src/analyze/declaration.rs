use crate::checker::Checker;
use crate::lints::outlet_privacy::outlet_privacy::outlet_privacy;
use crate::syntax::{NodeId, SyntaxTree};

pub(crate) fn variable_decl(
    tree: &SyntaxTree,
    decl: NodeId,
    checker: &mut Checker,
) -> anyhow::Result<()> {
    if checker.is_rule_enabled("outlet_privacy") {
        let options = checker.rule_options.outlet_privacy;
        checker.report_diagnostic(outlet_privacy(tree, decl, &options)?);
    }
    Ok(())
}
