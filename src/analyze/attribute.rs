use crate::checker::Checker;
use crate::lints::inspectable_in_extension::inspectable_in_extension::inspectable_in_extension;
use crate::syntax::{NodeId, SyntaxTree};

pub(crate) fn attribute(
    tree: &SyntaxTree,
    attribute: NodeId,
    checker: &mut Checker,
) -> anyhow::Result<()> {
    if checker.is_rule_enabled("inspectable_in_extension") {
        checker.report_diagnostic(inspectable_in_extension(tree, attribute)?);
    }
    Ok(())
}
