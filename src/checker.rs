use crate::diagnostic::Diagnostic;
use crate::rule_options::ResolvedRuleOptions;
use crate::rule_table::RuleTable;

#[derive(Debug)]
// Accumulates diagnostics over one detection traversal. Built fresh for
// every analyzed tree and discarded once the diagnostics are taken out.
pub struct Checker {
    // Gathered so far, in dispatch order.
    pub diagnostics: Vec<Diagnostic>,
    // The rules this traversal applies, with their metadata.
    pub rule_set: RuleTable,
    // Per-rule options resolved from configuration.
    pub rule_options: ResolvedRuleOptions,
}

impl Checker {
    pub(crate) fn new(rule_options: ResolvedRuleOptions) -> Self {
        Self {
            diagnostics: vec![],
            rule_set: RuleTable::empty(),
            rule_options,
        }
    }

    // Rule functions return Some(Diagnostic) on a match and None otherwise,
    // so the accumulator takes the Option as-is.
    pub(crate) fn report_diagnostic(&mut self, diagnostic: Option<Diagnostic>) {
        if let Some(diagnostic) = diagnostic {
            self.diagnostics.push(diagnostic);
        }
    }

    pub(crate) fn is_rule_enabled(&self, rule: &str) -> bool {
        self.rule_set.contains(rule)
    }
}
