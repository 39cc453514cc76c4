//! Configuration consumed by the check drivers. Built by the caller;
//! the core never reads configuration files itself.

use std::path::PathBuf;

use crate::error::SelectionError;
use crate::lints::all_rules;
use crate::rule_options::ResolvedRuleOptions;
use crate::rule_table::RuleTable;

#[derive(Debug, Clone)]
pub struct Config {
    /// Files handed to the parallel driver; irrelevant for per-tree calls.
    pub paths: Vec<PathBuf>,
    /// A set of rules to apply, with their metadata.
    pub rules_to_apply: RuleTable,
    /// Per-rule options resolved from configuration.
    pub rule_options: ResolvedRuleOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: vec![],
            rules_to_apply: all_rules()
                .iter()
                .filter(|rule| rule.is_enabled_by_default())
                .cloned()
                .collect(),
            rule_options: ResolvedRuleOptions::default(),
        }
    }
}

impl Config {
    /// Restrict the applied rules to the given names.
    pub fn with_rules(names: &[&str]) -> Result<Self, SelectionError> {
        let table = all_rules();
        let mut selected = RuleTable::empty();
        for name in names {
            match table.get(name) {
                Some(rule) => selected.rules.push(rule.clone()),
                None => return Err(SelectionError::UnknownRule(name.to_string())),
            }
        }
        Ok(Self {
            rules_to_apply: selected,
            ..Self::default()
        })
    }
}
