//! Rule metadata for cataloging: names, categories, default activation,
//! fix availability, and default severity. None of this drives matching or
//! rewriting; it feeds the external registry and documentation generator.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Severity {
    #[default]
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultStatus {
    #[default]
    Enabled,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FixStatus {
    #[default]
    None,
    Safe,
}

#[derive(Debug, Clone, Default)]
pub struct Rule {
    pub name: String,
    pub categories: Vec<String>,
    pub default_status: DefaultStatus,
    pub fix_status: FixStatus,
    pub default_severity: Severity,
}

impl Rule {
    pub fn has_safe_fix(&self) -> bool {
        self.fix_status == FixStatus::Safe
    }
    pub fn has_no_fix(&self) -> bool {
        self.fix_status == FixStatus::None
    }
    pub fn is_enabled_by_default(&self) -> bool {
        self.default_status == DefaultStatus::Enabled
    }
}

#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    pub rules: Vec<Rule>,
}

impl RuleTable {
    /// Creates a new empty rule table.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Enables the given rule.
    #[inline]
    pub fn add_rule(
        &mut self,
        rule: &str,
        categories: &str,
        default_status: DefaultStatus,
        fix_status: FixStatus,
        default_severity: Severity,
    ) {
        self.rules.push(Rule {
            name: rule.to_string(),
            categories: categories.split(',').map(|s| s.to_string()).collect(),
            default_status,
            fix_status,
            default_severity,
        });
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.iter().any(|rule| rule.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    /// Returns an iterator over the rules.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn names(&self) -> FxHashSet<String> {
        self.rules.iter().map(|rule| rule.name.clone()).collect()
    }
}

impl FromIterator<Rule> for RuleTable {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        let rules: Vec<Rule> = iter.into_iter().collect();
        RuleTable { rules }
    }
}
