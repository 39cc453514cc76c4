use crate::rule_table::{DefaultStatus, FixStatus, RuleTable, Severity};
use rustc_hash::FxHashSet;
use std::sync::OnceLock;

pub(crate) mod explicit_init;
pub(crate) mod inspectable_in_extension;
pub(crate) mod outlet_privacy;

pub static RULE_GROUPS: &[&str] = &["IDIOM", "LINT"];

/// List of supported rules with their metadata.
///
/// Possible categories:
/// - IDIOM: code is correct but not written the way the language intends
/// - LINT: code that misleads, hides a mutation surface, or silently does
///   nothing
pub fn all_rules() -> RuleTable {
    let mut rule_table = RuleTable::empty();
    rule_table.add_rule(
        "explicit_init",
        "IDIOM",
        DefaultStatus::Enabled,
        FixStatus::Safe,
        Severity::Warning,
    );
    rule_table.add_rule(
        "inspectable_in_extension",
        "LINT",
        DefaultStatus::Enabled,
        FixStatus::None,
        Severity::Warning,
    );
    rule_table.add_rule(
        "outlet_privacy",
        "LINT",
        DefaultStatus::Enabled,
        FixStatus::None,
        Severity::Warning,
    );
    rule_table
}

/// Cached set of safe-fix rule names for O(1) lookup
static SAFE_RULES: OnceLock<FxHashSet<String>> = OnceLock::new();

/// Cached set of no-fix rule names for O(1) lookup
static NOFIX_RULES: OnceLock<FxHashSet<String>> = OnceLock::new();

/// Get the cached set of rule names with a safe fix
pub fn safe_rules_set() -> &'static FxHashSet<String> {
    SAFE_RULES.get_or_init(|| {
        all_rules()
            .iter()
            .filter(|x| x.has_safe_fix())
            .map(|x| x.name.clone())
            .collect()
    })
}

/// Get the cached set of rule names without a fix
pub fn nofix_rules_set() -> &'static FxHashSet<String> {
    NOFIX_RULES.get_or_init(|| {
        all_rules()
            .iter()
            .filter(|x| x.has_no_fix())
            .map(|x| x.name.clone())
            .collect()
    })
}
