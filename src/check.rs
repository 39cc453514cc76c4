//! Detection drivers: run the enabled rules over one tree, or over a batch
//! of files through a [`TreeProvider`].

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use crate::analyze::node::check_node;
use crate::checker::Checker;
use crate::config::Config;
use crate::diagnostic::Diagnostic;
use crate::location::LineIndex;
use crate::syntax::SyntaxTree;

/// Supplies the root syntax tree for a file. Parsing is outside this crate;
/// the provider is typically backed by the external parser.
pub trait TreeProvider: Sync {
    fn tree_for(&self, path: &Path) -> Result<SyntaxTree>;
}

/// Check every configured path, in parallel. Trees are independent and each
/// traversal is self-contained, so no synchronization beyond the shared
/// read-only config is needed.
pub fn check(
    config: Config,
    provider: &dyn TreeProvider,
) -> Vec<(String, Result<Vec<Diagnostic>, anyhow::Error>)> {
    // Shared read-only across worker threads; the rule table never clones.
    let config = Arc::new(config);

    config
        .paths
        .par_iter()
        .map(|file| {
            let res = check_path(file, Arc::clone(&config), provider);
            (file.display().to_string(), res)
        })
        .collect()
}

pub fn check_path(
    path: &PathBuf,
    config: Arc<Config>,
    provider: &dyn TreeProvider,
) -> Result<Vec<Diagnostic>, anyhow::Error> {
    let tree = provider
        .tree_for(path)
        .with_context(|| format!("Failed to get tree for file: {}", path.display()))?;

    let mut diagnostics = detect(&tree, &config)
        .with_context(|| format!("Failed to check file: {}", path.display()))?;
    for diagnostic in &mut diagnostics {
        diagnostic.filename = path.clone();
    }
    Ok(diagnostics)
}

// Takes a tree and runs the detection traversal, gathering a (possibly
// empty) vector of `Diagnostic`s ordered by position.
//
// If there are diagnostics to report, this is also where their offset is
// converted to a (row, column) location.
pub fn detect(tree: &SyntaxTree, config: &Config) -> Result<Vec<Diagnostic>> {
    let mut checker = Checker::new(config.rule_options);
    checker.rule_set = config.rules_to_apply.clone();

    check_node(tree, tree.root(), &mut checker)?;
    debug!(
        diagnostics = checker.diagnostics.len(),
        "detection pass finished"
    );

    // Dispatch order is not source order when a declaration and one of its
    // attribute children both fire; order by position before reporting.
    checker.diagnostics.sort();

    let index = LineIndex::new(&tree.source_text());
    Ok(checker
        .diagnostics
        .into_iter()
        .map(|mut diagnostic| {
            diagnostic.location = Some(index.location(diagnostic.range.start()));
            diagnostic
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils_test::*;
    use rustc_hash::FxHashMap;

    struct MapProvider(FxHashMap<PathBuf, SyntaxTree>);

    impl TreeProvider for MapProvider {
        fn tree_for(&self, path: &Path) -> Result<SyntaxTree> {
            self.0
                .get(path)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("no tree for {}", path.display()))
        }
    }

    #[test]
    fn diagnostics_come_back_in_source_order() {
        // A class with an exposed outlet whose initializer also calls
        // `.init` explicitly.
        let tree = outlet_with_init_tree();
        let diagnostics = detect(&tree, &Config::default()).unwrap();
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[0].position() < diagnostics[1].position());
        assert_eq!(diagnostics[0].message.name, "outlet_privacy");
        assert_eq!(diagnostics[1].message.name, "explicit_init");
    }

    #[test]
    fn two_rules_on_one_declaration_come_back_in_source_order() {
        // `outlet_privacy` fires on the declaration itself, before the
        // traversal reaches the attribute that triggers
        // `inspectable_in_extension` at an earlier offset.
        let tree = doubly_attributed_extension();
        let diagnostics = detect(&tree, &Config::default()).unwrap();
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].message.name, "inspectable_in_extension");
        assert_eq!(diagnostics[1].message.name, "outlet_privacy");
        assert!(diagnostics[0].position() < diagnostics[1].position());
    }

    /// `extension Foo {\n  @IBInspectable @IBOutlet var label\n}\n`
    fn doubly_attributed_extension() -> SyntaxTree {
        use crate::syntax::Token;
        use crate::syntax::builder::TreeBuilder;

        let mut b = TreeBuilder::new();
        let inspectable = b.attribute(
            Token::new("@").with_leading("  "),
            Token::new("IBInspectable").with_trailing(" "),
            None,
        );
        let outlet = b.attribute(Token::new("@"), Token::new("IBOutlet").with_trailing(" "), None);
        let decl = b.variable_decl(
            vec![inspectable, outlet],
            vec![],
            Token::new("var").with_trailing(" "),
            Token::new("label").with_trailing("\n"),
            None,
            None,
            None,
        );
        let extension = b.extension_decl(
            vec![],
            Token::new("extension").with_trailing(" "),
            Token::new("Foo").with_trailing(" "),
            Token::new("{").with_trailing("\n"),
            vec![decl],
            Token::new("}").with_trailing("\n"),
        );
        let root = b.source_file(vec![extension]);
        b.finish(root)
    }

    #[test]
    fn locations_are_filled_in() {
        let tree = outlet_class(vec![]);
        let diagnostics = detect(&tree, &Config::default()).unwrap();
        let location = diagnostics[0].location.unwrap();
        // `var` sits on the second line, after two spaces and the attribute.
        assert_eq!(location.row(), 2);
        assert_eq!(location.column(), 12);
    }

    #[test]
    fn file_driver_sets_filenames_and_reports_provider_errors() {
        let good = PathBuf::from("views/foo.swift");
        let missing = PathBuf::from("views/gone.swift");
        let mut trees = FxHashMap::default();
        trees.insert(good.clone(), outlet_class(vec![]));
        let provider = MapProvider(trees);

        let config = Config {
            paths: vec![good.clone(), missing.clone()],
            ..Config::default()
        };
        let mut results = check(config, &provider);
        results.sort_by(|a, b| a.0.cmp(&b.0));

        let (_, good_result) = &results[0];
        let diagnostics = good_result.as_ref().unwrap();
        assert_eq!(diagnostics[0].filename, good);

        let (name, missing_result) = &results[1];
        assert_eq!(name, "views/gone.swift");
        assert!(missing_result.is_err());
    }

    #[test]
    fn disabled_rules_do_not_run() {
        let tree = outlet_class(vec![]);
        let config = Config::with_rules(&["explicit_init"]).unwrap();
        assert!(detect(&tree, &config).unwrap().is_empty());
    }
}
