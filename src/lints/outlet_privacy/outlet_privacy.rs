use crate::diagnostic::*;
use crate::location::SourceRange;
use crate::rule_options::OutletPrivacyOptions;
use crate::syntax::{NodeId, NodeKind, SyntaxTree};

pub struct OutletPrivacy;

/// ## What it does
///
/// Check that properties marked `@IBOutlet` are declared `private` or
/// `fileprivate`.
///
/// ## Why is this bad?
///
/// Outlets are an implementation detail of the view they belong to. Exposing
/// them lets other types reach into the view hierarchy and mutate it behind
/// the owner's back.
///
/// ## Example
///
/// ```swift
/// class Foo {
///   @IBOutlet var label: UILabel?
/// }
/// ```
///
/// Use instead:
/// ```swift
/// class Foo {
///   @IBOutlet private var label: UILabel?
/// }
/// ```
///
/// With the `allow_private_set` option enabled, `private(set)` is accepted
/// too: the property stays readable but its mutation surface is hidden.
impl Violation for OutletPrivacy {
    fn name(&self) -> String {
        "outlet_privacy".to_string()
    }
    fn body(&self) -> String {
        "IBOutlet properties should be declared private.".to_string()
    }
    fn suggestion(&self) -> Option<String> {
        Some("Add `private` or `fileprivate` to the declaration.".to_string())
    }
}

pub fn outlet_privacy(
    tree: &SyntaxTree,
    decl: NodeId,
    options: &OutletPrivacyOptions,
) -> anyhow::Result<Option<Diagnostic>> {
    let NodeKind::VariableDecl {
        attributes,
        modifiers,
        keyword,
        ..
    } = tree.kind(decl)
    else {
        return Ok(None);
    };

    let has_outlet = attributes.iter().any(|attribute| {
        matches!(
            tree.kind(*attribute),
            NodeKind::Attribute { name, .. } if name.text() == "IBOutlet"
        )
    });
    if !has_outlet {
        return Ok(None);
    }

    // Modifier order and unrelated modifiers like `weak` are irrelevant.
    if modifiers.iter().any(|m| m.is_private_access()) {
        return Ok(None);
    }
    if options.allow_private_set && modifiers.iter().any(|m| m.is_private_set()) {
        return Ok(None);
    }

    // Point at the introducing keyword (`let`/`var`), not the whole
    // declaration.
    let range = SourceRange::new(keyword.offset(), keyword.end_offset());
    Ok(Some(Diagnostic::new(OutletPrivacy, range)))
}
