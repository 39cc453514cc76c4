use crate::diagnostic::*;
use crate::location::SourceRange;
use crate::syntax::{NodeId, NodeKind, SyntaxTree};

pub struct InspectableInExtension;

/// ## What it does
///
/// Check for `@IBInspectable` declarations inside extensions.
///
/// ## Why is this bad?
///
/// Interface Builder only honors inspectable properties declared in the main
/// type body. In an extension the attribute silently does nothing.
///
/// ## Example
///
/// ```swift
/// extension Foo {
///   @IBInspectable var color: UIColor?
/// }
/// ```
///
/// Use instead:
/// ```swift
/// class Foo {
///   @IBInspectable var color: UIColor?
/// }
/// ```
impl Violation for InspectableInExtension {
    fn name(&self) -> String {
        "inspectable_in_extension".to_string()
    }
    fn body(&self) -> String {
        "IBInspectable has no effect inside an extension.".to_string()
    }
    fn suggestion(&self) -> Option<String> {
        Some("Move the declaration to the main type body.".to_string())
    }
}

pub fn inspectable_in_extension(
    tree: &SyntaxTree,
    attribute: NodeId,
) -> anyhow::Result<Option<Diagnostic>> {
    let NodeKind::Attribute { at, name, .. } = tree.kind(attribute) else {
        return Ok(None);
    };
    if name.text() != "IBInspectable" {
        return Ok(None);
    }

    // Walk strictly upward through the parent links. Nesting depth is
    // arbitrary: a declaration in a type declared inside an extension is
    // still inside that extension. A top-level type declaration is not.
    let in_extension = tree
        .ancestors(attribute)
        .any(|ancestor| matches!(tree.kind(ancestor), NodeKind::ExtensionDecl { .. }));
    if !in_extension {
        return Ok(None);
    }

    let range = SourceRange::new(at.offset(), name.end_offset());
    Ok(Some(Diagnostic::new(InspectableInExtension, range)))
}
