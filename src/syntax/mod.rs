//! Arena-stored Swift syntax trees.
//!
//! A [`SyntaxTree`] is an immutable graph of nodes held in a flat arena and
//! addressed by [`NodeId`]. Every node is a [`NodeKind`] variant carrying
//! only the typed children and tokens meaningful to that kind. Tokens own
//! their surrounding trivia verbatim, so rendering a tree back to text
//! reproduces the original file byte for byte.
//!
//! Trees are produced by an external parser through [`builder::TreeBuilder`];
//! this crate never mutates a tree in place. The correcting rewriter builds a
//! fresh tree instead.

pub mod builder;

use serde::{Deserialize, Serialize};

/// Non-semantic source text (whitespace, comments) attached to a token.
///
/// Preserved byte for byte and never interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trivia {
    text: String,
}

impl Trivia {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn empty() -> Self {
        Self { text: String::new() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A single token with its leading and trailing trivia.
///
/// `offset` is the absolute byte offset of the token text itself (leading
/// trivia excluded) in the original source buffer. It is assigned once by
/// [`builder::TreeBuilder::finish`] and never cached as line/column; use
/// [`crate::location::LineIndex`] for that conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    text: String,
    leading: Trivia,
    trailing: Trivia,
    offset: usize,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            leading: Trivia::empty(),
            trailing: Trivia::empty(),
            offset: 0,
        }
    }

    pub fn with_leading(mut self, trivia: impl Into<String>) -> Self {
        self.leading = Trivia::new(trivia);
        self
    }

    pub fn with_trailing(mut self, trivia: impl Into<String>) -> Self {
        self.trailing = Trivia::new(trivia);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn leading(&self) -> &Trivia {
        &self.leading
    }

    pub fn trailing(&self) -> &Trivia {
        &self.trailing
    }

    /// Byte offset of the first character of the token text.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Byte offset just past the token text, trailing trivia excluded.
    pub fn end_offset(&self) -> usize {
        self.offset + self.text.len()
    }

    /// Copy of this token with its trailing trivia removed.
    pub fn without_trailing(&self) -> Self {
        Self {
            text: self.text.clone(),
            leading: self.leading.clone(),
            trailing: Trivia::empty(),
            offset: self.offset,
        }
    }

    /// Copy of this token with its leading trivia removed.
    pub fn without_leading(&self) -> Self {
        Self {
            text: self.text.clone(),
            leading: Trivia::empty(),
            trailing: self.trailing.clone(),
            offset: self.offset,
        }
    }

    fn write(&self, out: &mut String) {
        out.push_str(self.leading.text());
        out.push_str(&self.text);
        out.push_str(self.trailing.text());
    }

    fn full_len(&self) -> usize {
        self.leading.len() + self.text.len() + self.trailing.len()
    }
}

/// Handle into the arena of a [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// `: UILabel?` — the type clause of a variable declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeClause {
    pub colon: Token,
    pub name: Token,
}

/// A declaration modifier keyword, optionally with a parenthesized detail
/// as in `private(set)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifier {
    pub keyword: Token,
    pub detail: Option<ModifierDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierDetail {
    pub left_paren: Token,
    pub keyword: Token,
    pub right_paren: Token,
}

impl Modifier {
    pub fn simple(keyword: Token) -> Self {
        Self { keyword, detail: None }
    }

    pub fn with_detail(keyword: Token, left_paren: Token, detail: Token, right_paren: Token) -> Self {
        Self {
            keyword,
            detail: Some(ModifierDetail {
                left_paren,
                keyword: detail,
                right_paren,
            }),
        }
    }

    pub fn name(&self) -> &str {
        self.keyword.text()
    }

    /// `private` or `fileprivate` without a detail clause. `private(set)` is
    /// a setter restriction, not an access-level modifier.
    pub fn is_private_access(&self) -> bool {
        self.detail.is_none() && matches!(self.keyword.text(), "private" | "fileprivate")
    }

    pub fn is_private_set(&self) -> bool {
        self.keyword.text() == "private"
            && self
                .detail
                .as_ref()
                .is_some_and(|d| d.keyword.text() == "set")
    }
}

/// The closed set of node kinds. Each variant carries only the fields
/// meaningful to that kind; child nodes are referenced by [`NodeId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    SourceFile {
        items: Vec<NodeId>,
    },
    /// `class`/`struct`/`enum` declaration with a braced member list.
    TypeDecl {
        attributes: Vec<NodeId>,
        modifiers: Vec<Modifier>,
        keyword: Token,
        name: Token,
        open_brace: Token,
        members: Vec<NodeId>,
        close_brace: Token,
    },
    ExtensionDecl {
        attributes: Vec<NodeId>,
        keyword: Token,
        name: Token,
        open_brace: Token,
        members: Vec<NodeId>,
        close_brace: Token,
    },
    /// `let`/`var` declaration, optionally typed and initialized.
    VariableDecl {
        attributes: Vec<NodeId>,
        modifiers: Vec<Modifier>,
        keyword: Token,
        name: Token,
        ty: Option<TypeClause>,
        equals: Option<Token>,
        initializer: Option<NodeId>,
    },
    /// `func` declaration. The signature is kept as one verbatim token since
    /// no rule inspects parameter structure.
    FunctionDecl {
        attributes: Vec<NodeId>,
        modifiers: Vec<Modifier>,
        keyword: Token,
        name: Token,
        signature: Token,
        open_brace: Token,
        body: Vec<NodeId>,
        close_brace: Token,
    },
    /// `#if … #endif` block. Condition and terminator are verbatim tokens.
    ConditionalCompilation {
        pound_if: Token,
        statements: Vec<NodeId>,
        pound_endif: Token,
    },
    /// `@Name` or `@Name(arguments)`, attached to a declaration.
    Attribute {
        at: Token,
        name: Token,
        arguments: Option<Token>,
    },
    Identifier {
        token: Token,
    },
    Literal {
        token: Token,
    },
    /// `base.name`
    MemberAccess {
        base: NodeId,
        dot: Token,
        name: Token,
    },
    /// A call: parenthesized arguments, a trailing closure, or both.
    Call {
        callee: NodeId,
        left_paren: Option<Token>,
        arguments: Vec<NodeId>,
        right_paren: Option<Token>,
        trailing_closure: Option<NodeId>,
    },
    /// One element of an argument list, with optional label and separator.
    Argument {
        label: Option<Token>,
        colon: Option<Token>,
        value: NodeId,
        comma: Option<Token>,
    },
    Closure {
        open_brace: Token,
        statements: Vec<NodeId>,
        close_brace: Token,
    },
    ArrayLiteral {
        open_bracket: Token,
        elements: Vec<NodeId>,
        close_bracket: Token,
    },
}

/// A node in the arena: its kind plus an index-based parent link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
}

/// Read access to a node arena. Implemented by [`SyntaxTree`] and by
/// [`builder::TreeBuilder`] so the rewriter can pattern-match nodes it has
/// just built, before the new tree is finalized.
pub trait NodeStore {
    fn kind(&self, id: NodeId) -> &NodeKind;
}

/// An immutable, finalized syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxTree {
    nodes: Vec<SyntaxNode>,
    root: NodeId,
}

impl NodeStore for SyntaxTree {
    fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.index()].kind
    }
}

impl SyntaxTree {
    pub(crate) fn from_parts(nodes: Vec<SyntaxNode>, root: NodeId) -> Self {
        Self { nodes, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.index()].kind
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    /// Strict ancestors of `id`, innermost first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), |&current| self.parent(current))
    }

    /// Child nodes of `id` in source order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        child_ids(self.kind(id))
    }

    /// The full source text of the file this tree was built from.
    pub fn source_text(&self) -> String {
        let mut out = String::new();
        render_node(&self.nodes, self.root, &mut out);
        out
    }

    /// Text of a node including its outer trivia.
    pub fn node_text(&self, id: NodeId) -> String {
        let mut out = String::new();
        render_node(&self.nodes, id, &mut out);
        out
    }

    /// Text of a node without the leading trivia of its first token and the
    /// trailing trivia of its last token.
    pub fn node_text_trimmed(&self, id: NodeId) -> String {
        node_text_trimmed(&self.nodes, id)
    }

    /// Byte range of a node's text, outer trivia excluded.
    pub fn trimmed_range(&self, id: NodeId) -> crate::location::SourceRange {
        let start = first_token(&self.nodes, id).map(Token::offset).unwrap_or(0);
        let end = last_token(&self.nodes, id)
            .map(Token::end_offset)
            .unwrap_or(start);
        crate::location::SourceRange::new(start, end)
    }
}

/// Child node ids of a kind, in source order. The order here must agree with
/// `render_node` and with the offset pass in the builder.
pub(crate) fn child_ids(kind: &NodeKind) -> Vec<NodeId> {
    match kind {
        NodeKind::SourceFile { items } => items.clone(),
        NodeKind::TypeDecl {
            attributes, members, ..
        } => attributes.iter().chain(members).copied().collect(),
        NodeKind::ExtensionDecl {
            attributes, members, ..
        } => attributes.iter().chain(members).copied().collect(),
        NodeKind::VariableDecl {
            attributes,
            initializer,
            ..
        } => attributes.iter().chain(initializer).copied().collect(),
        NodeKind::FunctionDecl {
            attributes, body, ..
        } => attributes.iter().chain(body).copied().collect(),
        NodeKind::ConditionalCompilation { statements, .. } => statements.clone(),
        NodeKind::Attribute { .. } | NodeKind::Identifier { .. } | NodeKind::Literal { .. } => {
            vec![]
        }
        NodeKind::MemberAccess { base, .. } => vec![*base],
        NodeKind::Call {
            callee,
            arguments,
            trailing_closure,
            ..
        } => std::iter::once(*callee)
            .chain(arguments.iter().copied())
            .chain(trailing_closure.iter().copied())
            .collect(),
        NodeKind::Argument { value, .. } => vec![*value],
        NodeKind::Closure { statements, .. } => statements.clone(),
        NodeKind::ArrayLiteral { elements, .. } => elements.clone(),
    }
}

fn write_modifier(modifier: &Modifier, out: &mut String) {
    modifier.keyword.write(out);
    if let Some(detail) = &modifier.detail {
        detail.left_paren.write(out);
        detail.keyword.write(out);
        detail.right_paren.write(out);
    }
}

/// Render a node and its subtree into `out`, trivia included.
pub(crate) fn render_node(nodes: &[SyntaxNode], id: NodeId, out: &mut String) {
    match &nodes[id.index()].kind {
        NodeKind::SourceFile { items } => {
            for item in items {
                render_node(nodes, *item, out);
            }
        }
        NodeKind::TypeDecl {
            attributes,
            modifiers,
            keyword,
            name,
            open_brace,
            members,
            close_brace,
        } => {
            for attribute in attributes {
                render_node(nodes, *attribute, out);
            }
            for modifier in modifiers {
                write_modifier(modifier, out);
            }
            keyword.write(out);
            name.write(out);
            open_brace.write(out);
            for member in members {
                render_node(nodes, *member, out);
            }
            close_brace.write(out);
        }
        NodeKind::ExtensionDecl {
            attributes,
            keyword,
            name,
            open_brace,
            members,
            close_brace,
        } => {
            for attribute in attributes {
                render_node(nodes, *attribute, out);
            }
            keyword.write(out);
            name.write(out);
            open_brace.write(out);
            for member in members {
                render_node(nodes, *member, out);
            }
            close_brace.write(out);
        }
        NodeKind::VariableDecl {
            attributes,
            modifiers,
            keyword,
            name,
            ty,
            equals,
            initializer,
        } => {
            for attribute in attributes {
                render_node(nodes, *attribute, out);
            }
            for modifier in modifiers {
                write_modifier(modifier, out);
            }
            keyword.write(out);
            name.write(out);
            if let Some(ty) = ty {
                ty.colon.write(out);
                ty.name.write(out);
            }
            if let Some(equals) = equals {
                equals.write(out);
            }
            if let Some(initializer) = initializer {
                render_node(nodes, *initializer, out);
            }
        }
        NodeKind::FunctionDecl {
            attributes,
            modifiers,
            keyword,
            name,
            signature,
            open_brace,
            body,
            close_brace,
        } => {
            for attribute in attributes {
                render_node(nodes, *attribute, out);
            }
            for modifier in modifiers {
                write_modifier(modifier, out);
            }
            keyword.write(out);
            name.write(out);
            signature.write(out);
            open_brace.write(out);
            for statement in body {
                render_node(nodes, *statement, out);
            }
            close_brace.write(out);
        }
        NodeKind::ConditionalCompilation {
            pound_if,
            statements,
            pound_endif,
        } => {
            pound_if.write(out);
            for statement in statements {
                render_node(nodes, *statement, out);
            }
            pound_endif.write(out);
        }
        NodeKind::Attribute { at, name, arguments } => {
            at.write(out);
            name.write(out);
            if let Some(arguments) = arguments {
                arguments.write(out);
            }
        }
        NodeKind::Identifier { token } | NodeKind::Literal { token } => {
            token.write(out);
        }
        NodeKind::MemberAccess { base, dot, name } => {
            render_node(nodes, *base, out);
            dot.write(out);
            name.write(out);
        }
        NodeKind::Call {
            callee,
            left_paren,
            arguments,
            right_paren,
            trailing_closure,
        } => {
            render_node(nodes, *callee, out);
            if let Some(left_paren) = left_paren {
                left_paren.write(out);
            }
            for argument in arguments {
                render_node(nodes, *argument, out);
            }
            if let Some(right_paren) = right_paren {
                right_paren.write(out);
            }
            if let Some(closure) = trailing_closure {
                render_node(nodes, *closure, out);
            }
        }
        NodeKind::Argument {
            label,
            colon,
            value,
            comma,
        } => {
            if let Some(label) = label {
                label.write(out);
            }
            if let Some(colon) = colon {
                colon.write(out);
            }
            render_node(nodes, *value, out);
            if let Some(comma) = comma {
                comma.write(out);
            }
        }
        NodeKind::Closure {
            open_brace,
            statements,
            close_brace,
        } => {
            open_brace.write(out);
            for statement in statements {
                render_node(nodes, *statement, out);
            }
            close_brace.write(out);
        }
        NodeKind::ArrayLiteral {
            open_bracket,
            elements,
            close_bracket,
        } => {
            open_bracket.write(out);
            for element in elements {
                render_node(nodes, *element, out);
            }
            close_bracket.write(out);
        }
    }
}

/// First token of a node's subtree in source order, if any.
pub(crate) fn first_token<'a>(nodes: &'a [SyntaxNode], id: NodeId) -> Option<&'a Token> {
    match &nodes[id.index()].kind {
        NodeKind::SourceFile { items } => items.first().and_then(|i| first_token(nodes, *i)),
        NodeKind::TypeDecl {
            attributes,
            modifiers,
            keyword,
            ..
        }
        | NodeKind::VariableDecl {
            attributes,
            modifiers,
            keyword,
            ..
        }
        | NodeKind::FunctionDecl {
            attributes,
            modifiers,
            keyword,
            ..
        } => attributes
            .first()
            .and_then(|a| first_token(nodes, *a))
            .or_else(|| modifiers.first().map(|m| &m.keyword))
            .or(Some(keyword)),
        NodeKind::ExtensionDecl {
            attributes, keyword, ..
        } => attributes
            .first()
            .and_then(|a| first_token(nodes, *a))
            .or(Some(keyword)),
        NodeKind::ConditionalCompilation { pound_if, .. } => Some(pound_if),
        NodeKind::Attribute { at, .. } => Some(at),
        NodeKind::Identifier { token } | NodeKind::Literal { token } => Some(token),
        NodeKind::MemberAccess { base, .. } => first_token(nodes, *base),
        NodeKind::Call { callee, .. } => first_token(nodes, *callee),
        NodeKind::Argument { label, colon, value, .. } => label
            .as_ref()
            .or(colon.as_ref())
            .or_else(|| first_token(nodes, *value)),
        NodeKind::Closure { open_brace, .. } => Some(open_brace),
        NodeKind::ArrayLiteral { open_bracket, .. } => Some(open_bracket),
    }
}

/// Last token of a node's subtree in source order, if any.
pub(crate) fn last_token<'a>(nodes: &'a [SyntaxNode], id: NodeId) -> Option<&'a Token> {
    match &nodes[id.index()].kind {
        NodeKind::SourceFile { items } => items.last().and_then(|i| last_token(nodes, *i)),
        NodeKind::TypeDecl { close_brace, .. }
        | NodeKind::ExtensionDecl { close_brace, .. }
        | NodeKind::FunctionDecl { close_brace, .. } => Some(close_brace),
        NodeKind::VariableDecl {
            name,
            ty,
            equals,
            initializer,
            ..
        } => initializer
            .and_then(|i| last_token(nodes, i))
            .or(equals.as_ref())
            .or(ty.as_ref().map(|t| &t.name))
            .or(Some(name)),
        NodeKind::ConditionalCompilation { pound_endif, .. } => Some(pound_endif),
        NodeKind::Attribute { name, arguments, .. } => arguments.as_ref().or(Some(name)),
        NodeKind::Identifier { token } | NodeKind::Literal { token } => Some(token),
        NodeKind::MemberAccess { name, .. } => Some(name),
        NodeKind::Call {
            callee,
            left_paren,
            arguments,
            right_paren,
            trailing_closure,
        } => trailing_closure
            .and_then(|c| last_token(nodes, c))
            .or(right_paren.as_ref())
            .or_else(|| arguments.last().and_then(|a| last_token(nodes, *a)))
            .or(left_paren.as_ref())
            .or_else(|| last_token(nodes, *callee)),
        NodeKind::Argument { value, comma, .. } => {
            comma.as_ref().or_else(|| last_token(nodes, *value))
        }
        NodeKind::Closure { close_brace, .. } => Some(close_brace),
        NodeKind::ArrayLiteral { close_bracket, .. } => Some(close_bracket),
    }
}

/// Node text without outer trivia: the full render minus the first token's
/// leading trivia and the last token's trailing trivia.
pub(crate) fn node_text_trimmed(nodes: &[SyntaxNode], id: NodeId) -> String {
    let mut out = String::new();
    render_node(nodes, id, &mut out);
    let lead = first_token(nodes, id).map(|t| t.leading.len()).unwrap_or(0);
    let trail = last_token(nodes, id).map(|t| t.trailing.len()).unwrap_or(0);
    out[lead..out.len() - trail].to_string()
}

/// Walk tokens of a subtree mutably, in the same order as `render_node`.
/// Used by the builder's offset pass.
pub(crate) fn for_each_token_mut(
    nodes: &mut [SyntaxNode],
    id: NodeId,
    f: &mut impl FnMut(&mut Token),
) {
    // The borrow checker cannot see that child ids never alias the current
    // node, so the kind is taken out, visited, and put back.
    let mut kind = std::mem::replace(
        &mut nodes[id.index()].kind,
        NodeKind::SourceFile { items: vec![] },
    );
    visit_kind_tokens(nodes, &mut kind, f);
    nodes[id.index()].kind = kind;
}

fn visit_modifier_tokens(modifier: &mut Modifier, f: &mut impl FnMut(&mut Token)) {
    f(&mut modifier.keyword);
    if let Some(detail) = &mut modifier.detail {
        f(&mut detail.left_paren);
        f(&mut detail.keyword);
        f(&mut detail.right_paren);
    }
}

fn visit_kind_tokens(
    nodes: &mut [SyntaxNode],
    kind: &mut NodeKind,
    f: &mut impl FnMut(&mut Token),
) {
    match kind {
        NodeKind::SourceFile { items } => {
            for item in items {
                for_each_token_mut(nodes, *item, f);
            }
        }
        NodeKind::TypeDecl {
            attributes,
            modifiers,
            keyword,
            name,
            open_brace,
            members,
            close_brace,
        } => {
            for attribute in attributes {
                for_each_token_mut(nodes, *attribute, f);
            }
            for modifier in modifiers {
                visit_modifier_tokens(modifier, f);
            }
            f(keyword);
            f(name);
            f(open_brace);
            for member in members {
                for_each_token_mut(nodes, *member, f);
            }
            f(close_brace);
        }
        NodeKind::ExtensionDecl {
            attributes,
            keyword,
            name,
            open_brace,
            members,
            close_brace,
        } => {
            for attribute in attributes {
                for_each_token_mut(nodes, *attribute, f);
            }
            f(keyword);
            f(name);
            f(open_brace);
            for member in members {
                for_each_token_mut(nodes, *member, f);
            }
            f(close_brace);
        }
        NodeKind::VariableDecl {
            attributes,
            modifiers,
            keyword,
            name,
            ty,
            equals,
            initializer,
        } => {
            for attribute in attributes {
                for_each_token_mut(nodes, *attribute, f);
            }
            for modifier in modifiers {
                visit_modifier_tokens(modifier, f);
            }
            f(keyword);
            f(name);
            if let Some(ty) = ty {
                f(&mut ty.colon);
                f(&mut ty.name);
            }
            if let Some(equals) = equals {
                f(equals);
            }
            if let Some(initializer) = initializer {
                for_each_token_mut(nodes, *initializer, f);
            }
        }
        NodeKind::FunctionDecl {
            attributes,
            modifiers,
            keyword,
            name,
            signature,
            open_brace,
            body,
            close_brace,
        } => {
            for attribute in attributes {
                for_each_token_mut(nodes, *attribute, f);
            }
            for modifier in modifiers {
                visit_modifier_tokens(modifier, f);
            }
            f(keyword);
            f(name);
            f(signature);
            f(open_brace);
            for statement in body {
                for_each_token_mut(nodes, *statement, f);
            }
            f(close_brace);
        }
        NodeKind::ConditionalCompilation {
            pound_if,
            statements,
            pound_endif,
        } => {
            f(pound_if);
            for statement in statements {
                for_each_token_mut(nodes, *statement, f);
            }
            f(pound_endif);
        }
        NodeKind::Attribute { at, name, arguments } => {
            f(at);
            f(name);
            if let Some(arguments) = arguments {
                f(arguments);
            }
        }
        NodeKind::Identifier { token } | NodeKind::Literal { token } => {
            f(token);
        }
        NodeKind::MemberAccess { base, dot, name } => {
            for_each_token_mut(nodes, *base, f);
            f(dot);
            f(name);
        }
        NodeKind::Call {
            callee,
            left_paren,
            arguments,
            right_paren,
            trailing_closure,
        } => {
            for_each_token_mut(nodes, *callee, f);
            if let Some(left_paren) = left_paren {
                f(left_paren);
            }
            for argument in arguments {
                for_each_token_mut(nodes, *argument, f);
            }
            if let Some(right_paren) = right_paren {
                f(right_paren);
            }
            if let Some(closure) = trailing_closure {
                for_each_token_mut(nodes, *closure, f);
            }
        }
        NodeKind::Argument {
            label,
            colon,
            value,
            comma,
        } => {
            if let Some(label) = label {
                f(label);
            }
            if let Some(colon) = colon {
                f(colon);
            }
            for_each_token_mut(nodes, *value, f);
            if let Some(comma) = comma {
                f(comma);
            }
        }
        NodeKind::Closure {
            open_brace,
            statements,
            close_brace,
        } => {
            f(open_brace);
            for statement in statements {
                for_each_token_mut(nodes, *statement, f);
            }
            f(close_brace);
        }
        NodeKind::ArrayLiteral {
            open_bracket,
            elements,
            close_bracket,
        } => {
            f(open_bracket);
            for element in elements {
                for_each_token_mut(nodes, *element, f);
            }
            f(close_bracket);
        }
    }
}

pub(crate) fn assign_offsets(nodes: &mut [SyntaxNode], root: NodeId) {
    let mut pos = 0usize;
    for_each_token_mut(nodes, root, &mut |token| {
        token.offset = pos + token.leading.len();
        pos += token.full_len();
    });
}
