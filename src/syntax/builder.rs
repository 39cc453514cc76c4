//! Construction of syntax trees.
//!
//! A tree provider (the external parser, or a test) pushes nodes bottom-up
//! into a [`TreeBuilder`], then calls [`TreeBuilder::finish`] with the root.
//! Finishing assigns parent links and absolute token offsets in one pass, so
//! callers never compute positions by hand.

use super::{
    Modifier, NodeId, NodeKind, NodeStore, SyntaxNode, SyntaxTree, Token, TypeClause, assign_offsets,
    child_ids, node_text_trimmed,
};

#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<SyntaxNode>,
}

impl NodeStore for TreeBuilder {
    fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.index()].kind
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(SyntaxNode { kind, parent: None });
        id
    }

    pub fn source_file(&mut self, items: Vec<NodeId>) -> NodeId {
        self.push(NodeKind::SourceFile { items })
    }

    pub fn type_decl(
        &mut self,
        attributes: Vec<NodeId>,
        modifiers: Vec<Modifier>,
        keyword: Token,
        name: Token,
        open_brace: Token,
        members: Vec<NodeId>,
        close_brace: Token,
    ) -> NodeId {
        self.push(NodeKind::TypeDecl {
            attributes,
            modifiers,
            keyword,
            name,
            open_brace,
            members,
            close_brace,
        })
    }

    pub fn extension_decl(
        &mut self,
        attributes: Vec<NodeId>,
        keyword: Token,
        name: Token,
        open_brace: Token,
        members: Vec<NodeId>,
        close_brace: Token,
    ) -> NodeId {
        self.push(NodeKind::ExtensionDecl {
            attributes,
            keyword,
            name,
            open_brace,
            members,
            close_brace,
        })
    }

    pub fn variable_decl(
        &mut self,
        attributes: Vec<NodeId>,
        modifiers: Vec<Modifier>,
        keyword: Token,
        name: Token,
        ty: Option<TypeClause>,
        equals: Option<Token>,
        initializer: Option<NodeId>,
    ) -> NodeId {
        self.push(NodeKind::VariableDecl {
            attributes,
            modifiers,
            keyword,
            name,
            ty,
            equals,
            initializer,
        })
    }

    pub fn function_decl(
        &mut self,
        attributes: Vec<NodeId>,
        modifiers: Vec<Modifier>,
        keyword: Token,
        name: Token,
        signature: Token,
        open_brace: Token,
        body: Vec<NodeId>,
        close_brace: Token,
    ) -> NodeId {
        self.push(NodeKind::FunctionDecl {
            attributes,
            modifiers,
            keyword,
            name,
            signature,
            open_brace,
            body,
            close_brace,
        })
    }

    pub fn conditional_compilation(
        &mut self,
        pound_if: Token,
        statements: Vec<NodeId>,
        pound_endif: Token,
    ) -> NodeId {
        self.push(NodeKind::ConditionalCompilation {
            pound_if,
            statements,
            pound_endif,
        })
    }

    pub fn attribute(&mut self, at: Token, name: Token, arguments: Option<Token>) -> NodeId {
        self.push(NodeKind::Attribute { at, name, arguments })
    }

    pub fn identifier(&mut self, token: Token) -> NodeId {
        self.push(NodeKind::Identifier { token })
    }

    pub fn literal(&mut self, token: Token) -> NodeId {
        self.push(NodeKind::Literal { token })
    }

    pub fn member_access(&mut self, base: NodeId, dot: Token, name: Token) -> NodeId {
        self.push(NodeKind::MemberAccess { base, dot, name })
    }

    pub fn call(
        &mut self,
        callee: NodeId,
        left_paren: Option<Token>,
        arguments: Vec<NodeId>,
        right_paren: Option<Token>,
        trailing_closure: Option<NodeId>,
    ) -> NodeId {
        self.push(NodeKind::Call {
            callee,
            left_paren,
            arguments,
            right_paren,
            trailing_closure,
        })
    }

    pub fn argument(
        &mut self,
        label: Option<Token>,
        colon: Option<Token>,
        value: NodeId,
        comma: Option<Token>,
    ) -> NodeId {
        self.push(NodeKind::Argument {
            label,
            colon,
            value,
            comma,
        })
    }

    pub fn closure(
        &mut self,
        open_brace: Token,
        statements: Vec<NodeId>,
        close_brace: Token,
    ) -> NodeId {
        self.push(NodeKind::Closure {
            open_brace,
            statements,
            close_brace,
        })
    }

    pub fn array_literal(
        &mut self,
        open_bracket: Token,
        elements: Vec<NodeId>,
        close_bracket: Token,
    ) -> NodeId {
        self.push(NodeKind::ArrayLiteral {
            open_bracket,
            elements,
            close_bracket,
        })
    }

    /// Text of an in-progress node without outer trivia. The rewriter uses
    /// this for correction replacements before the new tree is finalized.
    pub(crate) fn node_text_trimmed(&self, id: NodeId) -> String {
        node_text_trimmed(&self.nodes, id)
    }

    /// Finalize into an immutable tree rooted at `root`: set parent links
    /// from the child lists and assign absolute token offsets in render
    /// order.
    pub fn finish(mut self, root: NodeId) -> SyntaxTree {
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            for child in child_ids(&self.nodes[id.index()].kind) {
                self.nodes[child.index()].parent = Some(id);
                stack.push(child);
            }
        }
        assign_offsets(&mut self.nodes, root);
        SyntaxTree::from_parts(self.nodes, root)
    }
}
