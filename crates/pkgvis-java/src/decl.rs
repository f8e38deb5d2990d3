//! Java declaration model over tree-sitter nodes.
//!
//! [`JavaFile`] owns one parsed source file; [`Declaration`] is a borrowed
//! view of a checked declaration node exposing exactly what the verifier
//! needs: the name token, the search-window start bound, the effective
//! visibility, and the skip guards.

use tree_sitter::{Node, Parser, Tree};

use crate::error::CheckError;
use crate::source::{Position, SourceText};

/// Kind of checked declaration.
///
/// Mirrors the declaration kinds the check visits; anything else in the
/// tree (imports, statements, annotation types) is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    /// `class Foo`
    Class,
    /// `interface Foo`
    Interface,
    /// `enum Foo`
    Enum,
    /// `Foo(...)` constructor
    Constructor,
    /// field declaration
    Field,
    /// method declaration
    Method,
}

impl DeclKind {
    fn from_node(kind: &str) -> Option<Self> {
        match kind {
            "class_declaration" => Some(Self::Class),
            "interface_declaration" => Some(Self::Interface),
            "enum_declaration" => Some(Self::Enum),
            "constructor_declaration" => Some(Self::Constructor),
            "field_declaration" => Some(Self::Field),
            "method_declaration" => Some(Self::Method),
            _ => None,
        }
    }

    /// Lowercase kind name for messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Constructor => "constructor",
            Self::Field => "field",
            Self::Method => "method",
        }
    }
}

/// Effective visibility derived from a declaration's modifier list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Explicit `public`.
    Public,
    /// Explicit `protected`.
    Protected,
    /// Explicit `private`.
    Private,
    /// No explicit access modifier: package-private.
    Package,
}

/// A parsed Java source file: the tree plus line-addressable text.
pub struct JavaFile {
    tree: Tree,
    source: String,
    text: SourceText,
}

impl JavaFile {
    /// Parses Java source into a checkable file.
    ///
    /// # Errors
    ///
    /// Returns an error when the grammar cannot be loaded or the parser
    /// yields no tree.
    pub fn parse(source: &str) -> Result<Self, CheckError> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_java::LANGUAGE.into())?;
        let tree = parser.parse(source, None).ok_or(CheckError::Parse)?;
        Ok(Self {
            tree,
            source: source.to_owned(),
            text: SourceText::new(source),
        })
    }

    /// Line-addressable view of the source.
    #[must_use]
    pub fn text(&self) -> &SourceText {
        &self.text
    }

    /// All checked declarations, in document order.
    #[must_use]
    pub fn declarations(&self) -> Vec<Declaration<'_>> {
        let mut nodes = Vec::new();
        collect(self.tree.root_node(), &mut nodes);
        nodes
            .into_iter()
            .map(|(node, kind)| Declaration {
                file: self,
                node,
                kind,
            })
            .collect()
    }
}

fn collect<'a>(node: Node<'a>, nodes: &mut Vec<(Node<'a>, DeclKind)>) {
    if let Some(kind) = DeclKind::from_node(node.kind()) {
        nodes.push((node, kind));
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect(child, nodes);
    }
}

/// One checked declaration located in a [`JavaFile`].
pub struct Declaration<'a> {
    file: &'a JavaFile,
    node: Node<'a>,
    kind: DeclKind,
}

impl<'a> Declaration<'a> {
    /// Declaration kind.
    #[must_use]
    pub fn kind(&self) -> DeclKind {
        self.kind
    }

    /// 1-indexed line of the declaration node itself (where diagnostics
    /// point, regardless of where the marker comment sits).
    #[must_use]
    pub fn line(&self) -> usize {
        self.node.start_position().row + 1
    }

    /// 1-indexed display column of the declaration node.
    #[must_use]
    pub fn column(&self) -> usize {
        let point = self.node.start_position();
        self.file.text.char_column(point.row + 1, point.column) + 1
    }

    /// The file's line-addressable text.
    #[must_use]
    pub fn source_text(&self) -> &'a SourceText {
        self.file.text()
    }

    fn name_node(&self) -> Result<Node<'a>, CheckError> {
        let node = match self.kind {
            // Multi-declarator fields (`int a, b;`) use the first name.
            DeclKind::Field => self
                .node
                .child_by_field_name("declarator")
                .and_then(|d| d.child_by_field_name("name")),
            _ => self.node.child_by_field_name("name"),
        };
        node.ok_or(CheckError::MissingName {
            kind: self.kind.as_str(),
            line: self.line(),
        })
    }

    /// Identifier text of the name token.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::MissingName`] on a malformed tree.
    pub fn name(&self) -> Result<&'a str, CheckError> {
        let node = self.name_node()?;
        self.file
            .source
            .get(node.start_byte()..node.end_byte())
            .ok_or(CheckError::MissingName {
                kind: self.kind.as_str(),
                line: self.line(),
            })
    }

    /// Position of the first character of the name token: the search
    /// window's end bound.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::MissingName`] on a malformed tree.
    pub fn name_position(&self) -> Result<Position, CheckError> {
        Ok(self.position_of(&self.name_node()?))
    }

    /// Byte offset and length of the name token, for diagnostic spans.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::MissingName`] on a malformed tree.
    pub fn name_span(&self) -> Result<(usize, usize), CheckError> {
        let node = self.name_node()?;
        Ok((node.start_byte(), node.end_byte() - node.start_byte()))
    }

    /// The search window's start bound.
    ///
    /// Resolution order: the deepest last-child leaf of the previous
    /// sibling (the true end of the prior element's text, including nested
    /// closing tokens), else the enclosing container's opening position,
    /// else the start of the file. Because the container's opening brace is
    /// itself the previous sibling of a body's first member, the container
    /// fallback is canonical here.
    #[must_use]
    pub fn start_bound(&self) -> Position {
        if let Some(prev) = self.node.prev_sibling() {
            let mut current = prev;
            loop {
                let count = current.child_count();
                if count == 0 {
                    break;
                }
                match current.child(count - 1) {
                    Some(last) => current = last,
                    None => break,
                }
            }
            return self.position_of(&current);
        }
        if let Some(parent) = self.node.parent() {
            return self.position_of(&parent);
        }
        Position::FILE_START
    }

    /// True when the declaration sits inside a statement block (a local
    /// variable or local class). Local declarations are never
    /// visibility-checked.
    #[must_use]
    pub fn is_local(&self) -> bool {
        let mut current = self.node.parent();
        while let Some(node) = current {
            match node.kind() {
                "block" | "constructor_body" => return true,
                "class_body" | "interface_body" | "enum_body" | "enum_body_declarations"
                | "annotation_type_body" => return false,
                _ => current = node.parent(),
            }
        }
        false
    }

    /// True when the declaration is lexically inside an interface or
    /// annotation body, where members are implicitly public.
    #[must_use]
    pub fn in_interface_or_annotation(&self) -> bool {
        let mut current = self.node.parent();
        while let Some(node) = current {
            match node.kind() {
                "interface_body" | "annotation_type_body" => return true,
                "class_body" | "enum_body" => return false,
                _ => current = node.parent(),
            }
        }
        false
    }

    /// Effective visibility from the modifier list. No explicit access
    /// modifier means package-private.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        let mut cursor = self.node.walk();
        for child in self.node.children(&mut cursor) {
            if child.kind() != "modifiers" {
                continue;
            }
            let mut modifiers = child.walk();
            for modifier in child.children(&mut modifiers) {
                match modifier.kind() {
                    "public" => return Visibility::Public,
                    "protected" => return Visibility::Protected,
                    "private" => return Visibility::Private,
                    _ => {}
                }
            }
        }
        Visibility::Package
    }

    fn position_of(&self, node: &Node<'_>) -> Position {
        let point = node.start_position();
        Position::new(
            point.row + 1,
            self.file.text.char_column(point.row + 1, point.column),
        )
    }
}
