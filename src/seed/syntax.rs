//! TypeScript syntax trees via tree-sitter
//!
//! The seed document is parsed once to find the records array; record
//! fragments cut from it are re-parsed on their own as [`Snippet`]s. All
//! offsets are byte offsets into the text handed in by the caller.

use std::ops::Range;

use tree_sitter::{Node, Parser, Tree};

use crate::error::{Result, syntax};

pub const ARRAY: &str = "array";
pub const OBJECT: &str = "object";
pub const PAIR: &str = "pair";
pub const COMMENT: &str = "comment";

/// Parses `source` with the TypeScript grammar.
pub fn parse(source: &str) -> Result<Tree> {
    let language: tree_sitter::Language = tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into();

    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| syntax::parser_failed(e.to_string()))?;

    parser
        .parse(source, None)
        .ok_or_else(|| syntax::parser_failed("parser returned no tree"))
}

/// A literal cut out of the document, parsed on its own.
///
/// The text is wrapped in parentheses before parsing so that a leading `{`
/// is read as an object literal rather than a block.
pub struct Snippet {
    source: String,
    tree: Tree,
    offset: usize,
}

impl Snippet {
    /// Parses a complete `{ ... }` literal.
    pub fn object(text: &str) -> Result<Self> {
        Self::wrapped(format!("({text})"), 1)
    }

    /// Parses the text between an array's brackets.
    pub fn array_body(body: &str) -> Result<Self> {
        Self::wrapped(format!("([{body}])"), 2)
    }

    fn wrapped(source: String, offset: usize) -> Result<Self> {
        let tree = parse(&source)?;
        Ok(Self {
            source,
            tree,
            offset,
        })
    }

    /// The wrapped text, which node offsets refer to.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The literal inside the parentheses.
    pub fn expression(&self) -> Option<Node<'_>> {
        let statement = first_named(self.tree.root_node())?;
        let parens = first_named(statement)?;
        if parens.kind() != "parenthesized_expression" {
            return None;
        }
        first_named(parens)
    }

    /// Byte range of `node` in the caller's unwrapped text.
    pub fn range(&self, node: Node<'_>) -> Range<usize> {
        node.start_byte().saturating_sub(self.offset)..node.end_byte().saturating_sub(self.offset)
    }
}

/// First named child that is not a comment.
fn first_named(node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .find(|child| child.kind() != COMMENT)
}

/// First named, non-comment node starting at or after `from`, in document
/// order. Of several nodes starting at the same byte the outermost wins.
pub fn first_node_from(node: Node<'_>, from: usize) -> Option<Node<'_>> {
    if node.end_byte() <= from {
        return None;
    }
    if node.is_named() && node.start_byte() >= from && node.kind() != COMMENT {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .find_map(|child| first_node_from(child, from))
}

/// Descends from `node` through children starting at the same byte until
/// one of kind `kind` is found.
pub fn innermost_at<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut current = node;
    loop {
        if current.kind() == kind {
            return Some(current);
        }
        let start = current.start_byte();
        let mut cursor = current.walk();
        let next = current
            .named_children(&mut cursor)
            .find(|child| child.start_byte() == start)?;
        current = next;
    }
}

/// True when the node's last token is a real `]`.
pub fn is_closed_array(array: Node<'_>) -> bool {
    let mut cursor = array.walk();
    array
        .children(&mut cursor)
        .last()
        .is_some_and(|last| last.kind() == "]" && !last.is_missing())
}

/// First error or missing node inside `node`, in document order.
pub fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

/// Name of a `pair` key: an identifier, number or plain string.
///
/// Computed keys yield `None`.
pub fn property_key(key: Node<'_>, source: &str) -> Option<String> {
    match key.kind() {
        "property_identifier" | "number" => source.get(key.byte_range()).map(str::to_string),
        "string" => string_value(key, source),
        _ => None,
    }
}

/// Decoded contents of a string literal node.
///
/// Returns `None` for any other node, including template literals with
/// substitutions.
pub fn string_value(node: Node<'_>, source: &str) -> Option<String> {
    if !matches!(node.kind(), "string" | "template_string") {
        return None;
    }
    let inner_start = node.start_byte() + 1;
    let inner_end = node.end_byte().checked_sub(1)?;
    if inner_end < inner_start {
        return None;
    }

    let mut out = String::with_capacity(inner_end - inner_start);
    let mut pos = inner_start;
    let mut cursor = node.walk();
    for part in node.named_children(&mut cursor) {
        match part.kind() {
            "string_fragment" => {}
            "escape_sequence" => {
                out.push_str(source.get(pos..part.start_byte())?);
                push_escape(&mut out, source.get(part.byte_range())?);
                pos = part.end_byte();
            }
            _ => return None,
        }
    }
    out.push_str(source.get(pos..inner_end)?);
    Some(out)
}

fn push_escape(out: &mut String, sequence: &str) {
    let body = sequence.strip_prefix('\\').unwrap_or(sequence);
    let mut chars = body.chars();
    match chars.next() {
        Some('n') => out.push('\n'),
        Some('t') => out.push('\t'),
        Some('r') => out.push('\r'),
        Some('b') => out.push('\u{8}'),
        Some('f') => out.push('\u{c}'),
        Some('v') => out.push('\u{b}'),
        Some('0') if body.len() == 1 => out.push('\0'),
        Some('x' | 'u') => {
            let hex = chars.as_str().trim_start_matches('{').trim_end_matches('}');
            match u32::from_str_radix(hex, 16).ok().and_then(char::from_u32) {
                Some(c) => out.push(c),
                None => out.push_str(sequence),
            }
        }
        // line continuation
        Some('\n' | '\r' | '\u{2028}' | '\u{2029}') => {}
        Some(c) => out.push(c),
        None => {}
    }
}

/// Renders `value` as a single-quoted TypeScript string literal.
pub fn quote_single(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}
