//! Output node representation and token → node conversion
//!
//! The serializer consumes [`Node`]s, not tokens. Conversion is a single
//! pattern-match over the token variants; the shared element construction is
//! what the `Start` path produces, and the `Empty` path forces `is_empty`
//! after delegating to it. That forced flag is the entire contract of the
//! empty variant: the serializer decides between `<name>...</name>` and
//! `<name />` on nothing else.

use smol_str::SmolStr;
use text_size::TextRange;

use crate::error::SanitizeError;
use crate::token::{Attrs, Tag, Token};

/// An element node: name, attributes, and the self-closing flag.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    pub name: SmolStr,
    pub attrs: Attrs,
    pub is_empty: bool,
    pub range: Option<TextRange>,
}

/// A structured document node produced from a token.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    Element(Element),
    Text { data: String, is_whitespace: bool },
    Comment { data: String },
}

impl Node {
    /// The element payload, if this is an element node.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }
}

/// Shared element construction for tag-shaped tokens.
///
/// `is_empty` defaults to `false` here; the `Empty` path in [`to_node`]
/// overrides it after delegation.
fn element(tag: &Tag) -> Element {
    Element {
        name: tag.name.clone(),
        attrs: tag.attrs.clone(),
        is_empty: false,
        range: tag.range,
    }
}

/// Convert a token to its output node.
///
/// Pure and idempotent; the token is not mutated. The only failure is the
/// `End` variant, which marks structure and has no node form of its own.
pub fn to_node(token: &Token) -> Result<Node, SanitizeError> {
    match token {
        Token::Start(tag) => Ok(Node::Element(element(tag))),
        Token::Empty(tag) => {
            let mut node = element(tag);
            // Forced unconditionally, whatever the shared construction produced
            node.is_empty = true;
            tracing::trace!(name = %tag.name, "empty tag converted to node");
            Ok(Node::Element(node))
        }
        Token::End(tag) => Err(SanitizeError::EndTagToNode(tag.name.clone())),
        Token::Text(text) => Ok(Node::Text {
            data: text.data.clone(),
            is_whitespace: text.is_whitespace,
        }),
        Token::Comment(comment) => Ok(Node::Comment {
            data: comment.data.clone(),
        }),
    }
}

impl Token {
    /// Convenience for [`to_node`].
    pub fn to_node(&self) -> Result<Node, SanitizeError> {
        to_node(self)
    }
}
