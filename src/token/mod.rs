//! Token stream representation
//!
//! A tokenizer turns source markup into a stream of [`Token`]s; the rule
//! engine rewrites that stream; the node layer ([`crate::node`]) materializes
//! it. Following the rust-analyzer approach of keeping the token layer dumb,
//! tokens here are plain data: no parent pointers, no interior mutability.
//!
//! [`Token`] is a sum type over the markup constructs:
//!
//! - `Start(Tag)` - an opening tag, `<a href="...">`
//! - `Empty(Tag)` - a self-closing tag, `<br/>`
//! - `End(Tag)` - a closing tag, `</a>`
//! - `Text(Text)` - character data between tags
//! - `Comment(Comment)` - `<!-- ... -->`

mod tag;


pub use tag::{Attrs, Tag, is_void_element};

use text_size::TextRange;

/// Character data between tags.
///
/// `is_whitespace` is fixed at construction so whitespace-sensitive consumers
/// (e.g. rules that collapse inter-tag whitespace) don't rescan the data.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Text {
    pub data: String,
    pub is_whitespace: bool,
    pub range: Option<TextRange>,
}

impl Text {
    pub fn new(data: impl Into<String>) -> Self {
        let data = data.into();
        // HTML whitespace: tab, LF, FF, CR, space
        let is_whitespace = data.chars().all(|c| matches!(c, '\t' | '\n' | '\x0C' | '\r' | ' '));
        Self {
            data,
            is_whitespace,
            range: None,
        }
    }

    pub fn with_range(mut self, range: TextRange) -> Self {
        self.range = Some(range);
        self
    }
}

/// A comment token, `<!-- data -->`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comment {
    pub data: String,
    pub range: Option<TextRange>,
}

impl Comment {
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            range: None,
        }
    }

    pub fn with_range(mut self, range: TextRange) -> Self {
        self.range = Some(range);
        self
    }
}

/// One markup construct as recognized by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Token {
    /// Opening tag: `<a href="...">`
    Start(Tag),
    /// Self-closing tag: `<br/>`
    Empty(Tag),
    /// Closing tag: `</a>`
    End(Tag),
    /// Character data
    Text(Text),
    /// Comment
    Comment(Comment),
}

impl Token {
    /// The tag payload, if this is a tag-shaped token.
    pub fn tag(&self) -> Option<&Tag> {
        match self {
            Token::Start(tag) | Token::Empty(tag) | Token::End(tag) => Some(tag),
            Token::Text(_) | Token::Comment(_) => None,
        }
    }

    /// Tag name for tag-shaped tokens.
    pub fn name(&self) -> Option<&str> {
        self.tag().map(|tag| tag.name.as_str())
    }

    pub fn is_tag(&self) -> bool {
        self.tag().is_some()
    }

    /// Source byte range, when the tokenizer recorded one.
    pub fn range(&self) -> Option<TextRange> {
        match self {
            Token::Start(tag) | Token::Empty(tag) | Token::End(tag) => tag.range,
            Token::Text(text) => text.range,
            Token::Comment(comment) => comment.range,
        }
    }
}
