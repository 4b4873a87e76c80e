//! Tag payload shared by the Start/Empty/End token variants

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use text_size::TextRange;

/// Attribute map. Insertion-ordered so downstream serializers emit attributes
/// in source order.
pub type Attrs = IndexMap<SmolStr, String>;

/// The elements that are self-closing by definition in HTML.
static VOID_ELEMENTS: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
        "source", "track", "wbr",
    ]
    .into_iter()
    .collect()
});

/// Check whether `name` (already lowercased) is a void element.
///
/// Tokenizers use this to emit [`Token::Empty`](crate::Token::Empty) for
/// constructs like `<br>` that carry no explicit `/>`.
pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.contains(name)
}

/// Payload of a tag-shaped token: name, attributes, and source range.
///
/// Tag names and attribute names are expected lowercased by the tokenizer
/// (the tokenizer folds ASCII case while scanning, per the HTML parsing
/// rules); this type does not fold case itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag {
    pub name: SmolStr,
    pub attrs: Attrs,
    pub range: Option<TextRange>,
}

impl Tag {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            attrs: Attrs::default(),
            range: None,
        }
    }

    /// Builder-style attribute insertion. Re-inserting a name overwrites the
    /// value but keeps the original position, per IndexMap semantics.
    pub fn with_attr(mut self, name: impl Into<SmolStr>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn with_range(mut self, range: TextRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Look up an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Whether this tag names a void element (`<br>`, `<img>`, ...).
    pub fn is_void_element(&self) -> bool {
        is_void_element(&self.name)
    }
}
