//! # purist
//!
//! Token and node model for HTML sanitization pipelines.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! node      → Element/Node output representation, token → node conversion
//!   ↓
//! error     → FormattedError, render_html, SanitizeError
//!   ↓
//! token     → Token sum type (Start/Empty/End/Text/Comment), Tag, void elements
//!   ↓
//! base      → Primitives (Position, Span, LineIndex, TextRange)
//! ```
//!
//! The tokenizer that produces [`Token`]s and the rule engine that rewrites the
//! stream live outside this crate; this crate is the representation they meet on.

// ============================================================================
// MODULES (dependency order: base → token → error → node)
// ============================================================================

/// Foundation types: Position, Span, LineIndex, TextRange
pub mod base;

/// Token stream: Token sum type, Tag payload, void-element lookup
pub mod token;

/// Error types: FormattedError, render_html, SanitizeError
pub mod error;

/// Output representation: Element/Node, token → node conversion
pub mod node;

// Re-export commonly needed items
pub use error::{FormattedError, SanitizeError, render_html};
pub use node::{Element, Node, to_node};
pub use token::{Attrs, Comment, Tag, Text, Token, is_void_element};

// Re-export foundation types
pub use base::{LineCol, LineIndex, Position, Span, TextRange, TextSize};
