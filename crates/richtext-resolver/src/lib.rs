//! Resolves a rich-text document tree into framework-agnostic component nodes.
//!
//! The entry point is [`resolve_document`], which maps every top-level node
//! of a [`Document`](richtext_model::Document) through [`resolve_node`]. Text
//! marks are folded through [`resolve_mark`], last mark outermost. Each variant
//! has a built-in rendering (HTML tag names by default); callers customize
//! per variant through [`Schema`] overrides and resolve embedded CMS
//! components through [`ResolveOptions::with_blok_resolver`].
//!
//! Resolution is pure and synchronous: no I/O, no shared state, and the same
//! document with the same options always yields the same output. Recursion
//! depth follows document nesting depth.
//!
//! # Example
//!
//! ```
//! use richtext_model::Document;
//! use richtext_resolver::{ComponentNode, NodeOverrides, ResolveOptions, Schema, resolve_document};
//!
//! let doc = Document::from_json_str(
//!     r#"{"type":"doc","content":[{"type":"paragraph","content":[{"type":"text","text":"hi"}]}]}"#,
//! )
//! .unwrap();
//!
//! let options = ResolveOptions::new().with_schema(Schema::new().nodes(
//!     NodeOverrides::new().paragraph(|| ComponentNode::element("Text")),
//! ));
//! let resolved = resolve_document(&doc, &options);
//! assert_eq!(resolved[0].as_ref().unwrap().component.as_deref(), Some("Text"));
//! ```

mod mark;
mod node;
mod schema;

pub use mark::resolve_mark;
pub use node::{resolve_document, resolve_node};
pub use schema::{
    AttrResolver, BlokResolver, HeadingResolver, MarkOverrides, NodeOverrides, PlainResolver,
    ResolveOptions, Schema, TextResolver,
};

// Re-exported so downstream callers need only this crate for the common case.
pub use richtext_model::{ComponentNode, Content, Props, ResolvedChildren};
