//! Typed rich-text document tree and component-node output types.
//!
//! The input side mirrors the wire shape of a headless-CMS rich-text field:
//! a [`Document`] holding a sequence of [`Node`]s, where text nodes carry an
//! ordered list of [`Mark`]s. All input types are internally tagged on
//! `"type"`, so a CMS payload deserializes directly into the tree.
//!
//! The output side is the render-framework-agnostic [`ComponentNode`]: an
//! optional component identifier, a property map, and nested [`Content`].
//! Consumers map component identifiers onto whatever their UI framework
//! renders with.
//!
//! This crate does not validate the per-variant child grammar; a tree that
//! deserializes is assumed structurally valid upstream.
//!
//! # Example
//!
//! ```
//! use richtext_model::{Document, Node};
//!
//! let doc = Document::from_json_str(
//!     r#"{"type":"doc","content":[{"type":"paragraph","content":[{"type":"text","text":"hi"}]}]}"#,
//! )?;
//! assert!(matches!(doc.content[0], Node::Paragraph { .. }));
//! # Ok::<(), richtext_model::DocumentError>(())
//! ```

mod component;
mod error;
mod mark;
mod node;

pub use component::{ComponentNode, Content, Props, ResolvedChildren};
pub use error::DocumentError;
pub use mark::{
    AnchorAttrs, HighlightAttrs, LinkAttrs, LinkTarget, LinkType, Mark, StyledAttrs,
    TextStyleAttrs,
};
pub use node::{
    BlokAttrs, BlokData, CodeBlockAttrs, Document, EmojiAttrs, HeadingAttrs, ImageAttrs, Node,
    OrderedListAttrs, TableCellAttrs, TableHeaderAttrs,
};
