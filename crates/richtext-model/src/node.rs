//! Input document tree: block and inline node variants.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::mark::Mark;

/// An embedded CMS component datum. The shape is defined by the CMS, not by
/// this crate, so it stays an opaque key/value record.
pub type BlokData = Map<String, Value>;

/// A rich-text document: an ordered sequence of top-level block nodes.
///
/// Wire shape: `{"type": "doc", "content": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "doc")]
pub struct Document {
    /// Top-level block nodes, in authored order.
    pub content: Vec<Node>,
}

impl Document {
    /// Deserialize a document from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, crate::DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Deserialize a document from an already-parsed JSON value.
    pub fn from_json_value(value: Value) -> Result<Self, crate::DocumentError> {
        Ok(serde_json::from_value(value)?)
    }
}

/// One element of the rich-text tree.
///
/// The permitted child variants differ per parent (a `list_item` holds block
/// content, a `heading` holds inline content, and so on). That grammar is a
/// property of the upstream editor and is not validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// A heading, `h1`-`h6` depending on `attrs.level`.
    Heading {
        attrs: HeadingAttrs,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<Vec<Node>>,
    },
    /// A paragraph. Absent content is an authored blank line.
    Paragraph {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<Vec<Node>>,
    },
    /// A text span, optionally annotated with marks (applied in order, last
    /// mark outermost).
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        marks: Option<Vec<Mark>>,
    },
    /// A forced line break.
    HardBreak,
    /// A thematic break.
    HorizontalRule,
    /// A block quotation.
    Blockquote {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<Vec<Node>>,
    },
    /// An unordered list of `list_item`s.
    BulletList {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<Vec<Node>>,
    },
    /// An ordered list of `list_item`s.
    OrderedList {
        attrs: OrderedListAttrs,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<Vec<Node>>,
    },
    /// One list entry, holding block content.
    ListItem {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<Vec<Node>>,
    },
    /// An image reference.
    Image { attrs: ImageAttrs },
    /// A preformatted code block holding text content.
    CodeBlock {
        attrs: CodeBlockAttrs,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<Vec<Node>>,
    },
    /// An emoji glyph with accessibility metadata.
    Emoji { attrs: EmojiAttrs },
    /// An embedded reference to CMS-authored component data. Not itself a
    /// rich-text node; resolved by a caller-supplied function.
    Blok { attrs: BlokAttrs },
    /// A table of `tableRow`s.
    Table {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<Vec<Node>>,
    },
    /// One table row of header/data cells.
    #[serde(rename = "tableRow")]
    TableRow {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<Vec<Node>>,
    },
    /// A table header cell.
    #[serde(rename = "tableHeader")]
    TableHeader {
        attrs: TableHeaderAttrs,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<Vec<Node>>,
    },
    /// A table data cell.
    #[serde(rename = "tableCell")]
    TableCell {
        attrs: TableCellAttrs,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<Vec<Node>>,
    },
    /// Any node type this crate does not recognize. Kept as an explicit
    /// variant so resolution can treat it as a reachable branch instead of
    /// failing to deserialize the whole document.
    #[serde(other)]
    Unknown,
}

/// Heading attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingAttrs {
    /// Heading level, 1-6.
    pub level: u8,
}

/// Ordered-list attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedListAttrs {
    /// Start order of the list. Exposed to overrides, not applied to the
    /// default rendering.
    pub order: u32,
}

/// Image attributes. Only `src` and `alt` feed the default rendering; the
/// full set is available to a schema override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAttrs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Map<String, Value>>,
}

/// Code-block attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlockAttrs {
    /// Raw class string as authored, e.g. `language-rust`.
    pub class: String,
}

/// Emoji attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiAttrs {
    /// Accessible name, e.g. `rocket`.
    pub name: String,
    /// The literal glyph.
    pub emoji: String,
    /// Fallback image URL for systems without the glyph.
    #[serde(rename = "fallbackImage")]
    pub fallback_image: String,
}

/// Embedded-component attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlokAttrs {
    pub id: String,
    /// The embedded component data, one record per authored component.
    pub body: Vec<BlokData>,
}

/// Table header cell attributes. Exposed to overrides only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableHeaderAttrs {
    pub colspan: u32,
    pub rowspan: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colwidth: Option<Vec<u32>>,
}

/// Table data cell attributes. Exposed to overrides only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCellAttrs {
    pub colspan: u32,
    pub rowspan: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colwidth: Option<Vec<u32>>,
    #[serde(
        rename = "backgroundColor",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub background_color: Option<String>,
}
