//! Inline formatting marks attached to text nodes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An inline annotation on a text node, applied by wrapping.
///
/// A text node's mark list is applied in order: each mark wraps the result
/// of the previous one, so the final mark in the list is the outermost
/// wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Strike,
    Superscript,
    Subscript,
    Code,
    /// A named anchor target.
    Anchor { attrs: AnchorAttrs },
    /// A free-form class annotation.
    Styled { attrs: StyledAttrs },
    /// A text color annotation.
    #[serde(rename = "textStyle")]
    TextStyle { attrs: TextStyleAttrs },
    /// A background color annotation.
    Highlight { attrs: HighlightAttrs },
    /// A hyperlink.
    Link { attrs: LinkAttrs },
    /// Any mark type this crate does not recognize. Resolution treats this
    /// as a transparent wrapper rather than guessing a rendering.
    #[serde(other)]
    Unknown,
}

/// Anchor mark attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorAttrs {
    pub id: String,
}

/// Styled mark attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledAttrs {
    pub class: String,
}

/// Text-color mark attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyleAttrs {
    pub color: String,
}

/// Background-color mark attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightAttrs {
    pub color: String,
}

/// Link mark attributes as authored in the CMS.
///
/// `uuid` and `linktype` are internal bookkeeping; default resolution strips
/// them from the emitted props. Overrides receive this struct unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkAttrs {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    /// Caller-defined extra link data, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<LinkTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linktype: Option<LinkType>,
    /// Story metadata attached by the CMS for `story` links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story: Option<Map<String, Value>>,
}

/// Link target window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkTarget {
    /// `_self`: the implicit default, stripped from emitted props.
    #[serde(rename = "_self")]
    SameTab,
    /// `_blank`.
    #[serde(rename = "_blank")]
    NewTab,
}

impl LinkTarget {
    /// The wire/markup value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SameTab => "_self",
            Self::NewTab => "_blank",
        }
    }
}

/// Kind of link as authored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    #[default]
    Url,
    Story,
    Email,
    Asset,
}
