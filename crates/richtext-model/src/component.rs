//! Output tree: render-framework-agnostic component nodes.

use serde::Serialize;
use serde_json::{Map, Value};

/// Property map of a component node. Values are arbitrary JSON so callers can
/// carry whatever their rendering layer needs.
pub type Props = Map<String, Value>;

/// An ordered sequence of resolution results.
///
/// Entries stay `None` where a node had no renderable resolution (an
/// embedded component without a resolver, an unknown variant); they are
/// never elided, so output order and length always match the input.
pub type ResolvedChildren = Vec<Option<ComponentNode>>;

/// Nested content of a component node: either a bare text run or a list of
/// child component nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Content {
    Text(String),
    Nodes(ResolvedChildren),
}

/// One node of the output tree.
///
/// A node with only text content carries no component identifier, which is
/// how consumers distinguish plain inline text from a rendered element.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComponentNode {
    /// Identifier the consumer maps to a renderable component. For defaults
    /// this is an HTML tag name; overrides may supply anything.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<Props>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
}

impl ComponentNode {
    /// A node rendering as the given component, with no props or content yet.
    pub fn element(component: impl Into<String>) -> Self {
        Self {
            component: Some(component.into()),
            ..Self::default()
        }
    }

    /// A bare text node: content only, no component identifier.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: Some(Content::Text(text.into())),
            ..Self::default()
        }
    }

    /// Replace the props wholesale.
    #[must_use]
    pub fn with_props(mut self, props: Props) -> Self {
        self.props = Some(props);
        self
    }

    /// Insert a single prop, creating the map if needed.
    #[must_use]
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props
            .get_or_insert_with(Props::new)
            .insert(key.into(), value.into());
        self
    }

    /// Set nested child content.
    #[must_use]
    pub fn with_children(mut self, children: ResolvedChildren) -> Self {
        self.content = Some(Content::Nodes(children));
        self
    }

    /// Set text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.content = Some(Content::Text(text.into()));
        self
    }

    /// Apply a caller override on top of this default.
    ///
    /// Field-replacement semantics: each of `component`, `props`, `content`
    /// is taken from the override when present there, otherwise kept from
    /// the default. Props are replaced as a whole, never field-merged.
    #[must_use]
    pub fn merged_with(self, overrides: Self) -> Self {
        Self {
            component: overrides.component.or(self.component),
            props: overrides.props.or(self.props),
            content: overrides.content.or(self.content),
        }
    }
}
