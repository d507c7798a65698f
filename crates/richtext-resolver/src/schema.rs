//! Caller customization contract: per-variant override callbacks and
//! resolution options.
//!
//! Overrides come in exactly three shapes, matching what each variant can
//! offer the caller:
//!
//! - [`PlainResolver`] for variants without attributes — takes no arguments.
//! - [`AttrResolver`] for attribute-carrying variants — receives the attrs
//!   as authored (for links, pre-normalization).
//! - [`HeadingResolver`] — headings additionally receive their
//!   already-resolved content, so an override can redistribute it into props
//!   instead of nested content.
//!
//! Whatever an override returns is shallow-merged over the variant's default
//! via [`ComponentNode::merged_with`]: fields the override supplies replace
//! the default's, fields it omits keep the default.

use richtext_model::{
    AnchorAttrs, BlokData, CodeBlockAttrs, ComponentNode, EmojiAttrs, HeadingAttrs,
    HighlightAttrs, ImageAttrs, LinkAttrs, OrderedListAttrs, StyledAttrs, TableCellAttrs,
    TableHeaderAttrs, TextStyleAttrs,
};

/// Override for a variant without attributes.
pub type PlainResolver = Box<dyn Fn() -> ComponentNode + Send + Sync>;

/// Override for an attribute-carrying variant.
pub type AttrResolver<A> = Box<dyn Fn(&A) -> ComponentNode + Send + Sync>;

/// Override for headings: attributes plus already-resolved content.
pub type HeadingResolver =
    Box<dyn Fn(&HeadingAttrs, &[Option<ComponentNode>]) -> ComponentNode + Send + Sync>;

/// Maps one embedded CMS component datum to a component node.
pub type BlokResolver = Box<dyn Fn(&BlokData) -> ComponentNode + Send + Sync>;

/// Enriches raw text (interpolation, localization) before mark wrapping.
pub type TextResolver = Box<dyn Fn(&str) -> ComponentNode + Send + Sync>;

/// Per-variant rendering overrides.
#[derive(Default)]
pub struct Schema {
    pub nodes: NodeOverrides,
    pub marks: MarkOverrides,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the node overrides.
    #[must_use]
    pub fn nodes(mut self, nodes: NodeOverrides) -> Self {
        self.nodes = nodes;
        self
    }

    /// Set the mark overrides.
    #[must_use]
    pub fn marks(mut self, marks: MarkOverrides) -> Self {
        self.marks = marks;
        self
    }
}

macro_rules! plain_override {
    ($($(#[$doc:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$doc])*
            #[must_use]
            pub fn $name(
                mut self,
                f: impl Fn() -> ComponentNode + Send + Sync + 'static,
            ) -> Self {
                self.$name = Some(Box::new(f));
                self
            }
        )+
    };
}

macro_rules! attr_override {
    ($($(#[$doc:meta])* $name:ident: $attrs:ty),+ $(,)?) => {
        $(
            $(#[$doc])*
            #[must_use]
            pub fn $name(
                mut self,
                f: impl Fn(&$attrs) -> ComponentNode + Send + Sync + 'static,
            ) -> Self {
                self.$name = Some(Box::new(f));
                self
            }
        )+
    };
}

/// Overrides for block/inline node variants.
#[derive(Default)]
pub struct NodeOverrides {
    pub(crate) heading: Option<HeadingResolver>,
    pub(crate) paragraph: Option<PlainResolver>,
    pub(crate) text: Option<PlainResolver>,
    pub(crate) hard_break: Option<PlainResolver>,
    pub(crate) horizontal_rule: Option<PlainResolver>,
    pub(crate) blockquote: Option<PlainResolver>,
    pub(crate) bullet_list: Option<PlainResolver>,
    pub(crate) ordered_list: Option<AttrResolver<OrderedListAttrs>>,
    pub(crate) list_item: Option<PlainResolver>,
    pub(crate) image: Option<AttrResolver<ImageAttrs>>,
    pub(crate) code_block: Option<AttrResolver<CodeBlockAttrs>>,
    pub(crate) emoji: Option<AttrResolver<EmojiAttrs>>,
    pub(crate) table: Option<PlainResolver>,
    pub(crate) table_row: Option<PlainResolver>,
    pub(crate) table_header: Option<AttrResolver<TableHeaderAttrs>>,
    pub(crate) table_cell: Option<AttrResolver<TableCellAttrs>>,
}

impl NodeOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override headings. Receives the heading attrs and the
    /// already-resolved content.
    #[must_use]
    pub fn heading(
        mut self,
        f: impl Fn(&HeadingAttrs, &[Option<ComponentNode>]) -> ComponentNode + Send + Sync + 'static,
    ) -> Self {
        self.heading = Some(Box::new(f));
        self
    }

    plain_override! {
        paragraph,
        text,
        hard_break,
        horizontal_rule,
        blockquote,
        bullet_list,
        list_item,
        table,
        table_row,
    }

    attr_override! {
        ordered_list: OrderedListAttrs,
        image: ImageAttrs,
        code_block: CodeBlockAttrs,
        emoji: EmojiAttrs,
        table_header: TableHeaderAttrs,
        table_cell: TableCellAttrs,
    }
}

/// Overrides for mark variants.
#[derive(Default)]
pub struct MarkOverrides {
    pub(crate) bold: Option<PlainResolver>,
    pub(crate) italic: Option<PlainResolver>,
    pub(crate) underline: Option<PlainResolver>,
    pub(crate) strike: Option<PlainResolver>,
    pub(crate) superscript: Option<PlainResolver>,
    pub(crate) subscript: Option<PlainResolver>,
    pub(crate) code: Option<PlainResolver>,
    pub(crate) anchor: Option<AttrResolver<AnchorAttrs>>,
    pub(crate) styled: Option<AttrResolver<StyledAttrs>>,
    pub(crate) text_style: Option<AttrResolver<TextStyleAttrs>>,
    pub(crate) highlight: Option<AttrResolver<HighlightAttrs>>,
    pub(crate) link: Option<AttrResolver<LinkAttrs>>,
}

impl MarkOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    plain_override! {
        bold,
        italic,
        underline,
        strike,
        superscript,
        subscript,
        code,
    }

    attr_override! {
        anchor: AnchorAttrs,
        styled: StyledAttrs,
        text_style: TextStyleAttrs,
        highlight: HighlightAttrs,
        /// Override links. Receives the original attrs, before href
        /// normalization, so the override can derive its own representation.
        link: LinkAttrs,
    }
}

/// Options for one resolution pass.
///
/// All parts are optional; the default resolves every variant with its
/// built-in rendering and leaves embedded components unresolved.
#[derive(Default)]
pub struct ResolveOptions {
    pub(crate) schema: Schema,
    pub(crate) blok_resolver: Option<BlokResolver>,
    pub(crate) text_resolver: Option<TextResolver>,
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-variant overrides.
    #[must_use]
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    /// Set the resolver for embedded CMS components. Without one, `blok`
    /// nodes resolve to `None`.
    #[must_use]
    pub fn with_blok_resolver(
        mut self,
        f: impl Fn(&BlokData) -> ComponentNode + Send + Sync + 'static,
    ) -> Self {
        self.blok_resolver = Some(Box::new(f));
        self
    }

    /// Set the text resolver, run on every raw text run before mark
    /// wrapping.
    #[must_use]
    pub fn with_text_resolver(
        mut self,
        f: impl Fn(&str) -> ComponentNode + Send + Sync + 'static,
    ) -> Self {
        self.text_resolver = Some(Box::new(f));
        self
    }
}

/// Run an attribute-less override, if configured.
pub(crate) fn run(resolver: Option<&PlainResolver>) -> Option<ComponentNode> {
    resolver.map(|f| f())
}

/// Run an attribute-carrying override, if configured.
pub(crate) fn run_attr<A>(resolver: Option<&AttrResolver<A>>, attrs: &A) -> Option<ComponentNode> {
    resolver.map(|f| f(attrs))
}

/// Shallow-merge an override result over the default, when there is one.
pub(crate) fn apply_override(
    default: ComponentNode,
    overrides: Option<ComponentNode>,
) -> ComponentNode {
    match overrides {
        Some(overrides) => default.merged_with(overrides),
        None => default,
    }
}
