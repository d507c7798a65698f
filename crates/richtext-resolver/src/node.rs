//! Node resolution: dispatches on node variant and recurses into children.

use richtext_model::{ComponentNode, Content, Document, Node, ResolvedChildren};

use crate::mark::resolve_mark;
use crate::schema::{ResolveOptions, apply_override, run, run_attr};

/// Resolve a whole document: one output entry per top-level node, in order.
///
/// Entries are `None` where a node had no renderable resolution (an embedded
/// component without a [`blok resolver`](ResolveOptions::with_blok_resolver),
/// an unrecognized variant); nothing is skipped or elided.
pub fn resolve_document(document: &Document, options: &ResolveOptions) -> ResolvedChildren {
    resolve_children(&document.content, options)
}

/// Resolve one node into a component node.
///
/// Returns `None` for variants with no renderable default: a `blok` without
/// a configured resolver, or an unrecognized variant.
pub fn resolve_node(node: &Node, options: &ResolveOptions) -> Option<ComponentNode> {
    let schema = &options.schema;
    match node {
        Node::Heading { attrs, content } => {
            // Absent content is an authored blank line.
            let Some(content) = content else {
                return Some(ComponentNode::element("br"));
            };
            let children = resolve_children(content, options);
            let overrides = schema.nodes.heading.as_ref().map(|f| f(attrs, &children));
            let default =
                ComponentNode::element(format!("h{}", attrs.level)).with_children(children);
            Some(apply_override(default, overrides))
        }
        Node::Paragraph { content } => {
            let Some(content) = content else {
                return Some(ComponentNode::element("br"));
            };
            let default = ComponentNode::element("p")
                .with_children(resolve_children(content, options));
            Some(apply_override(default, run(schema.nodes.paragraph.as_ref())))
        }
        Node::Text { text, marks } => Some(resolve_text(text, marks.as_deref(), options)),
        Node::HardBreak => Some(apply_override(
            ComponentNode::element("br"),
            run(schema.nodes.hard_break.as_ref()),
        )),
        Node::HorizontalRule => Some(apply_override(
            ComponentNode::element("hr"),
            run(schema.nodes.horizontal_rule.as_ref()),
        )),
        Node::Blockquote { content } => {
            let default = ComponentNode::element("blockquote")
                .with_children(resolve_children(content.as_deref().unwrap_or_default(), options));
            Some(apply_override(
                default,
                run(schema.nodes.blockquote.as_ref()),
            ))
        }
        Node::BulletList { content } => {
            let default = ComponentNode::element("ul")
                .with_children(resolve_children(content.as_deref().unwrap_or_default(), options));
            Some(apply_override(
                default,
                run(schema.nodes.bullet_list.as_ref()),
            ))
        }
        Node::OrderedList { attrs, content } => {
            // The start order is exposed to the override only.
            let default = ComponentNode::element("ol")
                .with_children(resolve_children(content.as_deref().unwrap_or_default(), options));
            Some(apply_override(
                default,
                run_attr(schema.nodes.ordered_list.as_ref(), attrs),
            ))
        }
        Node::ListItem { content } => {
            let children = content
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(|child| match child {
                    // A list item never nests a paragraph element: the
                    // paragraph's own children surface directly in the item's
                    // child slot. An empty paragraph becomes an empty string,
                    // not a line break.
                    Node::Paragraph { content } => Some(match content {
                        Some(inner) => ComponentNode::default()
                            .with_children(resolve_children(inner, options)),
                        None => ComponentNode::default().with_text(""),
                    }),
                    other => resolve_node(other, options),
                })
                .collect();
            let default = ComponentNode::element("li").with_children(children);
            Some(apply_override(default, run(schema.nodes.list_item.as_ref())))
        }
        Node::Image { attrs } => {
            // Only src/alt feed the default; the override sees the full attrs.
            let mut default = ComponentNode::element("img").with_prop("src", attrs.src.clone());
            if let Some(alt) = &attrs.alt {
                default = default.with_prop("alt", alt.clone());
            }
            Some(apply_override(default, run_attr(schema.nodes.image.as_ref(), attrs)))
        }
        Node::CodeBlock { attrs, content } => {
            let default = ComponentNode::element("pre")
                .with_prop("class", attrs.class.clone())
                .with_children(resolve_children(content.as_deref().unwrap_or_default(), options));
            Some(apply_override(
                default,
                run_attr(schema.nodes.code_block.as_ref(), attrs),
            ))
        }
        Node::Emoji { attrs } => {
            // Bare content: the literal glyph. Name and fallback image are
            // for overrides.
            let default = ComponentNode::text(attrs.emoji.clone());
            Some(apply_override(default, run_attr(schema.nodes.emoji.as_ref(), attrs)))
        }
        Node::Blok { attrs } => {
            let resolver = options.blok_resolver.as_ref()?;
            Some(ComponentNode::default().with_children(
                attrs.body.iter().map(|blok| Some(resolver(blok))).collect(),
            ))
        }
        Node::Table { content } => {
            let default = ComponentNode::element("table")
                .with_children(resolve_children(content.as_deref().unwrap_or_default(), options));
            Some(apply_override(default, run(schema.nodes.table.as_ref())))
        }
        Node::TableRow { content } => {
            let default = ComponentNode::element("tr")
                .with_children(resolve_children(content.as_deref().unwrap_or_default(), options));
            Some(apply_override(default, run(schema.nodes.table_row.as_ref())))
        }
        Node::TableHeader { attrs, content } => {
            let default = ComponentNode::element("th")
                .with_children(resolve_children(content.as_deref().unwrap_or_default(), options));
            Some(apply_override(
                default,
                run_attr(schema.nodes.table_header.as_ref(), attrs),
            ))
        }
        Node::TableCell { attrs, content } => {
            let default = ComponentNode::element("td")
                .with_children(resolve_children(content.as_deref().unwrap_or_default(), options));
            Some(apply_override(
                default,
                run_attr(schema.nodes.table_cell.as_ref(), attrs),
            ))
        }
        Node::Unknown => {
            tracing::warn!("unrecognized rich text node, producing no output");
            None
        }
    }
}

fn resolve_children(nodes: &[Node], options: &ResolveOptions) -> ResolvedChildren {
    nodes.iter().map(|node| resolve_node(node, options)).collect()
}

/// Resolve a text node, folding its marks around the base text entry in
/// list order (first mark innermost, last mark outermost).
fn resolve_text(
    text: &str,
    marks: Option<&[richtext_model::Mark]>,
    options: &ResolveOptions,
) -> ComponentNode {
    let schema = &options.schema;
    let resolver_result = run(schema.nodes.text.as_ref());

    if let Some(marks) = marks {
        let mut base = ComponentNode::text(text);
        if let Some(text_resolver) = &options.text_resolver {
            base = base.merged_with(text_resolver(text));
        }
        // Each mark wraps the accumulated result, so the final mark in the
        // list becomes the outermost wrapper.
        let mut marked: ResolvedChildren = vec![Some(base)];
        for mark in marks {
            marked = vec![Some(resolve_mark(marked, mark, schema))];
        }
        return apply_override(
            ComponentNode::default().with_children(marked),
            resolver_result,
        );
    }

    let text_resolver_result = options.text_resolver.as_ref().map(|f| f(text));
    match (resolver_result, text_resolver_result) {
        // When both produce a component, the node override wins the top slot
        // and the text resolver's result becomes the sole nested entry.
        (Some(resolver_result), Some(text_resolver_result)) => ComponentNode {
            component: resolver_result.component,
            props: resolver_result.props,
            content: Some(Content::Nodes(vec![Some(text_resolver_result)])),
        },
        (resolver_result, text_resolver_result) => {
            let mut node = ComponentNode::text(text);
            if let Some(text_resolver_result) = text_resolver_result {
                node = node.merged_with(text_resolver_result);
            }
            if let Some(resolver_result) = resolver_result {
                node = node.merged_with(resolver_result);
            }
            node
        }
    }
}
