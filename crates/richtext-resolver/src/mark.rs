//! Mark resolution: wraps already-resolved content in a mark's rendering.

use richtext_model::{ComponentNode, LinkAttrs, LinkTarget, LinkType, Mark, Props, ResolvedChildren};
use serde_json::Value;

use crate::schema::{Schema, apply_override, run, run_attr};

/// Wrap already-resolved `content` in the given mark's rendering.
///
/// The default per-mark component is an HTML tag (`b`, `i`, `u`, `s`, `sup`,
/// `sub`, `code`, `span`, `a`); a matching [`Schema`] mark override is
/// shallow-merged over it. An unrecognized mark wraps transparently: the
/// content is kept but no component is emitted.
pub fn resolve_mark(content: ResolvedChildren, mark: &Mark, schema: &Schema) -> ComponentNode {
    let marks = &schema.marks;
    let (default, overrides) = match mark {
        Mark::Bold => (ComponentNode::element("b"), run(marks.bold.as_ref())),
        Mark::Italic => (ComponentNode::element("i"), run(marks.italic.as_ref())),
        Mark::Underline => (ComponentNode::element("u"), run(marks.underline.as_ref())),
        Mark::Strike => (ComponentNode::element("s"), run(marks.strike.as_ref())),
        Mark::Superscript => (
            ComponentNode::element("sup"),
            run(marks.superscript.as_ref()),
        ),
        Mark::Subscript => (ComponentNode::element("sub"), run(marks.subscript.as_ref())),
        Mark::Code => (ComponentNode::element("code"), run(marks.code.as_ref())),
        Mark::Anchor { attrs } => (
            ComponentNode::element("span").with_prop("id", attrs.id.clone()),
            run_attr(marks.anchor.as_ref(), attrs),
        ),
        Mark::Styled { attrs } => (
            ComponentNode::element("span").with_prop("class", attrs.class.clone()),
            run_attr(marks.styled.as_ref(), attrs),
        ),
        Mark::TextStyle { attrs } => (
            ComponentNode::element("span").with_props(style_props("color", &attrs.color)),
            run_attr(marks.text_style.as_ref(), attrs),
        ),
        Mark::Highlight { attrs } => (
            ComponentNode::element("span").with_props(style_props("backgroundColor", &attrs.color)),
            run_attr(marks.highlight.as_ref(), attrs),
        ),
        Mark::Link { attrs } => (
            // The override receives the original attrs, not the normalized props.
            ComponentNode::element("a").with_props(normalized_link_props(attrs)),
            run_attr(marks.link.as_ref(), attrs),
        ),
        Mark::Unknown => {
            tracing::warn!("unrecognized rich text mark, leaving content unwrapped");
            (ComponentNode::default(), None)
        }
    };

    apply_override(default.with_children(content), overrides)
}

/// Build the default link props from the authored attrs.
///
/// A pure transform of the mark's attrs into markup-ready props:
/// - `email` links get a `mailto:` href prefix
/// - a non-empty `anchor` is consumed into the href as a fragment
/// - `uuid` and `linktype` are internal bookkeeping and never emitted
/// - a `_self` target is the implicit default and is dropped
/// - `custom` and `story` data pass through untouched
fn normalized_link_props(attrs: &LinkAttrs) -> Props {
    let mut props = Props::new();

    let mut href = attrs.href.clone();
    if attrs.linktype.unwrap_or_default() == LinkType::Email {
        href = format!("mailto:{href}");
    }
    match attrs.anchor.as_deref() {
        Some(anchor) if !anchor.is_empty() => {
            href = format!("{href}#{anchor}");
        }
        Some(empty) => {
            props.insert("anchor".to_owned(), Value::String(empty.to_owned()));
        }
        None => {}
    }
    props.insert("href".to_owned(), Value::String(href));

    if let Some(custom) = &attrs.custom {
        props.insert("custom".to_owned(), Value::Object(custom.clone()));
    }
    if let Some(target) = attrs.target.filter(|target| *target != LinkTarget::SameTab) {
        props.insert("target".to_owned(), Value::String(target.as_str().to_owned()));
    }
    if let Some(story) = &attrs.story {
        props.insert("story".to_owned(), Value::Object(story.clone()));
    }

    props
}

fn style_props(key: &str, value: &str) -> Props {
    let mut style = Props::new();
    style.insert(key.to_owned(), Value::String(value.to_owned()));
    let mut props = Props::new();
    props.insert("style".to_owned(), Value::Object(style));
    props
}
