use crate::parsers::text::escape;
use scraper::{ElementRef, Html, Node};

/// Elements that never have children or a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Renders a parsed document as an indented tree, one node per line
///
/// Each nesting level adds one space. Whitespace-only text nodes are
/// skipped and the remaining text is trimmed.
pub fn prettify(doc: &Html) -> String {
    let mut out = String::new();
    for child in doc.tree.root().children() {
        match ElementRef::wrap(child) {
            Some(element) => write_element(element, 0, &mut out),
            None => write_leaf(child.value(), 0, &mut out),
        }
    }
    out
}

fn write_element(element: ElementRef<'_>, depth: usize, out: &mut String) {
    let value = element.value();
    let name = value.name();

    let mut open = format!("<{}", name);
    for (key, val) in value.attrs() {
        open.push_str(&format!(" {}=\"{}\"", key, escape(val, true)));
    }

    if VOID_ELEMENTS.contains(&name) {
        push_line(out, depth, &format!("{}/>", open));
        return;
    }

    open.push('>');
    push_line(out, depth, &open);

    for child in element.children() {
        match ElementRef::wrap(child) {
            Some(child_element) => write_element(child_element, depth + 1, out),
            None => write_leaf(child.value(), depth + 1, out),
        }
    }

    push_line(out, depth, &format!("</{}>", name));
}

fn write_leaf(node: &Node, depth: usize, out: &mut String) {
    match node {
        Node::Text(text) => {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                push_line(out, depth, &escape(trimmed, false));
            }
        }
        Node::Comment(comment) => push_line(out, depth, &format!("<!--{}-->", &**comment)),
        Node::Doctype(doctype) => push_line(out, depth, &format!("<!DOCTYPE {}>", doctype.name())),
        _ => {}
    }
}

fn push_line(out: &mut String, depth: usize, line: &str) {
    out.extend(std::iter::repeat_n(' ', depth));
    out.push_str(line);
    out.push('\n');
}
