//! HTML to plain text reduction

use scraper::{ElementRef, Html, Node, Selector};

/// Tags whose entire subtree is ignored
const SKIP_TAGS: [&str; 10] = [
    "head", "script", "style", "noscript", "svg", "template", "nav", "footer", "header", "aside",
];

/// Extract readable text from an HTML document.
///
/// Sections in priority order, separated by a blank line: `<title>`, the
/// meta description, then the visible body text with page chrome removed.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut sections: Vec<String> = Vec::new();

    if let Some(title) = select_first(&document, "title").map(element_text)
        && !title.is_empty()
    {
        sections.push(title);
    }

    if let Some(description) = meta_description(&document)
        && !sections.contains(&description)
    {
        sections.push(description);
    }

    let root = select_first(&document, "body").unwrap_or_else(|| document.root_element());
    let body = clean_whitespace(&collect_element_text(root).join("\n"));
    if !body.is_empty() {
        sections.push(body);
    }

    sections.join("\n\n")
}

fn select_first<'a>(document: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(css).ok()?;
    document.select(&selector).next()
}

/// `<meta name="description">`, falling back to `og:description`
fn meta_description(document: &Html) -> Option<String> {
    let selector = Selector::parse("meta").ok()?;
    let metas: Vec<ElementRef> = document.select(&selector).collect();

    let content_of = |attr: &str, key: &str| {
        metas.iter().find_map(|meta| {
            let el = meta.value();
            el.attr(attr)
                .filter(|v| v.eq_ignore_ascii_case(key))
                .and(el.attr("content"))
                .map(clean_whitespace)
                .filter(|c| !c.is_empty())
        })
    };

    content_of("name", "description").or_else(|| content_of("property", "og:description"))
}

fn element_text(element: ElementRef) -> String {
    clean_whitespace(&element.text().collect::<Vec<_>>().join(" "))
}

/// Recursively collect text nodes, skipping [`SKIP_TAGS`] subtrees
fn collect_element_text(element: ElementRef) -> Vec<String> {
    if SKIP_TAGS.contains(&element.value().name()) {
        return Vec::new();
    }

    let mut parts = Vec::new();
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let t = text.trim();
                if !t.is_empty() {
                    parts.push(t.to_string());
                }
            }
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    parts.extend(collect_element_text(child_el));
                }
            }
            _ => {}
        }
    }
    parts
}

/// Collapse runs of spaces and cap blank lines at one
fn clean_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_was_whitespace = false;
    let mut newline_count = 0;

    for ch in text.chars() {
        if ch == '\n' {
            newline_count += 1;
            if newline_count <= 2 {
                result.push('\n');
            }
            prev_was_whitespace = true;
        } else if ch.is_whitespace() {
            if !prev_was_whitespace {
                result.push(' ');
            }
            prev_was_whitespace = true;
        } else {
            result.push(ch);
            prev_was_whitespace = false;
            newline_count = 0;
        }
    }

    result.trim().to_string()
}
