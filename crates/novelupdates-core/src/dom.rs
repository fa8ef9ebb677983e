//! Small DOM query helpers shared by the page parsers.
//!
//! These wrap `scraper` so parsers can read like a list of lookups. Selector
//! strings are written by us, so a selector that fails to parse is reported
//! as `ParseError` rather than panicking.

use scraper::node::Node;
use scraper::{ElementRef, Selector};

use crate::error::{NovelUpdatesError, Result};

/// Compile a CSS selector.
pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| NovelUpdatesError::ParseError(format!("Invalid selector {:?}: {:?}", css, e)))
}

/// First descendant of `scope` matching `css`.
pub fn find_one<'a>(scope: ElementRef<'a>, css: &str) -> Result<Option<ElementRef<'a>>> {
    let selector = selector(css)?;
    let found = scope.select(&selector).next();
    Ok(found)
}

/// All descendants of `scope` matching `css`, in document order.
pub fn find_all<'a>(scope: ElementRef<'a>, css: &str) -> Result<Vec<ElementRef<'a>>> {
    let selector = selector(css)?;
    let found = scope.select(&selector).collect();
    Ok(found)
}

/// Like [`find_one`] but a missing match is an `ElementNotFound` error.
pub fn require<'a>(scope: ElementRef<'a>, css: &str) -> Result<ElementRef<'a>> {
    find_one(scope, css)?.ok_or_else(|| NovelUpdatesError::ElementNotFound(css.to_string()))
}

/// Attribute value, or an empty string when the attribute is absent.
pub fn attr(element: ElementRef<'_>, name: &str) -> String {
    element.value().attr(name).unwrap_or_default().to_string()
}

/// Concatenated text of every descendant text node.
pub fn inner_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Text of `element` with the subtrees rooted at `excluded` left out.
pub fn text_without(element: ElementRef<'_>, excluded: &[ElementRef<'_>]) -> String {
    let excluded: Vec<_> = excluded.iter().map(|e| e.id()).collect();
    let mut text = String::new();
    for node in element.descendants() {
        if let Some(fragment) = node.value().as_text() {
            if !node.ancestors().any(|a| excluded.contains(&a.id())) {
                text.push_str(fragment);
            }
        }
    }
    text
}

/// Text of `element` skipping every descendant matching one of `excluded_css`.
pub fn inner_text_excluding(element: ElementRef<'_>, excluded_css: &[&str]) -> Result<String> {
    let mut excluded = Vec::new();
    for css in excluded_css {
        excluded.extend(find_all(element, css)?);
    }
    Ok(text_without(element, &excluded))
}

/// First direct text child that is not only whitespace.
pub fn first_text_child(element: ElementRef<'_>) -> Option<String> {
    element
        .children()
        .filter_map(|child| child.value().as_text())
        .map(|text| (**text).to_owned())
        .find(|text| !text.trim().is_empty())
}

/// Text of the first following sibling that is a text node.
pub fn next_text_sibling(element: ElementRef<'_>) -> Option<String> {
    element
        .next_siblings()
        .find_map(|sibling| sibling.value().as_text().map(|text| (**text).to_owned()))
}

/// Text of each direct child, skipping `<br>` elements and comments.
pub fn child_texts(element: ElementRef<'_>) -> Vec<String> {
    let mut texts = Vec::new();
    for child in element.children() {
        match child.value() {
            Node::Text(text) => texts.push((**text).to_owned()),
            Node::Element(el) if el.name() == "br" => {}
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    texts.push(inner_text(child_el));
                }
            }
            _ => {}
        }
    }
    texts
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn fragment(html: &str) -> Html {
        Html::parse_document(html)
    }

    #[test]
    fn test_invalid_selector_is_parse_error() {
        match selector("div[") {
            Err(NovelUpdatesError::ParseError(msg)) => assert!(msg.contains("div[")),
            other => panic!("Expected ParseError, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_require_names_missing_anchor() {
        let doc = fragment("<div></div>");
        match require(doc.root_element(), "div.seriestitlenu") {
            Err(NovelUpdatesError::ElementNotFound(css)) => assert_eq!(css, "div.seriestitlenu"),
            other => panic!("Expected ElementNotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_attr_missing_is_empty() {
        let doc = fragment("<a>x</a>");
        let a = find_one(doc.root_element(), "a").unwrap().unwrap();
        assert_eq!(attr(a, "href"), "");
    }

    #[test]
    fn test_inner_text_excluding_subtrees() {
        let doc = fragment(
            r#"<span class="testhide">Long <b>text</b><span class="morelink list">more</span><p style="margin-top:-5px;">x</p><p style="margin-top:-5px;">y</p> end</span>"#,
        );
        let span = find_one(doc.root_element(), "span.testhide").unwrap().unwrap();
        let text = inner_text_excluding(
            span,
            &["span[class='morelink list']", "p[style='margin-top:-5px;']"],
        )
        .unwrap();
        assert_eq!(text, "Long text end");
    }

    #[test]
    fn test_first_text_child_skips_blank_and_nested() {
        let doc = fragment("<div id=\"b\">\n  <div>title</div>Short blurb<span>more</span></div>");
        let div = find_one(doc.root_element(), "div#b").unwrap().unwrap();
        assert_eq!(first_text_child(div).as_deref(), Some("Short blurb"));
    }

    #[test]
    fn test_next_text_sibling() {
        let doc = fragment("<div><h5>Release Frequency</h5><i>x</i> Every 9 Days <h5>Next</h5></div>");
        let h5 = find_one(doc.root_element(), "h5").unwrap().unwrap();
        assert_eq!(next_text_sibling(h5).as_deref(), Some(" Every 9 Days "));
    }

    #[test]
    fn test_child_texts_skips_breaks() {
        let doc = fragment("<div id=\"a\">One<br>Two<br><br><span>Three</span></div>");
        let div = find_one(doc.root_element(), "div#a").unwrap().unwrap();
        assert_eq!(child_texts(div), vec!["One", "Two", "Three"]);
    }
}
