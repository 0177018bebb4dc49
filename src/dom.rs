//! Generic HTML tree-walk helpers.
//!
//! These functions operate on [`scraper::ElementRef`] nodes and know nothing
//! about any particular page's markup. Site-specific class contracts live in
//! [`crate::scrapers`].

use scraper::ElementRef;

/// Check whether an element's `class` attribute contains an exact token.
///
/// The attribute value is split on whitespace and each token compared
/// verbatim, so `"post"` does not match `class="postWrapper"`.
pub fn has_class(el: ElementRef<'_>, class_name: &str) -> bool {
    el.value()
        .attr("class")
        .map_or(false, |classes| {
            classes.split_whitespace().any(|c| c == class_name)
        })
}

/// First value of the named attribute, or the empty string when absent.
pub fn attr<'a>(el: ElementRef<'a>, key: &str) -> &'a str {
    el.value().attr(key).unwrap_or("")
}

/// All text in the element's subtree, concatenated in document order and
/// trimmed of leading and trailing whitespace.
pub fn text_content(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Collect every descendant element for which `predicate` holds, in
/// depth-first pre-order.
///
/// The traversal does not stop at a match: matching subtrees are walked too,
/// so nested matches are all returned. The start node itself is not a
/// candidate.
pub fn find_descendants<'a>(
    el: ElementRef<'a>,
    predicate: impl Fn(ElementRef<'a>) -> bool,
) -> Vec<ElementRef<'a>> {
    el.descendants()
        .skip(1) // descendants() yields the start node first
        .filter_map(ElementRef::wrap)
        .filter(|&e| predicate(e))
        .collect()
}
