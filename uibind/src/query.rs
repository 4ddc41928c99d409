use crate::element::{Content, Element};

/// Predicate over the class lists of a tree, covering the two selector
/// shapes the wiring contract uses: a bare class and a two-level
/// descendant pair (`.ancestor .descendant`, any depth between).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Class(String),
    Descendant { ancestor: String, descendant: String },
}

impl Selector {
    pub fn class(name: impl Into<String>) -> Self {
        Self::Class(name.into())
    }

    pub fn descendant(ancestor: impl Into<String>, descendant: impl Into<String>) -> Self {
        Self::Descendant {
            ancestor: ancestor.into(),
            descendant: descendant.into(),
        }
    }
}

/// Collect the IDs of all elements matching the selector, in document order.
pub fn query_all(root: &Element, selector: &Selector) -> Vec<String> {
    let mut result = Vec::new();
    match selector {
        Selector::Class(name) => collect_class(root, name, &mut result),
        Selector::Descendant {
            ancestor,
            descendant,
        } => collect_descendant(root, ancestor, descendant, false, &mut result),
    }
    result
}

fn collect_class(element: &Element, name: &str, result: &mut Vec<String>) {
    if element.has_class(name) {
        result.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_class(child, name, result);
        }
    }
}

fn collect_descendant(
    element: &Element,
    ancestor: &str,
    descendant: &str,
    under_ancestor: bool,
    result: &mut Vec<String>,
) {
    // Strict descendant: the ancestor class on the element itself does
    // not qualify it, only its subtree.
    if under_ancestor && element.has_class(descendant) {
        result.push(element.id.clone());
    }
    let under_ancestor = under_ancestor || element.has_class(ancestor);
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_descendant(child, ancestor, descendant, under_ancestor, result);
        }
    }
}

/// Find the nearest ancestor-or-self of `id` carrying `class`.
/// Returns None if `id` is not in the tree or no such ancestor exists.
pub fn closest(root: &Element, id: &str, class: &str) -> Option<String> {
    let mut path: Vec<&Element> = Vec::new();
    if !find_path(root, id, &mut path) {
        return None;
    }
    path.iter()
        .rev()
        .find(|el| el.has_class(class))
        .map(|el| el.id.clone())
}

/// IDs from `id` up to the root, innermost first.
/// Empty when `id` is not in the tree.
pub fn ancestor_chain(root: &Element, id: &str) -> Vec<String> {
    let mut path: Vec<&Element> = Vec::new();
    if !find_path(root, id, &mut path) {
        return Vec::new();
    }
    path.iter().rev().map(|el| el.id.clone()).collect()
}

fn find_path<'a>(element: &'a Element, id: &str, path: &mut Vec<&'a Element>) -> bool {
    path.push(element);
    if element.id == id {
        return true;
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            if find_path(child, id, path) {
                return true;
            }
        }
    }
    path.pop();
    false
}
