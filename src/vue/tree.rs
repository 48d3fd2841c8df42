//! Instance tree traversal
//!
//! Two walks over two different trees:
//!
//! 1. The *DOM* walk locates the first node carrying a Vue instance
//!    back-reference. Vue attaches its root instance to exactly one DOM node
//!    per mounted app, so a pre-order depth-first scan from the document
//!    finds it wherever the app was mounted.
//! 2. The *component* walk follows child-instance links (not DOM children)
//!    and matches a [`ComponentPath`] with a per-branch token cursor. A
//!    token may be satisfied at any descendant depth; every branch is
//!    traversed so repeated sibling structures each yield a match.

use crate::selector::path::ComponentPath;

/// One mounted Vue component instance
///
/// The adapter supplying this trait translates the real framework shape
/// (`$el`, `$children`, `$options`) into a stable interface, isolating
/// version-shape differences from the matching algorithm.
pub trait ComponentInstance: Sized {
    /// Handle to the instance's rendered root DOM element
    type Element: Clone;

    /// Identifying tag name: explicit name, registered tag or source file,
    /// in that order; empty when none is present
    fn tag(&self) -> &str;

    /// The instance's rendered root element
    fn root_element(&self) -> Self::Element;

    /// Child instances in document order
    fn children(&self) -> &[Self];
}

/// One DOM node as seen by the root-instance scan
pub trait DomNode: Sized {
    /// Component instance type attached to nodes of this DOM
    type Instance: ComponentInstance;

    /// The framework instance back-reference, when this node carries one
    fn attached_instance(&self) -> Option<&Self::Instance>;

    /// Child nodes in document order
    fn child_nodes(&self) -> &[Self];
}

/// Find the first root instance in document order
///
/// Pre-order depth-first over the DOM; the document node itself is never
/// tested, only its descendants. Returns `None` when no instance is mounted,
/// which is a legitimate state rather than an error.
pub fn find_first_root_instance<N: DomNode>(document: &N) -> Option<&N::Instance> {
    for child in document.child_nodes() {
        if let Some(instance) = child.attached_instance() {
            return Some(instance);
        }
        if let Some(instance) = find_first_root_instance(child) {
            return Some(instance);
        }
    }

    None
}

/// Find every component instance whose ancestor chain satisfies the path
///
/// Returns the matched instances' root elements in traversal order
/// (depth-first, root to leaves, siblings in document order). An empty path
/// matches nothing. Matching stops descending below a fully-matched
/// instance, but all sibling branches are still traversed.
pub fn find_matching_components<I: ComponentInstance>(
    root: &I,
    path: &ComponentPath,
) -> Vec<I::Element> {
    let mut found = Vec::new();
    walk_component(root, 0, path, &mut found);
    found
}

fn walk_component<I: ComponentInstance>(
    node: &I,
    cursor: usize,
    path: &ComponentPath,
    found: &mut Vec<I::Element>,
) {
    let mut cursor = cursor;

    if path.token(cursor) == Some(node.tag()) {
        if path.is_last(cursor) {
            found.push(node.root_element());
            return;
        }
        cursor += 1;
    }

    for child in node.children() {
        walk_component(child, cursor, path, found);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vue::snapshot::{ComponentSnapshot, DomSnapshot, ElementHandle};

    fn component(tag: &str, ref_index: usize, children: Vec<ComponentSnapshot>) -> ComponentSnapshot {
        ComponentSnapshot {
            tag: tag.to_string(),
            ref_index,
            children,
        }
    }

    fn dom(instance: Option<ComponentSnapshot>, children: Vec<DomSnapshot>) -> DomSnapshot {
        DomSnapshot { instance, children }
    }

    fn matched_refs(root: &ComponentSnapshot, selector: &str) -> Vec<usize> {
        find_matching_components(root, &ComponentPath::parse(selector))
            .into_iter()
            .map(|handle: ElementHandle| handle.ref_index)
            .collect()
    }

    #[test]
    fn test_first_root_instance_pre_order() {
        // The instance sits deep in the second branch; an earlier shallow
        // branch has none.
        let document = dom(
            None,
            vec![
                dom(None, vec![dom(None, vec![])]),
                dom(None, vec![dom(Some(component("app", 0, vec![])), vec![])]),
            ],
        );

        let root = find_first_root_instance(&document).unwrap();
        assert_eq!(root.tag(), "app");
    }

    #[test]
    fn test_first_root_instance_prefers_earlier_branch() {
        let document = dom(
            None,
            vec![
                dom(Some(component("first", 0, vec![])), vec![]),
                dom(Some(component("second", 1, vec![])), vec![]),
            ],
        );

        let root = find_first_root_instance(&document).unwrap();
        assert_eq!(root.tag(), "first");
    }

    #[test]
    fn test_no_root_instance() {
        let document = dom(None, vec![dom(None, vec![]), dom(None, vec![])]);
        assert!(find_first_root_instance(&document).is_none());
    }

    #[test]
    fn test_single_token_matches_at_any_depth() {
        let root = component(
            "app",
            0,
            vec![component(
                "layout",
                1,
                vec![component("card", 2, vec![])],
            )],
        );

        assert_eq!(matched_refs(&root, "card"), vec![2]);
    }

    #[test]
    fn test_root_itself_can_match() {
        let root = component("app", 0, vec![]);
        assert_eq!(matched_refs(&root, "app"), vec![0]);
    }

    #[test]
    fn test_descendants_need_not_be_direct_children() {
        // "a b": the b sits two unrelated components below the a.
        let root = component(
            "app",
            0,
            vec![component(
                "a",
                1,
                vec![component(
                    "wrapper",
                    2,
                    vec![component("inner", 3, vec![component("b", 4, vec![])])],
                )],
            )],
        );

        assert_eq!(matched_refs(&root, "a b"), vec![4]);
    }

    #[test]
    fn test_descendant_without_matching_ancestor_is_excluded() {
        // One b under an a, one b with no a anywhere above it.
        let root = component(
            "app",
            0,
            vec![
                component("a", 1, vec![component("b", 2, vec![])]),
                component("other", 3, vec![component("b", 4, vec![])]),
            ],
        );

        assert_eq!(matched_refs(&root, "a b"), vec![2]);
    }

    #[test]
    fn test_sibling_matches_in_document_order() {
        let root = component(
            "app",
            0,
            vec![component(
                "list",
                1,
                vec![component("item", 2, vec![]), component("item", 3, vec![])],
            )],
        );

        assert_eq!(matched_refs(&root, "list item"), vec![2, 3]);
    }

    #[test]
    fn test_match_stops_descending_that_branch() {
        // A matched item containing another item: only the outer one is
        // recorded, because the walk stops below a full match.
        let root = component(
            "app",
            0,
            vec![component(
                "list",
                1,
                vec![component("item", 2, vec![component("item", 3, vec![])])],
            )],
        );

        assert_eq!(matched_refs(&root, "list item"), vec![2]);
    }

    #[test]
    fn test_repeated_token_path() {
        // "item item" requires a nested item below an item.
        let root = component(
            "app",
            0,
            vec![component(
                "item",
                1,
                vec![component("item", 2, vec![component("item", 3, vec![])])],
            )],
        );

        assert_eq!(matched_refs(&root, "item item"), vec![2]);
    }

    #[test]
    fn test_empty_path_matches_nothing() {
        let root = component("app", 0, vec![component("item", 1, vec![])]);
        assert!(matched_refs(&root, "   ").is_empty());
    }

    #[test]
    fn test_unnamed_components_never_match() {
        let root = component("app", 0, vec![component("", 1, vec![])]);
        assert!(matched_refs(&root, "anonymous").is_empty());
    }
}
