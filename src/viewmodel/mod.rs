//! Display decoration of the change tree.
//!
//! The canonical [`TreeNode`](crate::model::TreeNode) arrives from the
//! engine and is never mutated; this module derives a parallel
//! decorated tree carrying display titles, icon kinds, and HTTP verb
//! tagging. The transform is pure and idempotent, so revisiting the
//! same tree after a revision switch always yields the same result.

use crate::model::{Change, ChangeKind, TreeNode};

/// Icon category for a change-carrying leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeIcon {
    Edited,
    Added,
    Removed,
    None,
}

impl ChangeIcon {
    fn for_change(change: &Change) -> Self {
        match change.kind {
            ChangeKind::Modified => Self::Edited,
            ChangeKind::PropertyAdded | ChangeKind::ObjectAdded => Self::Added,
            ChangeKind::ObjectRemoved | ChangeKind::PropertyRemoved => Self::Removed,
        }
    }

    /// Single-character glyph for terminal rendering.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Edited => "~",
            Self::Added => "+",
            Self::Removed => "-",
            Self::None => " ",
        }
    }
}

/// Display view of one tree node.
#[derive(Debug, Clone)]
pub struct DecoratedNode {
    pub key: String,
    pub title: String,
    pub icon: ChangeIcon,
    pub breaking: bool,
    pub total_changes: u32,
    pub breaking_changes: u32,
    pub is_verb: bool,
    pub change: Option<Change>,
    pub children: Vec<DecoratedNode>,
}

impl DecoratedNode {
    /// True when the node has children.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Titles longer than this fall back to the bare node title.
const MAX_DECORATED_TITLE: usize = 40;

/// Build the decorated view of a tree without touching the original.
#[must_use]
pub fn decorate(node: &TreeNode) -> DecoratedNode {
    let carried = node.carried_change();
    DecoratedNode {
        key: node.key.clone(),
        title: display_title(node),
        icon: carried.map_or(ChangeIcon::None, ChangeIcon::for_change),
        breaking: carried.is_some_and(|c| c.breaking),
        total_changes: node.total_changes,
        breaking_changes: node.breaking_changes,
        is_verb: is_http_verb(&node.title_string),
        change: carried.cloned(),
        children: node.children().iter().map(decorate).collect(),
    }
}

/// Derive the display title: "<title>: <new value>" for a change with
/// a new value, unless the combination grows unreadably long.
fn display_title(node: &TreeNode) -> String {
    let base = node.title_string.as_str();
    if let Some(change) = &node.change {
        if let Some(new_value) = &change.new {
            let combined = format!("{base}: {new_value}");
            if combined.chars().count() <= MAX_DECORATED_TITLE {
                return combined;
            }
        }
    }
    base.to_string()
}

/// HTTP verbs get dedicated styling in path subtrees.
#[must_use]
pub fn is_http_verb(prop: &str) -> bool {
    matches!(
        prop.to_lowercase().as_str(),
        "get" | "put" | "post" | "delete" | "patch" | "options" | "head" | "trace"
    )
}

/// One visible row of the flattened tree, paired with its indent depth.
#[derive(Debug, Clone, Copy)]
pub struct TreeRow<'a> {
    pub node: &'a DecoratedNode,
    pub depth: usize,
    pub expanded: bool,
}

/// Flatten the visible portion of a decorated tree in pre-order.
///
/// A node's children are visible only while its key appears in
/// `expanded_keys`; the root itself is always visible.
#[must_use]
pub fn flatten_visible<'a>(root: &'a DecoratedNode, expanded_keys: &[String]) -> Vec<TreeRow<'a>> {
    let mut rows = Vec::new();
    push_rows(root, 0, expanded_keys, &mut rows);
    rows
}

fn push_rows<'a>(
    node: &'a DecoratedNode,
    depth: usize,
    expanded_keys: &[String],
    rows: &mut Vec<TreeRow<'a>>,
) {
    let expanded = expanded_keys.iter().any(|k| k == &node.key);
    rows.push(TreeRow {
        node,
        depth,
        expanded,
    });
    if expanded {
        for child in &node.children {
            push_rows(child, depth + 1, expanded_keys, rows);
        }
    }
}

/// Every key in the tree, for an expand-all default.
#[must_use]
pub fn all_keys(root: &TreeNode) -> Vec<String> {
    let mut keys = Vec::new();
    root.walk(&mut |node| {
        if node.has_children() {
            keys.push(node.key.clone());
        }
    });
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChangeContext;

    fn change_leaf(key: &str, title: &str, kind: ChangeKind, new: Option<&str>) -> TreeNode {
        TreeNode {
            key: key.to_string(),
            title_string: title.to_string(),
            is_leaf: true,
            total_changes: 1,
            breaking_changes: 0,
            change: Some(Change {
                breaking: false,
                kind,
                property: title.to_string(),
                original: None,
                new: new.map(String::from),
                context: ChangeContext::default(),
            }),
            children: None,
        }
    }

    fn sample_tree() -> TreeNode {
        TreeNode {
            key: "root".into(),
            title_string: "document".into(),
            is_leaf: false,
            total_changes: 2,
            breaking_changes: 0,
            change: None,
            children: Some(vec![
                change_leaf("t", "title", ChangeKind::Modified, Some("New API")),
                change_leaf("d", "description", ChangeKind::PropertyAdded, None),
            ]),
        }
    }

    #[test]
    fn test_decoration_does_not_mutate_source() {
        let tree = sample_tree();
        let before = tree.clone();
        let _ = decorate(&tree);
        assert_eq!(tree, before);
    }

    #[test]
    fn test_decoration_is_idempotent() {
        let tree = sample_tree();
        let first = decorate(&tree);
        let second = decorate(&tree);
        assert_eq!(first.title, second.title);
        assert_eq!(first.children.len(), second.children.len());
        assert_eq!(first.children[0].title, second.children[0].title);
    }

    #[test]
    fn test_title_appends_new_value() {
        let decorated = decorate(&sample_tree());
        assert_eq!(decorated.children[0].title, "title: New API");
    }

    #[test]
    fn test_long_title_falls_back() {
        let leaf = change_leaf(
            "u",
            "url",
            ChangeKind::Modified,
            Some("https://an-extremely-long-server-url.example.com/v2"),
        );
        let decorated = decorate(&leaf);
        assert_eq!(decorated.title, "url");
    }

    #[test]
    fn test_icons_by_kind() {
        let decorated = decorate(&sample_tree());
        assert_eq!(decorated.icon, ChangeIcon::None);
        assert_eq!(decorated.children[0].icon, ChangeIcon::Edited);
        assert_eq!(decorated.children[1].icon, ChangeIcon::Added);
    }

    #[test]
    fn test_verb_detection() {
        assert!(is_http_verb("get"));
        assert!(is_http_verb("POST"));
        assert!(!is_http_verb("title"));
        assert!(!is_http_verb(""));
    }

    #[test]
    fn test_flatten_respects_expansion() {
        let decorated = decorate(&sample_tree());

        let collapsed = flatten_visible(&decorated, &[]);
        assert_eq!(collapsed.len(), 1);
        assert_eq!(collapsed[0].node.key, "root");
        assert!(!collapsed[0].expanded);

        let expanded = flatten_visible(&decorated, &["root".to_string()]);
        assert_eq!(expanded.len(), 3);
        assert_eq!(expanded[1].depth, 1);
    }

    #[test]
    fn test_all_keys_returns_internal_nodes() {
        let keys = all_keys(&sample_tree());
        assert_eq!(keys, vec!["root".to_string()]);
    }
}
