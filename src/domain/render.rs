//! Human-readable views of a tree.

use itertools::Itertools;
use termtree::Tree as TermTree;

use crate::domain::codec::{NodeMap, TAGNAME_KEY};
use crate::domain::node::TreeNode;
use crate::domain::tree::Tree;

/// Conversion into a `termtree` rendering.
pub trait TreeRender {
    fn to_term_tree(&self) -> TermTree<String>;
}

impl TreeRender for Tree<NodeMap> {
    fn to_term_tree(&self) -> TermTree<String> {
        match self.root() {
            Some(root) => build_term_tree(root),
            None => TermTree::new("Empty tree".to_string()),
        }
    }
}

fn build_term_tree(node: &TreeNode<NodeMap>) -> TermTree<String> {
    let leaves: Vec<_> = node.children().iter().map(build_term_tree).collect();
    TermTree::new(node_label(node)).with_leaves(leaves)
}

/// Label of a node: the tag followed by its other entries, e.g.
/// `item [color=red, id=5]`.
pub fn node_label(node: &TreeNode<NodeMap>) -> String {
    let Some(data) = node.data() else {
        return "<no data>".to_string();
    };
    let tag = data.get(TAGNAME_KEY).map(String::as_str).unwrap_or("?");
    let entries = data
        .iter()
        .filter(|(key, _)| key.as_str() != TAGNAME_KEY)
        .map(|(key, value)| format!("{}={}", key, value))
        .join(", ");
    if entries.is_empty() {
        tag.to_string()
    } else {
        format!("{} [{}]", tag, entries)
    }
}

/// Flat pre-order listing, one line per node indented by depth.
pub fn list_lines(tree: &Tree<NodeMap>) -> Vec<String> {
    tree.iter()
        .map(|node| format!("{}{}", "  ".repeat(node.depth()), node_label(node)))
        .collect()
}
