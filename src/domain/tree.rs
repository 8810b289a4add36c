//! Tree handle owning a single root node.

use tracing::instrument;

use crate::domain::node::TreeNode;

/// Ordered n-ary tree of [`TreeNode`]s.
///
/// The tree is the sole owner of the node graph reachable from its root.
/// Installing a root always stamps it at depth 0, which cascades through the
/// whole subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<T> {
    root: Option<TreeNode<T>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Create a tree rooted at `root`.
    pub fn with_root(root: TreeNode<T>) -> Self {
        let mut tree = Self::new();
        tree.set_root(root);
        tree
    }

    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_ref()
    }

    pub fn root_mut(&mut self) -> Option<&mut TreeNode<T>> {
        self.root.as_mut()
    }

    /// Replace the root; the previous subtree is dropped.
    pub fn set_root(&mut self, mut root: TreeNode<T>) {
        root.set_depth(0);
        self.root = Some(root);
    }

    /// Detach and return the root, leaving the tree empty.
    pub fn take_root(&mut self) -> Option<TreeNode<T>> {
        self.root.take()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Total number of nodes, root included.
    pub fn len(&self) -> usize {
        self.root
            .as_ref()
            .map(|root| 1 + root.subtree_size())
            .unwrap_or(0)
    }

    /// Depth-first pre-order iterator: node before its children, children in order.
    pub fn iter(&self) -> PreOrderIter<'_, T> {
        PreOrderIter::new(self)
    }

    /// Depth of the deepest node, `None` for an empty tree.
    pub fn height(&self) -> Option<usize> {
        self.iter().map(TreeNode::depth).max()
    }

    /// All nodes in pre-order.
    #[instrument(level = "trace", skip(self))]
    pub fn to_list(&self) -> Vec<&TreeNode<T>> {
        self.iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a TreeNode<T>;
    type IntoIter = PreOrderIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct PreOrderIter<'a, T> {
    stack: Vec<&'a TreeNode<T>>,
}

impl<'a, T> PreOrderIter<'a, T> {
    fn new(tree: &'a Tree<T>) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push(root);
        }
        Self { stack }
    }
}

impl<'a, T> Iterator for PreOrderIter<'a, T> {
    type Item = &'a TreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        for child in current.children().iter().rev() {
            self.stack.push(child);
        }
        Some(current)
    }
}
