//! Tree node with owned, ordered children and a cached depth.

use crate::domain::error::{DomainError, DomainResult};

/// A single node of a [`Tree`](crate::domain::Tree).
///
/// Every node owns its children exclusively. The cached `depth` always equals
/// the parent's depth plus one: each operation that changes the node's depth
/// or its child list re-stamps the whole subtree before returning.
///
/// A detached node starts at depth 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    data: Option<T>,
    children: Vec<TreeNode<T>>,
    depth: usize,
}

impl<T> Default for TreeNode<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TreeNode<T> {
    /// Create a detached node without data.
    pub fn new() -> Self {
        Self {
            data: None,
            children: Vec::new(),
            depth: 0,
        }
    }

    /// Create a detached node holding `data`.
    pub fn with_data(data: T) -> Self {
        Self {
            data: Some(data),
            children: Vec::new(),
            depth: 0,
        }
    }

    /// Create a detached node without data at an explicit depth.
    pub fn with_depth(depth: usize) -> Self {
        Self {
            data: None,
            children: Vec::new(),
            depth,
        }
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        self.data.as_mut()
    }

    pub fn set_data(&mut self, data: T) {
        self.data = Some(data);
    }

    pub fn take_data(&mut self) -> Option<T> {
        self.data.take()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Set this node's depth and re-stamp every descendant.
    pub fn set_depth(&mut self, depth: usize) {
        self.depth = depth;
        self.reset_child_depths();
    }

    pub fn children(&self) -> &[TreeNode<T>] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&TreeNode<T>> {
        self.children.get(index)
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut TreeNode<T>> {
        self.children.get_mut(index)
    }

    /// Append `child` and stamp its subtree below this node.
    pub fn add_child(&mut self, mut child: TreeNode<T>) {
        child.set_depth(self.depth + 1);
        self.children.push(child);
    }

    /// Insert `child` at `index`, shifting later children.
    ///
    /// `index == child_count()` appends.
    pub fn insert_child_at(&mut self, index: usize, child: TreeNode<T>) -> DomainResult<()> {
        let len = self.children.len();
        if index == len {
            self.add_child(child);
            return Ok(());
        }
        if index > len {
            return Err(DomainError::IndexOutOfRange { index, len });
        }
        self.children.insert(index, child);
        self.reset_child_depths();
        Ok(())
    }

    /// Remove and return the child at `index`.
    ///
    /// Depth does not depend on position, so siblings keep their stamps.
    pub fn remove_child_at(&mut self, index: usize) -> DomainResult<TreeNode<T>> {
        let len = self.children.len();
        if index >= len {
            return Err(DomainError::IndexOutOfRange { index, len });
        }
        Ok(self.children.remove(index))
    }

    /// Replace the whole child list; the previous children are dropped.
    pub fn set_children(&mut self, children: Vec<TreeNode<T>>) {
        self.children = children;
        self.reset_child_depths();
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn has_children(&self) -> bool {
        self.child_count() > 0
    }

    /// Number of direct children plus each child's own direct children.
    ///
    /// Only two levels are counted: great-grandchildren and below are not
    /// included. Use [`subtree_size`](Self::subtree_size) for the full count.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.child_count())
            .sum()
    }

    /// Number of nodes strictly below this node, at any depth.
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut pending: Vec<&TreeNode<T>> = self.children.iter().collect();
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter());
        }
        count
    }

    /// Re-stamp every descendant from this node's depth, without recursion.
    fn reset_child_depths(&mut self) {
        let depth = self.depth + 1;
        let mut pending: Vec<(usize, &mut TreeNode<T>)> =
            self.children.iter_mut().map(|child| (depth, child)).collect();
        while let Some((depth, node)) = pending.pop() {
            node.depth = depth;
            pending.extend(node.children.iter_mut().map(|child| (depth + 1, child)));
        }
    }
}

impl<T> Drop for TreeNode<T> {
    // Flatten the subtree first so dropping a deep tree does not recurse.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
