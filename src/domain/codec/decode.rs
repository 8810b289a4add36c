use tracing::{debug, instrument, trace};

use crate::domain::codec::{NodeMap, TAGNAME_KEY};
use crate::domain::markup::{MarkupElement, MarkupNode};
use crate::domain::node::TreeNode;
use crate::domain::tree::Tree;

/// Build a tree from a parsed document root.
///
/// The root element's attributes are ignored: the root payload only carries
/// its tag name. Every child element is decoded by [`decode_children`].
#[instrument(level = "debug", skip(document), fields(root = %document.tag_name))]
pub fn decode(document: &MarkupElement) -> Tree<NodeMap> {
    let mut root_data = NodeMap::new();
    root_data.insert(TAGNAME_KEY.to_string(), document.tag_name.clone());

    let mut root = TreeNode::with_data(root_data);
    root.set_children(decode_children(&document.children, 1));

    let tree = Tree::with_root(root);
    debug!("decoded {} nodes", tree.len());
    tree
}

/// Decode every element of a child list; text items are skipped.
///
/// `depth` is the depth of the nodes being built. It is passed explicitly so
/// independent decode calls never share state.
fn decode_children(nodes: &[MarkupNode], depth: usize) -> Vec<TreeNode<NodeMap>> {
    nodes
        .iter()
        .filter_map(MarkupNode::as_element)
        .map(|element| decode_element(element, depth))
        .collect()
}

fn decode_element(element: &MarkupElement, depth: usize) -> TreeNode<NodeMap> {
    let mut data: NodeMap = element.attributes.clone();

    // Structural as soon as any child element has an element child of its own.
    let structural = element
        .child_elements()
        .any(MarkupElement::has_element_children);

    if !structural {
        for child in element.child_elements() {
            data.insert(child.tag_name.clone(), child.text_content());
        }
    }

    data.entry(TAGNAME_KEY.to_string())
        .or_insert_with(|| element.tag_name.clone());

    trace!(
        tag = %element.tag_name,
        depth,
        structural,
        "decoded element"
    );

    let mut node = TreeNode::with_data(data);
    node.set_depth(depth);
    if structural {
        node.set_children(decode_children(&element.children, depth + 1));
    }
    node
}
