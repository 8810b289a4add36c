use tracing::{debug, instrument};

use crate::domain::codec::{NodeMap, ID_KEY, TAGNAME_KEY};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::markup::MarkupElement;
use crate::domain::node::TreeNode;
use crate::domain::tree::Tree;

/// Build a markup document from a tree.
///
/// The root becomes the document element, named by its `tagname`; only its
/// children are written, its other keys are not. Fails before producing
/// anything when a node lacks `tagname`.
#[instrument(level = "debug", skip(tree))]
pub fn encode(tree: &Tree<NodeMap>) -> DomainResult<MarkupElement> {
    let root = tree.root().ok_or(DomainError::EmptyTree)?;

    let mut document = MarkupElement::new(tag_name(root)?);
    for child in root.children() {
        document.append_child(encode_node(child)?);
    }

    debug!(root = %document.tag_name, "encoded {} nodes", tree.len());
    Ok(document)
}

/// Inner nodes keep their entries as attributes; leaves turn every entry
/// except `id` into a child element holding the value as text.
fn encode_node(node: &TreeNode<NodeMap>) -> DomainResult<MarkupElement> {
    let mut element = MarkupElement::new(tag_name(node)?);
    let entries = payload_entries(node);

    if node.has_children() {
        for (key, value) in entries {
            element.set_attribute(key, value);
        }
        for child in node.children() {
            element.append_child(encode_node(child)?);
        }
    } else {
        for (key, value) in entries {
            if key == ID_KEY {
                element.set_attribute(key, value);
            } else {
                let mut data_element = MarkupElement::new(key);
                if !value.is_empty() {
                    data_element = data_element.with_text(value);
                }
                element.append_child(data_element);
            }
        }
    }
    Ok(element)
}

fn tag_name(node: &TreeNode<NodeMap>) -> DomainResult<&str> {
    node.data()
        .and_then(|data| data.get(TAGNAME_KEY))
        .map(String::as_str)
        .ok_or_else(|| DomainError::MissingRequiredKey {
            key: TAGNAME_KEY.to_string(),
        })
}

fn payload_entries(node: &TreeNode<NodeMap>) -> impl Iterator<Item = (&str, &str)> {
    node.data()
        .into_iter()
        .flat_map(|data| data.iter())
        .filter(|(key, _)| key.as_str() != TAGNAME_KEY)
        .map(|(key, value)| (key.as_str(), value.as_str()))
}
