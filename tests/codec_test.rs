//! Tests for the markup <-> tree mapping

use std::collections::BTreeMap;

use treemark::domain::{
    decode, encode, DomainError, MarkupElement, MarkupNode, NodeMap, Tree, TreeNode, TAGNAME_KEY,
};

fn map(entries: &[(&str, &str)]) -> NodeMap {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn element(tag: &str) -> MarkupElement {
    MarkupElement::new(tag)
}

/// Wrap `item` in a document root so it decodes as a regular element.
fn decode_item(item: MarkupElement) -> TreeNode<NodeMap> {
    let tree = decode(&element("doc").with_child(item));
    let root = tree.root().unwrap();
    assert_eq!(root.child_count(), 1);
    root.child(0).unwrap().clone()
}

fn tree_with_children(tag: &str, children: Vec<TreeNode<NodeMap>>) -> Tree<NodeMap> {
    let mut root = TreeNode::with_data(map(&[(TAGNAME_KEY, tag)]));
    root.set_children(children);
    Tree::with_root(root)
}

fn node(data: NodeMap, children: Vec<TreeNode<NodeMap>>) -> TreeNode<NodeMap> {
    let mut node = TreeNode::with_data(data);
    node.set_children(children);
    node
}

// ============================================================
// Decode
// ============================================================

#[test]
fn given_bare_element_when_decoding_then_payload_is_only_tagname() {
    let item = decode_item(element("item"));

    assert_eq!(item.data(), Some(&map(&[("tagname", "item")])));
    assert!(!item.has_children());
}

#[test]
fn given_attributes_when_decoding_then_they_are_flattened_into_payload() {
    let item = decode_item(element("item").with_attribute("a", "1").with_attribute("b", "2"));

    assert_eq!(
        item.data(),
        Some(&map(&[("tagname", "item"), ("a", "1"), ("b", "2")]))
    );
}

#[test]
fn given_text_only_child_when_decoding_then_child_becomes_map_entry() {
    let item = decode_item(element("item").with_child(element("x").with_text("hi")));

    assert_eq!(item.data(), Some(&map(&[("tagname", "item"), ("x", "hi")])));
    assert_eq!(item.child_count(), 0);
}

#[test]
fn given_repeated_text_children_when_decoding_then_last_one_wins() {
    let item = decode_item(
        element("item")
            .with_child(element("x").with_text("first"))
            .with_child(element("x").with_text("second")),
    );

    assert_eq!(item.data().unwrap()["x"], "second");
}

#[test]
fn given_empty_child_element_when_decoding_then_entry_has_empty_value() {
    let item = decode_item(element("item").with_child(element("note")));

    assert_eq!(item.data().unwrap()["note"], "");
}

#[test]
fn given_grandchild_element_when_decoding_then_child_becomes_real_node() {
    // <item><x><y/></x></item>
    let item = decode_item(element("item").with_child(element("x").with_child(element("y"))));

    assert_eq!(item.data(), Some(&map(&[("tagname", "item")])));
    assert_eq!(item.child_count(), 1);
    let x = item.child(0).unwrap();
    assert_eq!(x.data(), Some(&map(&[("tagname", "x"), ("y", "")])));
    assert_eq!(x.depth(), 2);
}

#[test]
fn given_structural_child_after_text_child_when_decoding_then_no_text_entries_are_captured() {
    // The decision is taken for the whole child list, not per position.
    let item = decode_item(
        element("item")
            .with_child(element("name").with_text("widget"))
            .with_child(element("parts").with_child(element("part").with_attribute("id", "1"))),
    );

    let data = item.data().unwrap();
    assert!(!data.contains_key("name"));
    assert!(!data.contains_key("parts"));
    let tags: Vec<_> = item
        .children()
        .iter()
        .map(|c| c.data().unwrap()[TAGNAME_KEY].clone())
        .collect();
    assert_eq!(tags, vec!["name", "parts"]);
    assert_eq!(item.child(0).unwrap().data().unwrap()[TAGNAME_KEY], "name");
}

#[test]
fn given_attribute_named_tagname_when_decoding_then_attribute_wins() {
    let item = decode_item(element("item").with_attribute("tagname", "custom"));

    assert_eq!(item.data().unwrap()[TAGNAME_KEY], "custom");
}

#[test]
fn given_text_items_between_elements_when_decoding_then_text_is_ignored() {
    let document = element("doc")
        .with_text("\n  ")
        .with_child(element("a"))
        .with_text("stray")
        .with_child(element("b"));

    let tree = decode(&document);

    assert_eq!(tree.root().unwrap().child_count(), 2);
}

#[test]
fn given_root_attributes_when_decoding_then_root_payload_is_only_tagname() {
    let document = element("catalog")
        .with_attribute("version", "2")
        .with_child(element("item"));

    let tree = decode(&document);

    let root = tree.root().unwrap();
    assert_eq!(root.data(), Some(&map(&[("tagname", "catalog")])));
    assert_eq!(root.depth(), 0);
    assert_eq!(root.child_count(), 1);
}

#[test]
fn given_root_with_text_only_children_when_decoding_then_children_are_still_nodes() {
    let document = element("config").with_child(element("name").with_text("demo"));

    let tree = decode(&document);

    let name = tree.root().unwrap().child(0).unwrap();
    assert_eq!(name.data(), Some(&map(&[("tagname", "name")])));
}

#[test]
fn given_nested_document_when_decoding_twice_then_depths_are_identical() {
    let document = element("doc").with_child(
        element("a").with_child(element("b").with_child(element("c").with_child(element("d")))),
    );

    let first = decode(&document);
    let second = decode(&document);

    let depths = |tree: &Tree<NodeMap>| tree.iter().map(TreeNode::depth).collect::<Vec<_>>();
    assert_eq!(depths(&first), vec![0, 1, 2, 3]);
    assert_eq!(depths(&first), depths(&second));
}

// ============================================================
// Encode
// ============================================================

#[test]
fn given_leaf_node_when_encoding_then_id_is_attribute_and_others_are_child_elements() {
    let tree = tree_with_children(
        "doc",
        vec![node(
            map(&[("tagname", "item"), ("id", "5"), ("color", "red")]),
            vec![],
        )],
    );

    let document = encode(&tree).unwrap();

    let expected = element("doc").with_child(
        element("item")
            .with_attribute("id", "5")
            .with_child(element("color").with_text("red")),
    );
    assert_eq!(document, expected);
}

#[test]
fn given_inner_node_when_encoding_then_entries_become_attributes() {
    let tree = tree_with_children(
        "doc",
        vec![node(
            map(&[("tagname", "item"), ("color", "red")]),
            vec![node(map(&[("tagname", "part"), ("id", "1")]), vec![])],
        )],
    );

    let document = encode(&tree).unwrap();

    let item = document.child_elements().next().unwrap();
    assert_eq!(item.tag_name, "item");
    assert_eq!(
        item.attributes,
        BTreeMap::from([("color".to_string(), "red".to_string())])
    );
    let part = item.child_elements().next().unwrap();
    assert_eq!(part, &element("part").with_attribute("id", "1"));
}

#[test]
fn given_empty_value_on_leaf_when_encoding_then_child_element_is_empty() {
    let tree = tree_with_children("doc", vec![node(map(&[("tagname", "item"), ("note", "")]), vec![])]);

    let document = encode(&tree).unwrap();

    let item = document.child_elements().next().unwrap();
    assert_eq!(item.children, vec![MarkupNode::Element(element("note"))]);
}

#[test]
fn given_root_with_entries_when_encoding_then_only_tagname_is_written() {
    let mut root = TreeNode::with_data(map(&[("tagname", "doc"), ("version", "2")]));
    root.add_child(TreeNode::with_data(map(&[("tagname", "item")])));
    let tree = Tree::with_root(root);

    let document = encode(&tree).unwrap();

    assert_eq!(document, element("doc").with_child(element("item")));
}

#[test]
fn given_node_without_tagname_when_encoding_then_fails_with_missing_key() {
    let tree = tree_with_children("doc", vec![node(map(&[("color", "red")]), vec![])]);

    let result = encode(&tree);

    assert_eq!(
        result.unwrap_err(),
        DomainError::MissingRequiredKey {
            key: "tagname".to_string()
        }
    );
}

#[test]
fn given_root_without_tagname_when_encoding_then_fails_with_missing_key() {
    let mut root = TreeNode::with_data(map(&[("version", "3")]));
    root.add_child(node(map(&[(TAGNAME_KEY, "item")]), vec![]));
    let tree = Tree::with_root(root);

    assert_eq!(
        encode(&tree).unwrap_err(),
        DomainError::MissingRequiredKey {
            key: TAGNAME_KEY.to_string()
        }
    );
}

#[test]
fn given_node_without_data_when_encoding_then_fails_with_missing_key() {
    let tree = tree_with_children("doc", vec![TreeNode::new()]);

    assert!(matches!(
        encode(&tree),
        Err(DomainError::MissingRequiredKey { .. })
    ));
}

#[test]
fn given_empty_tree_when_encoding_then_fails() {
    let tree: Tree<NodeMap> = Tree::new();

    assert_eq!(encode(&tree).unwrap_err(), DomainError::EmptyTree);
}

// ============================================================
// Round trip
// ============================================================

#[test]
fn given_document_in_encoder_layout_when_round_tripping_then_structure_is_reproduced() {
    // Inner elements carry plain attributes, leaves carry only `id` plus
    // text-only data children.
    let original = element("library").with_child(
        element("shelf")
            .with_attribute("room", "east")
            .with_child(
                element("book")
                    .with_attribute("id", "b1")
                    .with_child(element("title").with_text("Dune")),
            )
            .with_child(element("book").with_child(element("title").with_text("Emma"))),
    );

    let round_tripped = encode(&decode(&original)).unwrap();

    assert_eq!(round_tripped, original);
}

#[test]
fn given_non_id_attribute_on_leaf_when_round_tripping_then_it_becomes_child_element() {
    let original = element("library").with_child(
        element("book")
            .with_attribute("id", "b1")
            .with_attribute("lang", "en"),
    );

    let round_tripped = encode(&decode(&original)).unwrap();

    assert_ne!(round_tripped, original);
    let book = round_tripped.child_elements().next().unwrap();
    assert_eq!(
        book,
        &element("book")
            .with_attribute("id", "b1")
            .with_child(element("lang").with_text("en"))
    );
}
