//! Structural mapping between markup records and `Tree<NodeMap>`.
//!
//! The two directions are deliberately not inverses of each other. Decoding
//! flattens attributes and text-only child elements into map entries; encoding
//! writes map entries as attributes on inner nodes but as child elements on
//! leaves (except `id`). A round trip therefore only reproduces documents that
//! already follow the encoder's layout.

mod decode;
mod encode;

use std::collections::BTreeMap;

pub use decode::decode;
pub use encode::encode;

/// Payload of a decoded node: attribute/child-element name to value.
pub type NodeMap = BTreeMap<String, String>;

/// Reserved key holding the element's tag name.
pub const TAGNAME_KEY: &str = "tagname";

/// Key that stays an attribute when a leaf node is encoded.
pub const ID_KEY: &str = "id";
