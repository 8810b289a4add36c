//! Depth-aware ordered n-ary trees with a structural mapping to and from
//! markup documents.
//!
//! [`domain::Tree`] and [`domain::TreeNode`] form a generic container whose
//! nodes cache their depth. The codec in [`domain::codec`] maps XML-like
//! element records onto `Tree<NodeMap>` (string-keyed maps) and back:
//!
//! ```
//! use treemark::domain::{decode, encode, MarkupElement};
//!
//! let document = MarkupElement::new("inventory")
//!     .with_child(MarkupElement::new("item").with_attribute("id", "5").with_attribute("color", "red"));
//!
//! let tree = decode(&document);
//! let item = tree.root().unwrap().child(0).unwrap();
//! assert_eq!(item.depth(), 1);
//! assert_eq!(item.data().unwrap()["color"], "red");
//!
//! // Leaves keep `id` as an attribute; other entries become child elements.
//! let written = encode(&tree).unwrap();
//! let item = written.child_elements().next().unwrap();
//! assert_eq!(item.attributes["id"], "5");
//! assert_eq!(item.child_elements().next().unwrap().tag_name, "color");
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
