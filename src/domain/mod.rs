//! Domain layer: tree container, markup records and the codec
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod codec;
pub mod error;
pub mod markup;
pub mod node;
pub mod render;
pub mod tree;

pub use codec::{decode, encode, NodeMap, ID_KEY, TAGNAME_KEY};
pub use error::{DomainError, DomainResult};
pub use markup::{MarkupElement, MarkupNode};
pub use node::TreeNode;
pub use render::TreeRender;
pub use tree::{PreOrderIter, Tree};
