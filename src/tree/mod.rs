//! Question tree data structure and persistence

mod codec;
mod node;

pub use codec::{load_tree, read_tree, save_tree, write_tree, CodecError};
pub use node::Node;
