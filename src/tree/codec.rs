//! Question tree persistence format
//!
//! Trees are stored as line-oriented text in pre-order: a leaf is the marker
//! line `A:` followed by the object name on its own line, a branch is the
//! marker line `Q:` followed by the question line, then the yes-subtree, then
//! the no-subtree.

use std::fs;
use std::path::Path;
use thiserror::Error;

use super::Node;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Unrecognized marker line '{0}', expected 'A:' or 'Q:'")]
    UnknownMarker(String),

    #[error("Input ended before the record was complete")]
    UnexpectedEof,

    #[error("Trailing content after the tree record")]
    TrailingData,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Serialize a tree to its text form
pub fn write_tree(tree: &Node) -> String {
    let mut output = String::new();
    write_node(tree, &mut output);
    output
}

fn write_node(node: &Node, output: &mut String) {
    match node {
        Node::Leaf { text } => {
            output.push_str("A:\n");
            output.push_str(text);
            output.push('\n');
        }
        Node::Branch { text, yes, no } => {
            output.push_str("Q:\n");
            output.push_str(text);
            output.push('\n');
            write_node(yes, output);
            write_node(no, output);
        }
    }
}

/// Parse a tree from its text form
///
/// The input must contain exactly one top-level record; anything after it is
/// rejected as `TrailingData`.
pub fn read_tree(input: &str) -> Result<Node, CodecError> {
    let mut lines = input.lines();
    let tree = read_node(&mut lines)?;
    if lines.next().is_some() {
        return Err(CodecError::TrailingData);
    }
    Ok(tree)
}

fn read_node<'a>(lines: &mut impl Iterator<Item = &'a str>) -> Result<Node, CodecError> {
    let marker = lines.next().ok_or(CodecError::UnexpectedEof)?;
    match marker {
        "A:" => {
            let text = lines.next().ok_or(CodecError::UnexpectedEof)?;
            Ok(Node::leaf(text))
        }
        "Q:" => {
            let text = lines.next().ok_or(CodecError::UnexpectedEof)?.to_string();
            let yes = read_node(lines)?;
            let no = read_node(lines)?;
            Ok(Node::branch(text, yes, no))
        }
        other => Err(CodecError::UnknownMarker(other.to_string())),
    }
}

/// Read a tree from a file
pub fn load_tree(path: &Path) -> Result<Node, CodecError> {
    let content = fs::read_to_string(path)?;
    read_tree(&content)
}

/// Write a tree to a file, replacing any previous contents
pub fn save_tree(path: &Path, tree: &Node) -> Result<(), CodecError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, write_tree(tree))?;
    Ok(())
}
