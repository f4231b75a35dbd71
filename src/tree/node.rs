//! Decision tree node type

/// A node in the question tree
///
/// A `Leaf` holds the name of a guessable object. A `Branch` holds a yes/no
/// question and the subtrees reached by each answer. Both children of a
/// branch are always present, so a node is a leaf exactly when it carries no
/// children at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Answer leaf with an object name
    Leaf { text: String },
    /// Question branch with a yes-subtree and a no-subtree
    Branch {
        text: String,
        yes: Box<Node>,
        no: Box<Node>,
    },
}

impl Node {
    /// Construct an answer leaf
    pub fn leaf(text: impl Into<String>) -> Self {
        Node::Leaf { text: text.into() }
    }

    /// Construct a question branch
    pub fn branch(text: impl Into<String>, yes: Node, no: Node) -> Self {
        Node::Branch {
            text: text.into(),
            yes: Box::new(yes),
            no: Box::new(no),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// The stored text: object name for a leaf, question for a branch
    pub fn text(&self) -> &str {
        match self {
            Node::Leaf { text } => text,
            Node::Branch { text, .. } => text,
        }
    }

    /// Total number of nodes in this subtree
    pub fn count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Branch { yes, no, .. } => 1 + yes.count() + no.count(),
        }
    }

    /// Height of this subtree (a lone leaf has height 0)
    pub fn height(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Branch { yes, no, .. } => 1 + yes.height().max(no.height()),
        }
    }
}
