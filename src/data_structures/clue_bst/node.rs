//! Node implementation for the Clue BST.
//!
//! Each node owns its children exclusively, so the whole tree hangs off a
//! single `Option<Box<ClueNode>>` root link.

/// A node in the clue binary search tree.
#[derive(Debug)]
pub struct ClueNode {
    /// The clue text stored at this node
    pub clue: String,

    /// Subtree with texts that compare less than `clue`
    pub left: Option<Box<ClueNode>>,

    /// Subtree with texts that compare greater than `clue`
    pub right: Option<Box<ClueNode>>,
}

impl ClueNode {
    /// Creates a new leaf node holding `clue`.
    pub fn new(clue: String) -> Self {
        Self {
            clue,
            left: None,
            right: None,
        }
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
