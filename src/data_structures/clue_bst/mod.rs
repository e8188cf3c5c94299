//! Clue BST Implementation
//!
//! A binary search tree holding the clue texts discovered during exploration.
//! Keys are ordered by byte-wise lexicographic comparison, which is exactly
//! the ordering of `str`.
//!
//! # Example
//!
//! ```
//! use detective_quest_lib::data_structures::clue_bst::ClueBst;
//!
//! let mut clues = ClueBst::new();
//! assert!(clues.insert("Copo quebrado"));
//! assert!(clues.insert("Bilhete rasgado com data antiga"));
//!
//! // Equal text is dropped at the comparison point
//! assert!(!clues.insert("Copo quebrado"));
//!
//! let sorted: Vec<&str> = clues.iter().collect();
//! assert_eq!(sorted, vec!["Bilhete rasgado com data antiga", "Copo quebrado"]);
//! ```
//!
//! Nodes are never removed one at a time. The whole tree is released
//! post-order by [`ClueBst::teardown`] or when it goes out of scope.

mod node;

use std::cmp::Ordering;

pub use node::ClueNode;

/// Sorted set of clue texts backed by an unbalanced binary search tree.
#[derive(Debug, Default)]
pub struct ClueBst {
    /// Root link of the tree
    root: Option<Box<ClueNode>>,

    /// Number of nodes currently in the tree
    len: usize,
}

impl ClueBst {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a clue.
    ///
    /// Descends from the root, going left when `clue` compares less than the
    /// node text and right when it compares greater, and attaches a new leaf at
    /// the first empty link.
    ///
    /// # Returns
    ///
    /// `true` if a node was added, `false` if the text was already present.
    pub fn insert<S: Into<String>>(&mut self, clue: S) -> bool {
        let clue = clue.into();
        let mut link = &mut self.root;

        while let Some(node) = link {
            link = match clue.as_str().cmp(node.clue.as_str()) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }

        *link = Some(Box::new(ClueNode::new(clue)));
        self.len += 1;
        true
    }

    /// Returns whether `clue` is stored in the tree.
    pub fn contains(&self, clue: &str) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match clue.cmp(node.clue.as_str()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Number of clues in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no clue has been recorded.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns a lazy in-order iterator over the clue texts.
    ///
    /// Every call starts a fresh traversal from the root, yielding texts in
    /// ascending order.
    pub fn iter(&self) -> InOrder<'_> {
        InOrder::new(self.root.as_deref())
    }

    /// Consumes the tree, releasing every node children-first.
    ///
    /// # Returns
    ///
    /// The number of nodes released.
    pub fn teardown(mut self) -> usize {
        self.release_all()
    }

    fn release_all(&mut self) -> usize {
        let mut released = 0;
        let mut pending: Vec<Box<ClueNode>> = self.root.take().into_iter().collect();

        while let Some(mut node) = pending.pop() {
            if node.is_leaf() {
                drop(node);
                released += 1;
                continue;
            }

            let left = node.left.take();
            let right = node.right.take();
            // Revisit the now childless parent after both subtrees are gone
            pending.push(node);
            pending.extend(right);
            pending.extend(left);
        }

        self.len = 0;
        if released > 0 {
            tracing::debug!(released, "Clue tree released");
        }
        released
    }
}

impl Drop for ClueBst {
    fn drop(&mut self) {
        self.release_all();
    }
}

impl<'a> IntoIterator for &'a ClueBst {
    type Item = &'a str;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`ClueBst`].
#[derive(Debug)]
pub struct InOrder<'a> {
    stack: Vec<&'a ClueNode>,
}

impl<'a> InOrder<'a> {
    fn new(root: Option<&'a ClueNode>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a ClueNode>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(node.clue.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_sorted_order() {
        let mut tree = ClueBst::new();
        for clue in ["Pegadas na lama", "Copo quebrado", "Diario com anotacoes estranhas", "Bilhete rasgado com data antiga"] {
            assert!(tree.insert(clue));
        }

        let clues: Vec<&str> = tree.iter().collect();
        assert_eq!(
            clues,
            vec![
                "Bilhete rasgado com data antiga",
                "Copo quebrado",
                "Diario com anotacoes estranhas",
                "Pegadas na lama",
            ]
        );
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_duplicate_insert_is_dropped() {
        let mut tree = ClueBst::new();
        assert!(tree.insert("Copo quebrado"));
        assert!(!tree.insert("Copo quebrado"));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_comparison_is_byte_wise() {
        let mut tree = ClueBst::new();
        tree.insert("carta");
        tree.insert("Carta");
        tree.insert("Écharpe");

        // Uppercase ASCII sorts before lowercase, multi-byte UTF-8 after both
        let clues: Vec<&str> = tree.iter().collect();
        assert_eq!(clues, vec!["Carta", "carta", "Écharpe"]);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let mut tree = ClueBst::new();
        tree.insert("b");
        tree.insert("a");

        let first: Vec<&str> = tree.iter().collect();
        let second: Vec<&str> = (&tree).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_contains() {
        let mut tree = ClueBst::new();
        tree.insert("m");
        tree.insert("c");
        tree.insert("x");

        assert!(tree.contains("c"));
        assert!(tree.contains("x"));
        assert!(!tree.contains("a"));
    }

    #[test]
    fn test_empty_tree() {
        let tree = ClueBst::new();
        assert!(tree.is_empty());
        assert_eq!(tree.iter().next(), None);
        assert_eq!(tree.teardown(), 0);
    }

    #[test]
    fn test_teardown_releases_every_node_once() {
        let mut tree = ClueBst::new();
        for clue in ["m", "f", "t", "a", "h", "p", "z", "b"] {
            tree.insert(clue);
        }
        tree.insert("m");

        assert_eq!(tree.teardown(), 8);
    }

    #[test]
    fn test_degenerate_chain_teardown() {
        // Sorted input degrades the tree into a right-leaning list
        let mut tree = ClueBst::new();
        for i in 0..10_000 {
            tree.insert(format!("{i:05}"));
        }
        assert_eq!(tree.len(), 10_000);
        assert_eq!(tree.teardown(), 10_000);
    }
}
