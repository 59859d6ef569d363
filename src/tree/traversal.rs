//! Parent-link walks over the tree arena
//!
//! Ancestors are recovered by following parent indices, so no recursion
//! and no stored paths: depth is O(log segment_size).

use super::{EncodingTree, NodeIndex};

/// Iterator over the proper ancestors of a node, nearest first
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    tree: &'a EncodingTree,
    current: Option<NodeIndex>,
}

impl<'a> Ancestors<'a> {
    /// Start walking upward from `node` (the node itself is not yielded)
    pub fn new(tree: &'a EncodingTree, node: NodeIndex) -> Self {
        let current = tree.get(node).and_then(|n| n.parent());
        Self { tree, current }
    }
}

impl Iterator for Ancestors<'_> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.current?;
        self.current = self.tree.get(index).and_then(|n| n.parent());
        Some(index)
    }
}

/// Proper ancestors ordered root-first, ending with the immediate parent
pub fn ancestor_path(tree: &EncodingTree, node: NodeIndex) -> Vec<NodeIndex> {
    let mut path: Vec<NodeIndex> = Ancestors::new(tree, node).collect();
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ancestor_path_is_root_first() {
        let tree = EncodingTree::build(0, 0, 8);
        let deepest = tree
            .nodes()
            .iter()
            .enumerate()
            .max_by_key(|(index, _)| tree.depth(*index))
            .map(|(index, _)| index)
            .expect("non-empty tree");

        let path = ancestor_path(&tree, deepest);
        assert_eq!(path.first(), Some(&0));
        assert_eq!(path.len(), tree.depth(deepest));
        assert_eq!(path.last().copied(), tree.node(deepest).parent());
    }

    #[test]
    fn test_root_has_no_ancestors() {
        let tree = EncodingTree::build(0, 0, 4);
        assert_eq!(Ancestors::new(&tree, 0).count(), 0);
    }
}
