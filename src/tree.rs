//! Permutation trees.
use log::{debug, log_enabled, Level};

use crate::factorial::factorial;

/// A node of a permutation tree.
///
/// A node holds one symbol and owns the subtrees for every way of continuing the path with the
/// symbols not used so far. A node without children is a leaf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<S> {
    value: S,
    children: Vec<Node<S>>,
}

impl<S> Node<S> {
    /// The symbol stored in this node.
    pub fn value(&self) -> &S {
        &self.value
    }

    /// The children of this node, in construction order.
    pub fn children(&self) -> &[Node<S>] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of levels of the subtree rooted at this node, counting the node itself.
    pub fn depth(&self) -> usize {
        // All branches of a permutation tree have the same length
        1 + self.children.first().map_or(0, Node::depth)
    }

    /// Number of leaves below (or at) this node.
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(Node::leaf_count).sum()
        }
    }

    fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }
}

impl<S: Clone> Node<S> {
    /// Build one node per symbol of `remaining`, each owning the subtree of the symbols left after
    /// removing it.
    fn branches(remaining: &[S]) -> Vec<Node<S>> {
        (0..remaining.len())
            .map(|i| {
                let mut rest = remaining.to_vec();
                let value = rest.remove(i);
                Node {
                    value,
                    children: Node::branches(&rest),
                }
            })
            .collect()
    }
}

/// A tree whose root-to-leaf paths are exactly the permutations of a sequence of symbols.
///
/// The root is implicit and holds no symbol. Its children are the depth 1 nodes, one per input
/// symbol. A node at depth d has one child for each of the n - d symbols not yet on its path, so
/// every leaf sits at depth n and there are n! leaves in total.
///
/// Children are ordered by the position of their symbol in the input sequence. A depth-first walk
/// visiting children in this order defines the order of permutations used by
/// [`all_permutations`][PermTree::all_permutations] and the indexed lookups. This is lexicographic
/// order only if the input sequence is sorted, see [`PermTree::lexicographic`].
///
/// Symbols are expected to be pairwise distinct. This is not checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermTree<S> {
    children: Vec<Node<S>>,
    symbols: Vec<S>,
}

impl<S: Clone> PermTree<S> {
    /// Build the permutation tree of a sequence of distinct symbols.
    ///
    /// An empty sequence produces an empty tree that encodes no permutations.
    pub fn new(symbols: Vec<S>) -> PermTree<S> {
        let tree = PermTree {
            children: Node::branches(&symbols),
            symbols,
        };

        if log_enabled!(Level::Debug) {
            debug!(
                "built permutation tree over {} symbols with {} nodes",
                tree.len(),
                tree.node_count()
            );
        }

        tree
    }

    /// Build the permutation tree of the sorted symbols.
    ///
    /// With this constructor the k-th permutation of the tree is the k-th permutation in
    /// lexicographic order.
    pub fn lexicographic(mut symbols: Vec<S>) -> PermTree<S>
    where
        S: Ord,
    {
        symbols.sort();
        Self::new(symbols)
    }
}

impl<S> PermTree<S> {
    /// The symbols the tree was built from, in their construction order.
    pub fn symbols(&self) -> &[S] {
        &self.symbols
    }

    /// The depth 1 nodes of the tree, i.e. the children of the implicit root.
    pub fn children(&self) -> &[Node<S>] {
        &self.children
    }

    /// Number of symbols, which is also the depth of every leaf.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Number of permutations encoded by this tree.
    ///
    /// This is n! for n symbols and 0 for an empty tree. Returns None if the count does not fit in
    /// a `u128`.
    pub fn permutation_count(&self) -> Option<u128> {
        if self.is_empty() {
            Some(0)
        } else {
            factorial(self.len())
        }
    }

    /// Number of leaves, counted by walking the tree.
    pub fn leaf_count(&self) -> usize {
        self.children.iter().map(Node::leaf_count).sum()
    }

    /// Number of nodes, not counting the implicit root.
    pub fn node_count(&self) -> usize {
        self.children.iter().map(Node::node_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    fn distinct_symbols<L>(len: L) -> impl Strategy<Value = Vec<u32>>
    where
        L: Strategy<Value = u32>,
    {
        len.prop_map(|n| (0..n).collect::<Vec<_>>()).prop_shuffle()
    }

    fn check_levels<S: Clone + PartialEq>(nodes: &[Node<S>], path: &mut Vec<S>, n: usize) {
        assert_eq!(nodes.len(), n - path.len());
        for node in nodes {
            assert!(!path.contains(node.value()));
            path.push(node.value().clone());
            check_levels(node.children(), path, n);
            path.pop();
        }
    }

    #[test]
    fn empty_tree() {
        let tree = PermTree::<char>::new(vec![]);
        assert!(tree.is_empty());
        assert!(tree.children().is_empty());
        assert_eq!(tree.permutation_count(), Some(0));
        assert_eq!(tree.leaf_count(), 0);
        assert_eq!(tree.node_count(), 0);
    }

    #[test]
    fn single_symbol() {
        let tree = PermTree::new(vec!['X']);
        assert_eq!(tree.children().len(), 1);
        assert_eq!(*tree.children()[0].value(), 'X');
        assert!(tree.children()[0].is_leaf());
        assert_eq!(tree.permutation_count(), Some(1));
    }

    #[test]
    fn children_in_construction_order() {
        let tree = PermTree::new(vec!['A', 'B', 'C']);

        let firsts: Vec<char> = tree.children().iter().map(|node| *node.value()).collect();
        assert_eq!(firsts, vec!['A', 'B', 'C']);

        let under_b: Vec<char> = tree.children()[1]
            .children()
            .iter()
            .map(|node| *node.value())
            .collect();
        assert_eq!(under_b, vec!['A', 'C']);

        assert_eq!(tree.symbols(), &['A', 'B', 'C']);
        assert_eq!(tree.node_count(), 3 + 6 + 6);
    }

    #[test]
    fn lexicographic_sorts_symbols() {
        let tree = PermTree::lexicographic(vec!['c', 'a', 'b']);
        assert_eq!(tree.symbols(), &['a', 'b', 'c']);
        assert_eq!(tree, PermTree::new(vec!['a', 'b', 'c']));
    }

    proptest! {
        #[test]
        fn leaves_and_depth(symbols in distinct_symbols(1..7u32)) {
            let n = symbols.len();
            let tree = PermTree::new(symbols);

            prop_assert_eq!(tree.leaf_count() as u128, tree.permutation_count().unwrap());
            for node in tree.children() {
                prop_assert_eq!(node.depth(), n);
            }
        }

        #[test]
        fn unused_symbols_become_children(symbols in distinct_symbols(0..7u32)) {
            let n = symbols.len();
            let tree = PermTree::new(symbols);
            check_levels(tree.children(), &mut vec![], n);
        }
    }
}
