//! Lazy iteration over the permutations of a tree.
use std::convert::TryFrom;
use std::iter::FusedIterator;
use std::slice;

use crate::tree::{Node, PermTree};

impl<S: Clone> PermTree<S> {
    /// Return an iterator over all permutations, in the same order as
    /// [`all_permutations`][PermTree::all_permutations].
    pub fn permutations(&self) -> Permutations<S> {
        Permutations::with_scratch(self, vec![])
    }
}

impl<'a, S: Clone> IntoIterator for &'a PermTree<S> {
    type Item = Vec<S>;
    type IntoIter = Permutations<'a, S>;

    fn into_iter(self) -> Permutations<'a, S> {
        self.permutations()
    }
}

/// Iterator over the permutations of a [`PermTree`].
///
/// Only the path to the current leaf is kept, not the permutations produced so far.
#[derive(Clone)]
pub struct Permutations<'a, S> {
    // One iterator per level of the current path, over the siblings not visited yet
    stack: Vec<slice::Iter<'a, Node<S>>>,
    path: Vec<S>,
    remaining: Option<usize>,
}

impl<'a, S: Clone> Permutations<'a, S> {
    /// Iterate over the permutations of a tree. Use existing scratch space.
    ///
    /// The ownership of the scratch space is passed to the returned iterator and can be recovered
    /// by [`Permutations::into_scratch`].
    pub fn with_scratch(tree: &'a PermTree<S>, mut scratch: Vec<S>) -> Permutations<'a, S> {
        scratch.clear();
        scratch.reserve(tree.len());

        let mut stack = Vec::with_capacity(tree.len());
        stack.push(tree.children().iter());

        Permutations {
            stack,
            path: scratch,
            remaining: tree
                .permutation_count()
                .and_then(|count| usize::try_from(count).ok()),
        }
    }

    /// Recover the scratch space used for the current path.
    pub fn into_scratch(mut self) -> Vec<S> {
        self.path.clear();
        self.path
    }
}

impl<'a, S: Clone> Iterator for Permutations<'a, S> {
    type Item = Vec<S>;

    fn next(&mut self) -> Option<Vec<S>> {
        loop {
            let level = self.stack.last_mut()?;
            match level.next() {
                Some(node) => {
                    self.path.push(node.value().clone());
                    if node.is_leaf() {
                        let permutation = self.path.clone();
                        self.path.pop();
                        self.remaining = self.remaining.map(|n| n.saturating_sub(1));
                        return Some(permutation);
                    }
                    self.stack.push(node.children().iter());
                }
                None => {
                    self.stack.pop();
                    self.path.pop();
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(n) => (n, Some(n)),
            None => (usize::max_value(), None),
        }
    }
}

impl<'a, S: Clone> FusedIterator for Permutations<'a, S> {}
