//! Enumerating permutations and looking them up by index.
//!
//! Permutations are indexed from 1 in the depth-first order of the tree's leaves. There are two
//! lookup strategies that always agree: [`PermTree::nth_permutation_via_enumeration`] collects
//! every permutation and picks one, [`PermTree::nth_permutation_direct`] walks a single path by
//! decomposing the index in the factorial number system.
use std::convert::TryFrom;
use std::fmt::Display;

use log::{debug, trace};
use num_integer::Integer;
use num_traits::ToPrimitive;

use crate::error::{Error, Result};
use crate::factorial::factorial;
use crate::tree::{Node, PermTree};

impl<S: Clone> PermTree<S> {
    /// All permutations encoded by the tree, in depth-first order.
    pub fn all_permutations(&self) -> Vec<Vec<S>> {
        self.all_permutations_with_scratch(&mut Vec::with_capacity(self.len()))
    }

    /// All permutations encoded by the tree, in depth-first order. Use existing scratch space.
    ///
    /// The scratch vector holds the current path during the traversal. It is empty afterwards.
    pub fn all_permutations_with_scratch(&self, scratch: &mut Vec<S>) -> Vec<Vec<S>> {
        scratch.clear();

        let capacity = self
            .permutation_count()
            .and_then(|count| usize::try_from(count).ok())
            .unwrap_or(0);
        let mut result = Vec::with_capacity(capacity);

        collect_leaves(self.children(), scratch, &mut result);

        debug!("collected {} permutations", result.len());

        result
    }

    /// The k-th permutation, counting from 1, found by enumerating all permutations.
    ///
    /// This always enumerates the whole tree, independent of `k`.
    pub fn nth_permutation_via_enumeration<K>(&self, k: K) -> Result<Vec<S>>
    where
        K: Integer + ToPrimitive + Display,
    {
        let offset = self.offset(&k)?;

        let mut permutations = self.all_permutations();

        match usize::try_from(offset) {
            Ok(index) if index < permutations.len() => Ok(permutations.swap_remove(index)),
            _ => Err(self.invalid_index(&k)),
        }
    }

    /// The k-th permutation, counting from 1, found by walking a single path of the tree.
    ///
    /// At a node with c children each child's subtree holds (c - 1)! permutations, so the child
    /// to descend into is the remaining offset divided by (c - 1)! and the remainder is the offset
    /// within that child's subtree. This visits one node per level.
    pub fn nth_permutation_direct<K>(&self, k: K) -> Result<Vec<S>>
    where
        K: Integer + ToPrimitive + Display,
    {
        let mut offset = self.offset(&k)?;

        if self.is_empty() {
            return Err(self.invalid_index(&k));
        }

        let mut result = Vec::with_capacity(self.len());
        let mut children = self.children();

        while !children.is_empty() {
            let (child_index, rest) = match factorial::<u128>(children.len() - 1) {
                Some(block) => offset.div_rem(&block),
                // Every block is larger than any representable offset
                None => (0, offset),
            };

            if child_index >= children.len() as u128 {
                return Err(self.invalid_index(&k));
            }

            trace!(
                "depth {}: child {} of {}, offset {} left",
                result.len() + 1,
                child_index,
                children.len(),
                rest
            );

            let child = &children[child_index as usize];
            result.push(child.value().clone());
            offset = rest;
            children = child.children();
        }

        if offset != 0 {
            return Err(self.invalid_index(&k));
        }

        Ok(result)
    }

    /// The index `k` for which [`nth_permutation_direct`][Self::nth_permutation_direct] returns
    /// `permutation`.
    ///
    /// Returns None if `permutation` is not one of the permutations of this tree.
    pub fn rank_of(&self, permutation: &[S]) -> Option<u128>
    where
        S: PartialEq,
    {
        if self.is_empty() || permutation.len() != self.len() {
            return None;
        }

        let mut rank = 0u128;
        let mut children = self.children();

        for symbol in permutation {
            let index = children.iter().position(|child| child.value() == symbol)?;
            let block = factorial::<u128>(children.len() - 1)?;
            rank = rank.checked_add(block.checked_mul(index as u128)?)?;
            children = children[index].children();
        }

        rank.checked_add(1)
    }
}

impl<S> PermTree<S> {
    /// Convert a 1-based index into a 0-based offset, rejecting indices below 1.
    fn offset<K>(&self, k: &K) -> Result<u128>
    where
        K: Integer + ToPrimitive + Display,
    {
        if *k <= K::zero() {
            return Err(self.invalid_index(k));
        }
        match k.to_u128() {
            Some(k) => Ok(k - 1),
            None => Err(self.invalid_index(k)),
        }
    }

    fn invalid_index<K: Display>(&self, k: &K) -> Error {
        Error::InvalidIndex {
            index: k.to_string(),
            count: self.permutation_count(),
        }
    }
}

fn collect_leaves<S: Clone>(nodes: &[Node<S>], path: &mut Vec<S>, result: &mut Vec<Vec<S>>) {
    for node in nodes {
        path.push(node.value().clone());
        if node.is_leaf() {
            result.push(path.clone());
        } else {
            collect_leaves(node.children(), path, result);
        }
        path.pop();
    }
}
