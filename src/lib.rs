//! Permutation trees
//!
//! This crate builds the tree of all permutations of a sequence of distinct symbols, where every
//! root-to-leaf path is one permutation. The k-th permutation (in depth-first order of the leaves)
//! can be retrieved either by enumerating all permutations or directly, by walking a single path
//! guided by the factorial number system representation of k - 1.
//!
//! ```
//! use permtree::PermTree;
//!
//! let tree = PermTree::new(vec!['A', 'B', 'C']);
//!
//! assert_eq!(tree.all_permutations().len(), 6);
//! assert_eq!(tree.nth_permutation_direct(4).unwrap(), vec!['B', 'C', 'A']);
//! assert_eq!(tree.nth_permutation_via_enumeration(4), tree.nth_permutation_direct(4));
//! assert!(tree.nth_permutation_direct(7).is_err());
//! ```
mod access;
pub mod error;
pub mod factorial;
pub mod iter;
pub mod tree;

pub use error::{Error, Result};
pub use iter::Permutations;
pub use tree::{Node, PermTree};
