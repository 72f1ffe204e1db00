//! Error type shared by the retrieval operations.
use std::fmt;

use thiserror::Error;

/// Errors returned when looking up a permutation by index.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested 1-based index does not name a permutation of the tree.
    ///
    /// `count` is the number of permutations the tree encodes, or `None` if that number does not
    /// fit in a `u128`.
    #[error("no permutation at index {index}, tree has {} permutations", Count(.count))]
    InvalidIndex { index: String, count: Option<u128> },
}

pub type Result<T> = std::result::Result<T, Error>;

struct Count<'a>(&'a Option<u128>);

impl<'a> fmt::Display for Count<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self.0 {
            Some(count) => fmt::Display::fmt(&count, f),
            None => f.write_str("more than 2^128"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_index() {
        let err = Error::InvalidIndex {
            index: "7".to_string(),
            count: Some(6),
        };
        assert_eq!(err.to_string(), "no permutation at index 7, tree has 6 permutations");
    }

    #[test]
    fn display_overflowing_count() {
        let err = Error::InvalidIndex {
            index: "-1".to_string(),
            count: None,
        };
        assert_eq!(
            err.to_string(),
            "no permutation at index -1, tree has more than 2^128 permutations"
        );
    }
}
