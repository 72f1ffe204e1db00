//! Checked factorials.
use num_traits::{FromPrimitive, PrimInt};

/// Compute `n!` in the integer type `T`.
///
/// Returns None if the result does not fit.
pub fn factorial<T>(n: usize) -> Option<T>
where
    T: PrimInt + FromPrimitive,
{
    let mut result = T::one();
    for i in 2..=n {
        result = result.checked_mul(&T::from_usize(i)?)?;
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values() {
        let expected = [1u64, 1, 2, 6, 24, 120, 720, 5040];
        for (n, &f) in expected.iter().enumerate() {
            assert_eq!(factorial::<u64>(n), Some(f));
        }
    }

    #[test]
    fn overflow() {
        assert_eq!(factorial::<u8>(5), Some(120));
        assert_eq!(factorial::<u8>(6), None);
        assert_eq!(factorial::<u64>(20), Some(2_432_902_008_176_640_000));
        assert_eq!(factorial::<u64>(21), None);
        assert!(factorial::<u128>(34).is_some());
        assert_eq!(factorial::<u128>(35), None);
    }
}
