//! # Row permutations
//!
//! A new order of the rows of a matrix, validated to be a bijection when it is created.
use std::error::Error;
use std::fmt;

/// Full permutation.
///
/// The forward direction is stored explicitly: it maps a new position to the original index that
/// is placed there.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Permutation {
    /// Index of the value is mapped to the value at the index.
    forward: Vec<usize>,
}

impl Permutation {
    /// Create a new instance.
    ///
    /// Verifies in a single pass that `forward` is a bijection on `0..forward.len()`.
    ///
    /// # Arguments
    ///
    /// * `forward`: Value at index `i` is the original index that moves to position `i`.
    ///
    /// # Errors
    ///
    /// If a value is out of range or appears more than once.
    pub fn new(forward: Vec<usize>) -> Result<Self, InvalidPermutation> {
        let len = forward.len();
        // Position at which each value was seen first.
        let mut seen_at = vec![None; len];

        for (position, &value) in forward.iter().enumerate() {
            if value >= len {
                return Err(InvalidPermutation::OutOfRange { position, value, len });
            }
            if let Some(first) = seen_at[value] {
                return Err(InvalidPermutation::Repeated { value, first, second: position });
            }
            seen_at[value] = Some(position);
        }

        Ok(Self { forward })
    }

    /// Create a new instance that maps an index onto itself.
    ///
    /// # Arguments
    ///
    /// * `n`: Number of elements in the permutation.
    pub fn identity(n: usize) -> Self {
        Self { forward: (0..n).collect() }
    }

    /// Original index that is placed at position `i`.
    ///
    /// # Arguments
    ///
    /// * `i`: Value in range `0..self.len()`.
    pub fn forward(&self, i: usize) -> usize {
        debug_assert!(i < self.len());

        self.forward[i]
    }

    /// Whether every index maps onto itself.
    pub fn is_identity(&self) -> bool {
        self.forward.iter().enumerate().all(|(i, &j)| i == j)
    }

    /// Size of the permutation.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Whether the permutation acts on zero elements.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// The forward direction as a slice: the new order of the original indices.
    pub fn as_slice(&self) -> &[usize] {
        &self.forward
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        if let Some((first, rest)) = self.forward.split_first() {
            write!(f, "{}", first)?;
            for i in rest {
                write!(f, ", {}", i)?;
            }
        }
        f.write_str(")")
    }
}

/// A sequence of indices that can't be used as a row permutation.
///
/// Permutations computed by this crate are always valid, so encountering this error indicates a
/// defect in the caller.
#[derive(Eq, PartialEq, Clone, Debug)]
pub enum InvalidPermutation {
    /// The permutation doesn't have the length of the thing it is applied to.
    Length {
        /// Length that was needed.
        expected: usize,
        /// Length that was provided.
        actual: usize,
    },
    /// A value is not a valid index.
    OutOfRange {
        /// Position of the value in the sequence.
        position: usize,
        /// The offending value.
        value: usize,
        /// Length of the sequence; all values should be below it.
        len: usize,
    },
    /// A value appears twice, so some other value is missing.
    Repeated {
        /// The repeated value.
        value: usize,
        /// Position of the first occurrence.
        first: usize,
        /// Position of the second occurrence.
        second: usize,
    },
}

impl fmt::Display for InvalidPermutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidPermutation::Length { expected, actual } => write!(
                f, "InvalidPermutation: expected {} indices, got {}", expected, actual,
            ),
            InvalidPermutation::OutOfRange { position, value, len } => write!(
                f, "InvalidPermutation: value {} at position {} is not below {}", value, position, len,
            ),
            InvalidPermutation::Repeated { value, first, second } => write!(
                f, "InvalidPermutation: value {} appears at both position {} and {}", value, first, second,
            ),
        }
    }
}

impl Error for InvalidPermutation {}

#[cfg(test)]
mod test {
    use crate::data::permutation::{InvalidPermutation, Permutation};

    #[test]
    fn identity() {
        let permutation = Permutation::identity(4);

        assert_eq!(permutation.forward(1), 1);
        assert!(permutation.is_identity());
        assert_eq!(permutation.len(), 4);
        assert!(Permutation::identity(0).is_empty());
    }

    #[test]
    fn forward() {
        let permutation = Permutation::new(vec![2, 0, 3, 1]).unwrap();

        assert_eq!(permutation.forward(0), 2);
        assert_eq!(permutation.forward(3), 1);
        assert_eq!(permutation.as_slice(), &[2, 0, 3, 1]);
        assert!(!permutation.is_identity());
        assert!(Permutation::new(vec![0, 1, 2]).unwrap().is_identity());
    }

    #[test]
    fn not_a_bijection() {
        assert_eq!(
            Permutation::new(vec![0, 2, 0]),
            Err(InvalidPermutation::Repeated { value: 0, first: 0, second: 2 }),
        );
        assert_eq!(
            Permutation::new(vec![0, 3, 1]),
            Err(InvalidPermutation::OutOfRange { position: 1, value: 3, len: 3 }),
        );
        assert!(Permutation::new(vec![1, 0]).is_ok());
        assert!(Permutation::new(vec![]).unwrap().is_empty());
    }

    #[test]
    fn display() {
        assert_eq!(Permutation::new(vec![2, 0, 1]).unwrap().to_string(), "(2, 0, 1)");
        assert_eq!(Permutation::identity(0).to_string(), "()");
    }
}
