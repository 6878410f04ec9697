//! # Storing of sparse matrices in memory
//!
//! This module provides the data structures used to represent matrices and row orders in memory.
//! Algorithms that compute row orders live in `algorithm`.

pub mod matrix;
pub mod permutation;
