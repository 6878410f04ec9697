//! # Tokens used in Matrix Market files

/// Indicates the start of a comment.
pub const COMMENT_INDICATOR: &str = "%";

/// Start of the first line of the file.
pub const BANNER: &str = "%%MatrixMarket";

/// The only kind of object that is supported.
pub const MATRIX: &str = "matrix";

/// Sparse storage: one line per stored value.
pub const COORDINATE: &str = "coordinate";

/// Dense storage: one line per value, column by column.
pub const ARRAY: &str = "array";

/// Values are floating point numbers.
pub const REAL: &str = "real";

/// Alternative spelling of `REAL` that some writers emit.
pub const DOUBLE: &str = "double";

/// Values are integers.
pub const INTEGER: &str = "integer";

/// Values are complex numbers, written as two numbers.
pub const COMPLEX: &str = "complex";

/// No values are stored, only the coordinates.
pub const PATTERN: &str = "pattern";

/// All entries are stored explicitly.
pub const GENERAL: &str = "general";

/// Only entries on one side of the diagonal are stored, `a_ij = a_ji`.
pub const SYMMETRIC: &str = "symmetric";

/// Only entries strictly on one side of the diagonal are stored, `a_ij = -a_ji`.
pub const SKEW_SYMMETRIC: &str = "skew-symmetric";

/// Complex matrices equal to their conjugate transpose.
pub const HERMITIAN: &str = "hermitian";

/// Value of an entry of which no value was written.
pub const PATTERN_VALUE: f64 = 1_f64;
