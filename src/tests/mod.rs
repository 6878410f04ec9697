//! # Integration tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `const MTX_LITERAL_STRING`
//! * `fn matrix_form()`
//! * `fn sorted_by_nnz_form()`
//! * `fn sorted_by_rowsum_form()`
