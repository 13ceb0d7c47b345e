//! # Integration tests that require a look inside the crate.
//!
//! Convention for names:
//!
//! * `const LP_LITERAL_STRING`
//! * `fn model()`
