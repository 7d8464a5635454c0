//! Option validation for passgen.
//!
//! Turns a raw, partially specified option set into normalized
//! [`GenerationOptions`](passgen_core::GenerationOptions), collecting every
//! error and advisory warning along the way.

pub mod errors;
pub mod model;
pub mod validate;

pub use errors::{IssueSeverity, ValidationIssue, ValidationReport};
pub use model::RawOptions;
pub use validate::{
    BalancedLengths, ValidatedOptions, validate_and_balance_lengths, validate_options,
    validate_type,
};
