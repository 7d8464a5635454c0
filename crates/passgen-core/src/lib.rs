//! Core contracts for passgen.
//!
//! This crate defines the ASCII character classes, the normalized generation
//! options record and the read-only defaults shared by the validator, the
//! generators and the CLI.

pub mod classes;
pub mod error;
pub mod options;

pub use classes::{CharacterClass, CodepointRange, is_numeric, is_special, is_upper};
pub use error::{Error, Result};
pub use options::{DEFAULTS, Defaults, GenerationKind, GenerationOptions, rules_count};
