//! Constrained random generation for passgen.
//!
//! Consumes normalized [`GenerationOptions`](passgen_core::GenerationOptions)
//! and produces a password (random characters) or a passphrase (dictionary
//! words) through rejection sampling.

pub mod dictionary;
pub mod engine;
pub mod errors;
pub mod generators;
pub mod sampling;

pub use dictionary::{Dictionary, WordList};
pub use engine::{GenerationEngine, GenerationResult, generate};
pub use errors::GenerationError;
pub use sampling::{Sampled, SamplingPolicy, produce_checked};
