//! Password generators built on [`produce_checked`](crate::sampling::produce_checked).

pub mod charset;
pub mod words;

use passgen_core::{GenerationKind, GenerationOptions};
use rand::RngCore;

use crate::errors::GenerationError;
use crate::sampling::{Sampled, SamplingPolicy};

pub use charset::CharsetGenerator;
pub use words::{Casing, WordsGenerator};

/// A generator for one [`GenerationKind`].
pub trait Generator {
    fn kind(&self) -> GenerationKind;

    fn generate(
        &self,
        options: &GenerationOptions,
        policy: &SamplingPolicy,
        rng: &mut dyn RngCore,
    ) -> Result<Sampled<String>, GenerationError>;
}

/// Largest length whose candidate buffer can still be allocated.
pub const MAX_LENGTH: usize = isize::MAX as usize / size_of::<String>();

/// Reject bounds that would make the length draw or the candidate buffer panic.
pub(crate) fn check_bounds(options: &GenerationOptions) -> Result<(), GenerationError> {
    if options.min_length == 0 {
        return Err(GenerationError::InvalidOptions(
            "min length must be positive".to_string(),
        ));
    }
    if options.min_length > options.max_length {
        return Err(GenerationError::InvalidOptions(
            "min length must be <= max length".to_string(),
        ));
    }
    if options.max_length > MAX_LENGTH {
        return Err(GenerationError::InvalidOptions(format!(
            "max length {} exceeds {MAX_LENGTH}",
            options.max_length
        )));
    }
    Ok(())
}
