use std::time::Instant;

use passgen_core::{GenerationKind, GenerationOptions};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::dictionary::Dictionary;
use crate::errors::GenerationError;
use crate::generators::{CharsetGenerator, Generator, WordsGenerator};
use crate::sampling::SamplingPolicy;

/// Result of a generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub value: String,
    /// Candidates produced before one was accepted.
    pub attempts: u64,
    /// Seed of the RNG when the engine created it.
    pub seed: Option<u64>,
}

/// Entry point for generating a password from normalized options.
///
/// `Words` generation needs a dictionary; `Chars` generation ignores it.
#[derive(Clone, Default)]
pub struct GenerationEngine<'a> {
    policy: SamplingPolicy,
    dictionary: Option<&'a dyn Dictionary>,
}

impl<'a> GenerationEngine<'a> {
    pub fn new(policy: SamplingPolicy) -> Self {
        Self {
            policy,
            dictionary: None,
        }
    }

    pub fn with_dictionary(mut self, dictionary: &'a dyn Dictionary) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    /// Generate with a caller supplied RNG.
    pub fn generate(
        &self,
        options: &GenerationOptions,
        rng: &mut dyn RngCore,
    ) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        debug!(
            kind = %options.kind,
            min_length = options.min_length,
            max_length = options.max_length,
            uppercase = options.uppercase,
            numbers = options.numbers,
            symbols = options.symbols,
            max_attempts = ?self.policy.max_attempts,
            "generation started"
        );

        let words;
        let generator: &dyn Generator = match options.kind {
            GenerationKind::Chars => &CharsetGenerator,
            GenerationKind::Words => {
                let dictionary = self.dictionary.ok_or(GenerationError::MissingDictionary)?;
                words = WordsGenerator::new(dictionary);
                &words
            }
        };
        let sampled = generator.generate(options, &self.policy, rng)?;

        info!(
            kind = %generator.kind(),
            attempts = sampled.attempts,
            duration_ms = start.elapsed().as_millis() as u64,
            "generation completed"
        );

        Ok(GenerationResult {
            value: sampled.value,
            attempts: sampled.attempts,
            seed: None,
        })
    }

    /// Generate deterministically from `seed`.
    pub fn generate_with_seed(
        &self,
        options: &GenerationOptions,
        seed: u64,
    ) -> Result<GenerationResult, GenerationError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut result = self.generate(options, &mut rng)?;
        result.seed = Some(seed);
        Ok(result)
    }

    /// Generate from a fresh random seed, which is logged for replay.
    pub fn generate_unseeded(
        &self,
        options: &GenerationOptions,
    ) -> Result<GenerationResult, GenerationError> {
        let seed: u64 = rand::rng().random();
        debug!(seed, "drew generation seed");
        self.generate_with_seed(options, seed)
    }
}

/// Generate a password with unbounded retries.
pub fn generate(
    options: &GenerationOptions,
    dictionary: &dyn Dictionary,
    rng: &mut dyn RngCore,
) -> Result<String, GenerationError> {
    GenerationEngine::default()
        .with_dictionary(dictionary)
        .generate(options, rng)
        .map(|result| result.value)
}
