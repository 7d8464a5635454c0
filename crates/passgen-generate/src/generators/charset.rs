use passgen_core::{
    CharacterClass, GenerationKind, GenerationOptions, is_numeric, is_special, is_upper,
};
use rand::{Rng, RngCore};
use tracing::debug;

use crate::errors::GenerationError;
use crate::generators::{Generator, check_bounds};
use crate::sampling::{Sampled, SamplingPolicy, produce_checked};

type ClassCheck = fn(u32) -> bool;

/// Sampling alphabet and the class checks a candidate must pass.
#[derive(Debug, Clone)]
pub struct Charset {
    alphabet: Vec<char>,
    checks: Vec<ClassCheck>,
}

impl Charset {
    /// Lowercase plus every enabled optional class, each of which becomes
    /// a required check.
    pub fn for_options(options: &GenerationOptions) -> Self {
        let mut charset = Self {
            alphabet: class_chars(CharacterClass::Lowercase),
            checks: Vec::new(),
        };
        for class in options.required_classes() {
            charset.alphabet.extend(class_chars(class));
            charset.checks.push(class_check(class));
        }
        charset
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    pub fn required_checks(&self) -> usize {
        self.checks.len()
    }

    /// Draw `length` characters uniformly, with replacement.
    pub fn sample(&self, length: usize, rng: &mut dyn RngCore) -> Vec<char> {
        (0..length)
            .map(|_| self.alphabet[rng.random_range(0..self.alphabet.len())])
            .collect()
    }

    /// Every required class appears at least once.
    pub fn accepts(&self, candidate: &[char]) -> bool {
        self.checks
            .iter()
            .all(|check| candidate.iter().any(|ch| check(*ch as u32)))
    }
}

fn class_check(class: CharacterClass) -> ClassCheck {
    match class {
        CharacterClass::Lowercase => |code| CharacterClass::Lowercase.contains(code),
        CharacterClass::Uppercase => is_upper,
        CharacterClass::Numeric => is_numeric,
        CharacterClass::Symbol => is_special,
    }
}

fn class_chars(class: CharacterClass) -> Vec<char> {
    class.codepoints().filter_map(char::from_u32).collect()
}

/// Fixed-length random character passwords.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharsetGenerator;

impl Generator for CharsetGenerator {
    fn kind(&self) -> GenerationKind {
        GenerationKind::Chars
    }

    fn generate(
        &self,
        options: &GenerationOptions,
        policy: &SamplingPolicy,
        rng: &mut dyn RngCore,
    ) -> Result<Sampled<String>, GenerationError> {
        check_bounds(options)?;
        let charset = Charset::for_options(options);
        let length = rng.random_range(options.min_length..=options.max_length);
        if length < charset.required_checks() {
            return Err(GenerationError::InvalidOptions(format!(
                "length {length} cannot hold {} required classes",
                charset.required_checks()
            )));
        }
        debug!(
            length,
            alphabet = charset.alphabet().len(),
            required = charset.required_checks(),
            "sampling characters"
        );

        let sampled = produce_checked(
            policy,
            || charset.sample(length, rng),
            |candidate| charset.accepts(candidate),
        )?;
        Ok(Sampled {
            value: sampled.value.into_iter().collect(),
            attempts: sampled.attempts,
        })
    }
}
