use passgen_core::{GenerationKind, GenerationOptions};
use rand::{Rng, RngCore};
use tracing::debug;

use crate::dictionary::Dictionary;
use crate::errors::GenerationError;
use crate::generators::{Generator, check_bounds};
use crate::sampling::{Sampled, SamplingPolicy, produce_checked};

/// Casing applied to each drawn word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Casing {
    Identity,
    /// Every character is upper-cased on its own fair coin flip.
    RandomUpper,
}

impl Casing {
    pub fn for_options(options: &GenerationOptions) -> Self {
        if options.uppercase {
            Casing::RandomUpper
        } else {
            Casing::Identity
        }
    }

    pub fn apply(self, word: &str, rng: &mut dyn RngCore) -> String {
        match self {
            Casing::Identity => word.to_string(),
            Casing::RandomUpper => {
                let mut cased = String::with_capacity(word.len());
                for ch in word.chars() {
                    if rng.random_bool(0.5) {
                        cased.extend(ch.to_uppercase());
                    } else {
                        cased.push(ch);
                    }
                }
                cased
            }
        }
    }

    /// Acceptance check for a fully joined passphrase.
    pub fn accepts(self, candidate: &str) -> bool {
        match self {
            Casing::Identity => true,
            Casing::RandomUpper => candidate == candidate.to_uppercase(),
        }
    }
}

/// Separator-joined passphrases drawn from a dictionary.
///
/// The length bounds of the options count words. With `uppercase` set the
/// accepted passphrase is entirely upper-case; since casing is decided per
/// character, acceptance odds halve with every cased character and long
/// passphrases may need a very large number of attempts.
pub struct WordsGenerator<'a> {
    dictionary: &'a dyn Dictionary,
}

impl<'a> WordsGenerator<'a> {
    pub fn new(dictionary: &'a dyn Dictionary) -> Self {
        Self { dictionary }
    }

    fn draw(
        &self,
        count: usize,
        casing: Casing,
        separator: &str,
        rng: &mut dyn RngCore,
    ) -> String {
        let words: Vec<String> = (0..count)
            .map(|_| {
                let index = rng.random_range(0..self.dictionary.len());
                casing.apply(self.dictionary.word(index), rng)
            })
            .collect();
        words.join(separator)
    }
}

impl Generator for WordsGenerator<'_> {
    fn kind(&self) -> GenerationKind {
        GenerationKind::Words
    }

    fn generate(
        &self,
        options: &GenerationOptions,
        policy: &SamplingPolicy,
        rng: &mut dyn RngCore,
    ) -> Result<Sampled<String>, GenerationError> {
        check_bounds(options)?;
        if self.dictionary.is_empty() {
            return Err(GenerationError::EmptyDictionary);
        }
        let word_count = rng.random_range(options.min_length..=options.max_length);
        let casing = Casing::for_options(options);
        debug!(
            word_count,
            dictionary = self.dictionary.len(),
            casing = ?casing,
            "sampling words"
        );

        produce_checked(
            policy,
            || self.draw(word_count, casing, &options.separator, rng),
            |candidate| casing.accepts(candidate),
        )
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn words_options(min: usize, max: usize, uppercase: bool) -> GenerationOptions {
        GenerationOptions {
            kind: GenerationKind::Words,
            min_length: min,
            max_length: max,
            uppercase,
            ..GenerationOptions::default()
        }
    }

    #[test]
    fn identity_casing_keeps_words() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(Casing::Identity.apply("lantern", &mut rng), "lantern");
        assert!(Casing::Identity.accepts("MiXeD"));
    }

    #[test]
    fn random_casing_only_changes_case() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..50 {
            let cased = Casing::RandomUpper.apply("harbor", &mut rng);
            assert_eq!(cased.to_lowercase(), "harbor");
        }
    }

    #[test]
    fn upper_check_ignores_caseless_characters() {
        assert!(Casing::RandomUpper.accepts("OAK-7-PINE"));
        assert!(!Casing::RandomUpper.accepts("OAK-pINE"));
    }

    #[test]
    fn rejects_empty_dictionary() {
        let words: Vec<&str> = Vec::new();
        let generator = WordsGenerator::new(&words);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let result = generator.generate(
            &words_options(1, 2, false),
            &SamplingPolicy::unbounded(),
            &mut rng,
        );
        assert!(matches!(result, Err(GenerationError::EmptyDictionary)));
    }

    #[test]
    fn joins_word_count_tokens() {
        let words = vec!["ash", "elm", "fir"];
        let generator = WordsGenerator::new(&words);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let sampled = generator
            .generate(&words_options(4, 4, false), &SamplingPolicy::unbounded(), &mut rng)
            .expect("generate");
        let tokens: Vec<&str> = sampled.value.split('-').collect();
        assert_eq!(tokens.len(), 4);
        assert!(tokens.iter().all(|token| words.contains(token)));
        assert_eq!(sampled.attempts, 1);
    }

    #[test]
    fn uppercase_passphrase_is_fully_upper() {
        let words = vec!["ox", "yak"];
        let generator = WordsGenerator::new(&words);
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let sampled = generator
            .generate(&words_options(2, 2, true), &SamplingPolicy::unbounded(), &mut rng)
            .expect("generate");
        assert_eq!(sampled.value, sampled.value.to_uppercase());
    }
}
