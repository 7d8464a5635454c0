use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::classes::CharacterClass;
use crate::error::{Error, Result};

/// What the generator assembles: random characters or dictionary words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationKind {
    Chars,
    Words,
}

impl GenerationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            GenerationKind::Chars => "chars",
            GenerationKind::Words => "words",
        }
    }
}

impl FromStr for GenerationKind {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "chars" => Ok(GenerationKind::Chars),
            "words" => Ok(GenerationKind::Words),
            other => Err(Error::UnknownKind(other.to_string())),
        }
    }
}

impl std::fmt::Display for GenerationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only defaults applied while normalizing raw options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Defaults {
    pub kind: GenerationKind,
    pub min_length: usize,
    pub max_length: usize,
    pub separator: &'static str,
}

pub const DEFAULTS: Defaults = Defaults {
    kind: GenerationKind::Chars,
    min_length: 8,
    max_length: 16,
    separator: "-",
};

/// Normalized generation options.
///
/// Produced by validation and consumed read-only by exactly one generator
/// call. For `Words` the length bounds count words, not characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    #[serde(rename = "type")]
    pub kind: GenerationKind,
    pub min_length: usize,
    pub max_length: usize,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub separator: String,
}

impl GenerationOptions {
    /// Optional classes that must appear at least once in a `Chars` password,
    /// in alphabet order.
    pub fn required_classes(&self) -> Vec<CharacterClass> {
        let mut classes = Vec::new();
        if self.uppercase {
            classes.push(CharacterClass::Uppercase);
        }
        if self.numbers {
            classes.push(CharacterClass::Numeric);
        }
        if self.symbols {
            classes.push(CharacterClass::Symbol);
        }
        classes
    }

    pub fn rules_count(&self) -> usize {
        rules_count(self.uppercase, self.numbers, self.symbols)
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            kind: DEFAULTS.kind,
            min_length: DEFAULTS.min_length,
            max_length: DEFAULTS.max_length,
            uppercase: false,
            numbers: false,
            symbols: false,
            separator: DEFAULTS.separator.to_string(),
        }
    }
}

/// Count of enabled optional classes.
pub fn rules_count(uppercase: bool, numbers: bool, symbols: bool) -> usize {
    [uppercase, numbers, symbols]
        .into_iter()
        .filter(|enabled| *enabled)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_kinds_only() {
        assert_eq!("chars".parse::<GenerationKind>(), Ok(GenerationKind::Chars));
        assert_eq!("words".parse::<GenerationKind>(), Ok(GenerationKind::Words));
        assert_eq!(
            "phrase".parse::<GenerationKind>(),
            Err(Error::UnknownKind("phrase".to_string()))
        );
        assert!("Chars".parse::<GenerationKind>().is_err());
        let err = "phrase".parse::<GenerationKind>().expect_err("unknown kind");
        assert_eq!(err.to_string(), "unknown generation type: phrase");
    }

    #[test]
    fn required_classes_follow_flags() {
        let options = GenerationOptions {
            uppercase: true,
            symbols: true,
            ..GenerationOptions::default()
        };
        assert_eq!(
            options.required_classes(),
            vec![CharacterClass::Uppercase, CharacterClass::Symbol]
        );
        assert_eq!(options.rules_count(), 2);
        assert_eq!(GenerationOptions::default().rules_count(), 0);
    }

    #[test]
    fn serializes_kind_under_type_key() {
        let json = serde_json::to_value(GenerationOptions::default()).expect("serialize options");
        assert_eq!(json["type"], "chars");
        assert_eq!(json["min_length"], 8);
        assert_eq!(json["max_length"], 16);
        assert_eq!(json["separator"], "-");
    }
}
