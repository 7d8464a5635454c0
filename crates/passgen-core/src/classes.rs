use serde::{Deserialize, Serialize};

/// Inclusive range of ASCII codepoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodepointRange {
    pub start: u32,
    pub end: u32,
}

impl CodepointRange {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, code: u32) -> bool {
        self.start <= code && code <= self.end
    }

    /// Number of codepoints covered by the range.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start + 1) as usize
        }
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    pub fn codepoints(&self) -> impl Iterator<Item = u32> {
        self.start..=self.end
    }
}

const LOWERCASE_RANGES: &[CodepointRange] = &[CodepointRange::new(0x61, 0x7a)];
const UPPERCASE_RANGES: &[CodepointRange] = &[CodepointRange::new(0x41, 0x5a)];
const NUMERIC_RANGES: &[CodepointRange] = &[CodepointRange::new(0x30, 0x39)];
const SYMBOL_RANGES: &[CodepointRange] = &[
    CodepointRange::new(0x21, 0x2f),
    CodepointRange::new(0x3a, 0x40),
    CodepointRange::new(0x5b, 0x60),
    CodepointRange::new(0x7b, 0x7e),
];

/// Disjoint ASCII partitions a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Numeric,
    Symbol,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Numeric,
        CharacterClass::Symbol,
    ];

    pub fn ranges(self) -> &'static [CodepointRange] {
        match self {
            CharacterClass::Lowercase => LOWERCASE_RANGES,
            CharacterClass::Uppercase => UPPERCASE_RANGES,
            CharacterClass::Numeric => NUMERIC_RANGES,
            CharacterClass::Symbol => SYMBOL_RANGES,
        }
    }

    pub fn contains(self, code: u32) -> bool {
        self.ranges().iter().any(|range| range.contains(code))
    }

    /// Total number of codepoints in the class.
    pub fn size(self) -> usize {
        self.ranges().iter().map(CodepointRange::len).sum()
    }

    pub fn codepoints(self) -> impl Iterator<Item = u32> {
        self.ranges().iter().flat_map(CodepointRange::codepoints)
    }
}

pub fn is_numeric(code: u32) -> bool {
    CharacterClass::Numeric.contains(code)
}

pub fn is_upper(code: u32) -> bool {
    CharacterClass::Uppercase.contains(code)
}

pub fn is_special(code: u32) -> bool {
    CharacterClass::Symbol.contains(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_partition_printable_ascii() {
        for code in 0x21..=0x7e_u32 {
            let owners = CharacterClass::ALL
                .iter()
                .filter(|class| class.contains(code))
                .count();
            assert_eq!(owners, 1, "codepoint {code:#x} belongs to {owners} classes");
        }
        assert!(CharacterClass::ALL.iter().all(|class| !class.contains(0x20)));
        assert!(CharacterClass::ALL.iter().all(|class| !class.contains(0x7f)));
    }

    #[test]
    fn class_sizes_match_ascii_layout() {
        assert_eq!(CharacterClass::Lowercase.size(), 26);
        assert_eq!(CharacterClass::Uppercase.size(), 26);
        assert_eq!(CharacterClass::Numeric.size(), 10);
        assert_eq!(CharacterClass::Symbol.size(), 32);
        assert_eq!(CharacterClass::Symbol.codepoints().count(), 32);
    }

    #[test]
    fn inverted_range_is_empty() {
        let range = CodepointRange::new(0x5a, 0x41);
        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
        assert_eq!(range.codepoints().count(), 0);
        assert_eq!(CodepointRange::new(0x30, 0x30).len(), 1);
    }

    #[test]
    fn predicates_follow_range_boundaries() {
        assert!(is_numeric('0' as u32));
        assert!(is_numeric('9' as u32));
        assert!(!is_numeric('a' as u32));

        assert!(is_upper('A' as u32));
        assert!(is_upper('Z' as u32));
        assert!(!is_upper('[' as u32));
        assert!(!is_upper('a' as u32));

        for symbol in ['!', '/', ':', '@', '[', '`', '{', '~'] {
            assert!(is_special(symbol as u32), "{symbol} should be a symbol");
        }
        assert!(!is_special(' ' as u32));
        assert!(!is_special('5' as u32));
    }
}
