use passgen_core::GenerationOptions;
use serde::{Deserialize, Serialize};

/// Raw option set as produced by a flag parser or a config file.
///
/// Every field is optional; lengths stay signed so that non-positive input
/// reaches validation instead of failing to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawOptions {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uppercase: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numbers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbols: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
}

impl RawOptions {
    /// Fill every unset field from `fallback`.
    pub fn or(self, fallback: RawOptions) -> RawOptions {
        RawOptions {
            kind: self.kind.or(fallback.kind),
            min_length: self.min_length.or(fallback.min_length),
            max_length: self.max_length.or(fallback.max_length),
            uppercase: self.uppercase.or(fallback.uppercase),
            numbers: self.numbers.or(fallback.numbers),
            symbols: self.symbols.or(fallback.symbols),
            separator: self.separator.or(fallback.separator),
        }
    }
}

impl From<&GenerationOptions> for RawOptions {
    fn from(options: &GenerationOptions) -> Self {
        Self {
            kind: Some(options.kind.as_str().to_string()),
            min_length: Some(options.min_length as i64),
            max_length: Some(options.max_length as i64),
            uppercase: Some(options.uppercase),
            numbers: Some(options.numbers),
            symbols: Some(options.symbols),
            separator: Some(options.separator.clone()),
        }
    }
}
