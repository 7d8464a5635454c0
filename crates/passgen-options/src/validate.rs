use passgen_core::{DEFAULTS, GenerationKind, GenerationOptions, rules_count};
use tracing::warn;

use crate::errors::{ValidationIssue, ValidationReport};
use crate::model::RawOptions;

/// Normalized options with accumulated warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedOptions {
    pub options: GenerationOptions,
    pub warnings: Vec<ValidationIssue>,
}

/// Length bounds after balancing.
///
/// When `report` holds errors the bounds are returned as they were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalancedLengths {
    pub min_length: Option<i64>,
    pub max_length: Option<i64>,
    pub report: ValidationReport,
}

/// Validate the generation type literal.
pub fn validate_type(kind: &str) -> ValidationReport {
    let mut report = ValidationReport::default();
    if kind.parse::<GenerationKind>().is_err() {
        report.push_error(
            ValidationIssue::error(
                "invalid_type",
                "/type",
                "Invalid type value. Should be 'chars' or 'words'",
            )
            .with_hint(format!("got '{kind}'")),
        );
    }
    report
}

/// Validate the length bounds and fill in or raise them.
///
/// With `requires_classes` set, `max_length` must leave room for one
/// character of each required class and a smaller `min_length` is raised
/// to `rules_count` with a warning.
pub fn validate_and_balance_lengths(
    min_length: Option<i64>,
    max_length: Option<i64>,
    requires_classes: bool,
    rules_count: usize,
) -> BalancedLengths {
    let mut report = ValidationReport::default();
    let rules = rules_count as i64;

    if min_length.is_some_and(|min| min <= 0) {
        report.push_error(ValidationIssue::error(
            "min_length_not_positive",
            "/min_length",
            "Min length should be positive",
        ));
    }
    if max_length.is_some_and(|max| max <= 0) {
        report.push_error(ValidationIssue::error(
            "max_length_not_positive",
            "/max_length",
            "Max length should be positive",
        ));
    }
    if !report.is_ok() {
        return BalancedLengths {
            min_length,
            max_length,
            report,
        };
    }

    if let (Some(min), Some(max)) = (min_length, max_length)
        && min > max
    {
        report.push_error(ValidationIssue::error(
            "min_greater_than_max",
            "/min_length",
            "Min length should be less or equal to max length",
        ));
        return BalancedLengths {
            min_length,
            max_length,
            report,
        };
    }

    if requires_classes && max_length.is_some_and(|max| max < rules) {
        report.push_error(
            ValidationIssue::error(
                "max_length_too_small",
                "/max_length",
                format!(
                    "Max length is too small. Should be at least {rules} according to number of rules"
                ),
            )
            .with_hint("raise max length or request fewer character classes"),
        );
        return BalancedLengths {
            min_length,
            max_length,
            report,
        };
    }

    let mut min_length = min_length;
    if requires_classes && min_length.is_some_and(|min| min < rules) {
        report.push_warning(ValidationIssue::warning(
            "min_length_raised",
            "/min_length",
            format!(
                "Min length is too small. Should be at least {rules} according to number of rules. Increasing min length to {rules}"
            ),
        ));
        min_length = Some(rules);
    }

    let default_min = DEFAULTS.min_length as i64;
    let default_max = DEFAULTS.max_length as i64;
    let (min_length, max_length) = match (min_length, max_length) {
        (None, None) => (default_min, default_max),
        (None, Some(max)) => (if max < default_min { max } else { default_min }, max),
        (Some(min), None) => (min, if min > default_max { min } else { default_max }),
        (Some(min), Some(max)) => (min, max),
    };

    BalancedLengths {
        min_length: Some(min_length),
        max_length: Some(max_length),
        report,
    }
}

/// Validate a raw option set end-to-end.
///
/// All errors are accumulated before failing. Warnings are logged as they
/// are found and never block success.
pub fn validate_options(raw: &RawOptions) -> Result<ValidatedOptions, ValidationReport> {
    let kind_value = raw.kind.as_deref().unwrap_or(DEFAULTS.kind.as_str());
    let mut report = validate_type(kind_value);
    let kind = kind_value.parse::<GenerationKind>().ok();
    let chars = kind == Some(GenerationKind::Chars);

    let uppercase = raw.uppercase.unwrap_or(false);
    let numbers = raw.numbers.unwrap_or(false);
    let symbols = raw.symbols.unwrap_or(false);
    let rules = rules_count(uppercase, numbers, symbols);

    let lengths = validate_and_balance_lengths(raw.min_length, raw.max_length, chars, rules);
    report.merge(lengths.report);

    for issue in &report.warnings {
        warn!(code = %issue.code, path = %issue.path, "{}", issue.message);
    }

    let separator = raw
        .separator
        .clone()
        .unwrap_or_else(|| DEFAULTS.separator.to_string());

    let (Some(kind), Some(min_length), Some(max_length)) =
        (kind, lengths.min_length, lengths.max_length)
    else {
        return Err(report);
    };
    if !report.is_ok() {
        return Err(report);
    }

    Ok(ValidatedOptions {
        options: GenerationOptions {
            kind,
            min_length: min_length as usize,
            max_length: max_length as usize,
            uppercase,
            numbers,
            symbols,
            separator,
        },
        warnings: report.warnings,
    })
}
