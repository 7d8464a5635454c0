mod config;
mod dictionary;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use config::{ConfigError, PassgenConfig};
use dictionary::load_dictionary;
use logging::init_logging;
use passgen_core::GenerationKind;
use passgen_generate::{GenerationEngine, GenerationError, SamplingPolicy};
use passgen_options::{RawOptions, ValidationReport, validate_options};
use thiserror::Error;

/// Single line written to stderr whenever no password is produced.
const FAILURE_MESSAGE: &str = "Unable to generate password";

#[derive(Debug, Error)]
enum CliError {
    #[error("argument error: {0}")]
    Parse(#[from] clap::Error),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid options: {} error(s)", .0.errors.len())]
    Validation(ValidationReport),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(
    name = "passgen",
    version,
    about = "Generate random passwords and passphrases"
)]
struct Cli {
    /// Generation type: `chars` or `words`.
    #[arg(long = "type", value_name = "TYPE")]
    kind: Option<String>,
    /// Minimum length (characters, or words with --type words).
    #[arg(long, allow_negative_numbers = true)]
    min_length: Option<i64>,
    /// Maximum length (characters, or words with --type words).
    #[arg(long, allow_negative_numbers = true)]
    max_length: Option<i64>,
    /// Require an upper-case letter; upper-cases passphrases.
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    uppercase: Option<bool>,
    /// Require a digit.
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    numbers: Option<bool>,
    /// Require a symbol.
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    symbols: Option<bool>,
    /// Word separator for passphrases.
    #[arg(long, allow_hyphen_values = true)]
    separator: Option<String>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Give up after this many rejected candidates.
    #[arg(long)]
    max_attempts: Option<u64>,
    /// Word list used for passphrases, one word per line.
    #[arg(long, env = "PASSGEN_DICTIONARY")]
    dictionary: Option<PathBuf>,
    /// Path to passgen.toml.
    #[arg(long, env = "PASSGEN_CONFIG")]
    config: Option<PathBuf>,
    /// Emit logs as JSON lines.
    #[arg(long, default_value_t = false)]
    log_json: bool,
    #[arg(value_name = "ARGS", hide = true)]
    unknown: Vec<String>,
}

impl Cli {
    fn raw_options(&self) -> RawOptions {
        RawOptions {
            kind: self.kind.clone(),
            min_length: self.min_length,
            max_length: self.max_length,
            uppercase: self.uppercase,
            numbers: self.numbers,
            symbols: self.symbols,
            separator: self.separator.clone(),
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let _ = init_logging(false);
            return fail(CliError::from(err));
        }
    };

    if let Err(err) = init_logging(cli.log_json) {
        return fail(CliError::Logging(err));
    }

    match run(cli) {
        Ok(password) => {
            println!("{password}");
            ExitCode::SUCCESS
        }
        Err(err) => fail(err),
    }
}

fn fail(err: CliError) -> ExitCode {
    match &err {
        CliError::Validation(report) => {
            for issue in &report.errors {
                tracing::error!(
                    code = %issue.code,
                    path = %issue.path,
                    hint = ?issue.hint,
                    "{}",
                    issue.message
                );
            }
        }
        CliError::Parse(parse) => {
            tracing::error!(error = %parse.to_string().trim_end(), "failed to parse arguments");
        }
        other => tracing::error!(error = %other, "generation aborted"),
    }
    eprintln!("{FAILURE_MESSAGE}");
    ExitCode::FAILURE
}

fn run(cli: Cli) -> Result<String, CliError> {
    for token in &cli.unknown {
        tracing::warn!(argument = %token, "Unknown argument: {token}");
    }

    let config = PassgenConfig::load_optional(cli.config.as_deref())?;
    let raw = cli.raw_options().or(config.options);
    let validated = validate_options(&raw).map_err(CliError::Validation)?;
    let options = validated.options;

    let policy = SamplingPolicy {
        max_attempts: cli.max_attempts.or(config.max_attempts),
    };
    if options.kind == GenerationKind::Words && options.uppercase && policy.max_attempts.is_none()
    {
        tracing::debug!("uppercase passphrases retry without a cap; see --max-attempts");
    }

    let dictionary = match options.kind {
        GenerationKind::Words => {
            let path = cli.dictionary.or(config.dictionary);
            Some(load_dictionary(path.as_deref())?)
        }
        GenerationKind::Chars => None,
    };

    let mut engine = GenerationEngine::new(policy);
    if let Some(dictionary) = &dictionary {
        engine = engine.with_dictionary(dictionary);
    }

    let result = match cli.seed {
        Some(seed) => engine.generate_with_seed(&options, seed)?,
        None => engine.generate_unseeded(&options)?,
    };
    tracing::debug!(attempts = result.attempts, seed = ?result.seed, "password ready");

    Ok(result.value)
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["passgen"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).expect("parse args")
    }

    #[test]
    fn maps_flags_onto_raw_options() {
        let cli = parse(&[
            "--type",
            "words",
            "--min-length",
            "3",
            "--max-length=6",
            "--uppercase",
            "--numbers=false",
            "--separator",
            "-",
        ]);
        let raw = cli.raw_options();
        assert_eq!(raw.kind.as_deref(), Some("words"));
        assert_eq!(raw.min_length, Some(3));
        assert_eq!(raw.max_length, Some(6));
        assert_eq!(raw.uppercase, Some(true));
        assert_eq!(raw.numbers, Some(false));
        assert_eq!(raw.symbols, None);
        assert_eq!(raw.separator.as_deref(), Some("-"));
    }

    #[test]
    fn negative_lengths_reach_validation() {
        let cli = parse(&["--min-length", "-2"]);
        assert_eq!(cli.min_length, Some(-2));
    }

    #[test]
    fn stray_tokens_are_collected() {
        let cli = parse(&["--symbols", "extra", "more"]);
        assert_eq!(cli.symbols, Some(true));
        assert_eq!(cli.unknown, vec!["extra", "more"]);
    }

    #[test]
    fn malformed_flag_value_is_a_parse_error() {
        let result = Cli::try_parse_from(["passgen", "--min-length", "eight"]);
        assert!(result.is_err());
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let first = run(parse(&["--seed", "9", "--numbers", "--symbols"])).expect("first");
        let second = run(parse(&["--seed", "9", "--numbers", "--symbols"])).expect("second");
        assert_eq!(first, second);
    }

    #[test]
    fn validation_errors_are_reported_together() {
        let err = run(parse(&["--type", "phrase", "--min-length", "0"])).expect_err("invalid");
        match err {
            CliError::Validation(report) => assert_eq!(report.errors.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("log buffer").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn validation_failure_logs_issue_hints() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let err = run(parse(&["--type", "phrase"])).expect_err("invalid type");
        let _ = tracing::subscriber::with_default(subscriber, || fail(err));

        let output =
            String::from_utf8(logs.0.lock().expect("log buffer").clone()).expect("utf-8");
        assert!(output.contains("invalid_type"), "{output}");
        assert!(output.contains("got 'phrase'"), "{output}");
    }

    #[test]
    fn config_file_fills_unset_flags() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("passgen.toml");
        std::fs::write(
            &path,
            "[options]\ntype = \"words\"\nmin_length = 2\nmax_length = 2\nseparator = \"+\"\n",
        )
        .expect("write config");

        let config = path.to_str().expect("utf-8 path");
        let password = run(parse(&["--config", config, "--seed", "1"])).expect("generate");
        assert_eq!(password.split('+').count(), 2);
    }
}
