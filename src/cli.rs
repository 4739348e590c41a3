//! Command-line front end.
//!
//! Argument definitions and the command implementations used by the
//! `bm_search` binary. Commands take their input and output streams as
//! parameters so they can be driven from tests.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};

use crate::config::{AppConfig, TraceFormat};
use crate::data_structures::boyer_moore_matcher::{BoyerMooreMatcher, TracingSink};
use crate::error::AppResult;
use crate::report::reporter_for;

/// Command line arguments for BM Search.
#[derive(Parser, Debug)]
#[clap(name = "bm_search", version, about)]
pub struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    pub config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find the first occurrence of a pattern in a text
    Search(SearchArgs),

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Arguments of the `search` command.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct SearchArgs {
    /// Text to search in; prompted for when omitted
    #[clap(short, long)]
    pub text: Option<String>,

    /// Pattern to search for; prompted for when omitted
    #[clap(short, long)]
    pub pattern: Option<String>,

    /// Print every comparison step
    #[clap(long, conflicts_with = "no_trace")]
    pub trace: bool,

    /// Print only the result
    #[clap(long)]
    pub no_trace: bool,

    /// Output format
    #[clap(long, value_enum)]
    pub format: Option<TraceFormat>,
}

impl SearchArgs {
    /// Applies command-line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut AppConfig) {
        if self.trace {
            config.trace.enabled = true;
        }
        if self.no_trace {
            config.trace.enabled = false;
        }
        if let Some(format) = self.format {
            config.trace.format = format;
        }
    }
}

/// Runs the parsed command.
pub fn run<R: BufRead, W: Write>(
    command: Command,
    mut config: AppConfig,
    input: R,
    mut out: W,
) -> AppResult<()> {
    match command {
        Command::Search(args) => {
            args.apply(&mut config);
            run_search(&args, &config, input, out).map(|_| ())
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            writeln!(out, "Configuration is valid")?;
            Ok(())
        }
        Command::GenConfig { output } => {
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let toml = toml::to_string_pretty(&AppConfig::default())?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Searches for the pattern and writes the trace and outcome to `out`.
///
/// Missing text or pattern arguments are read from `input` after a prompt.
/// Prompts are only written in text format so JSON output stays one object
/// per line. If `input` ends before a value is supplied, the search reports
/// no match.
///
/// With trace output disabled, scan steps are still sent to the debug log.
pub fn run_search<R: BufRead, W: Write>(
    args: &SearchArgs,
    config: &AppConfig,
    mut input: R,
    mut out: W,
) -> AppResult<Option<usize>> {
    let show_prompts = config.trace.format == TraceFormat::Text;
    let text = match &args.text {
        Some(text) => Some(text.clone()),
        None => prompt(&mut input, &mut out, "Enter a text: ", show_prompts)?,
    };
    let pattern = match &args.pattern {
        Some(pattern) => Some(pattern.clone()),
        None => prompt(&mut input, &mut out, "Enter the pattern: ", show_prompts)?,
    };

    let mut reporter = reporter_for(
        config.trace.format,
        &mut out,
        text.as_deref().unwrap_or_default(),
        pattern.as_deref().unwrap_or_default(),
        config.trace.enabled,
    );

    let result = match (text, pattern) {
        (Some(text), Some(pattern)) => {
            let pattern: Vec<char> = pattern.chars().collect();
            let text: Vec<char> = text.chars().collect();
            let matcher =
                BoyerMooreMatcher::try_with_options(&pattern, config.search.matcher_options())?;
            debug!(
                pattern_len = pattern.len(),
                text_len = text.len(),
                dense_alphabet = matcher.bad_character_table().is_dense(),
                "searching"
            );
            if config.trace.enabled {
                matcher.find_first_traced(&text, reporter.as_mut())
            } else {
                matcher.find_first_traced(&text, &mut TracingSink)
            }
        }
        _ => None,
    };

    reporter.finish(result)?;
    info!(?result, "search finished");
    Ok(result)
}

/// Reads one line of input, after writing `label` when `show` is set.
/// Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
    show: bool,
) -> AppResult<Option<String>> {
    if show {
        write!(out, "{label}")?;
        out.flush()?;
    }

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.strip_suffix('\n').unwrap_or(&line);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    Ok(Some(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::boyer_moore_matcher::BoyerMooreError;
    use crate::error::AppError;
    use std::io::Cursor;

    fn quiet_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.trace.enabled = false;
        config
    }

    #[test]
    fn test_search_from_arguments() {
        let args = SearchArgs {
            text: Some("HELLO WORLD".to_string()),
            pattern: Some("WORLD".to_string()),
            ..SearchArgs::default()
        };
        let mut out = Vec::new();

        let result = run_search(&args, &quiet_config(), Cursor::new(""), &mut out).unwrap();

        assert_eq!(result, Some(6));
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Pattern match at position: 6"));
        assert!(!output.contains("Enter"));
    }

    #[test]
    fn test_search_prompts_for_missing_values() {
        let mut out = Vec::new();
        let input = Cursor::new("ABAAABCD\r\nABC\n");

        let result = run_search(&SearchArgs::default(), &quiet_config(), input, &mut out).unwrap();

        assert_eq!(result, Some(4));
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("Enter a text: Enter the pattern: "));
    }

    #[test]
    fn test_search_keeps_spaces_in_input() {
        let mut out = Vec::new();
        let input = Cursor::new("a  b\n  b\n");

        let result = run_search(&SearchArgs::default(), &quiet_config(), input, &mut out).unwrap();
        assert_eq!(result, Some(1));
    }

    #[test]
    fn test_closed_input_is_not_found() {
        let mut out = Vec::new();

        let result = run_search(&SearchArgs::default(), &quiet_config(), Cursor::new(""), &mut out).unwrap();

        assert_eq!(result, None);
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("No match pattern found in the given text."));
    }

    #[test]
    fn test_missing_text_is_not_found_even_for_empty_pattern() {
        let args = SearchArgs {
            pattern: Some(String::new()),
            ..SearchArgs::default()
        };

        let result = run_search(&args, &quiet_config(), Cursor::new(""), Vec::new()).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_empty_pattern_matches_at_zero() {
        let mut out = Vec::new();
        let input = Cursor::new("ANY\n\n");

        let result = run_search(&SearchArgs::default(), &quiet_config(), input, &mut out).unwrap();
        assert_eq!(result, Some(0));
    }

    #[test]
    fn test_pattern_over_limit() {
        let mut config = quiet_config();
        config.search.max_pattern_len = 2;
        let args = SearchArgs {
            text: Some("ABCD".to_string()),
            pattern: Some("ABC".to_string()),
            ..SearchArgs::default()
        };

        let err = run_search(&args, &config, Cursor::new(""), Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            AppError::Matcher(BoyerMooreError::PatternTooLarge { len: 3, max: 2 })
        ));
    }

    #[test]
    fn test_search_args_override_config() {
        let mut config = AppConfig::default();
        let args = SearchArgs {
            no_trace: true,
            format: Some(TraceFormat::Json),
            ..SearchArgs::default()
        };
        args.apply(&mut config);

        assert!(!config.trace.enabled);
        assert_eq!(config.trace.format, TraceFormat::Json);
    }

    #[test]
    fn test_parse_arguments() {
        let args = Args::try_parse_from([
            "bm_search", "search", "--text", "ABC", "--pattern", "B", "--format", "json",
        ])
        .unwrap();

        match args.command {
            Some(Command::Search(search)) => {
                assert_eq!(search.text.as_deref(), Some("ABC"));
                assert_eq!(search.pattern.as_deref(), Some("B"));
                assert_eq!(search.format, Some(TraceFormat::Json));
            }
            other => panic!("unexpected command: {other:?}"),
        }

        assert!(Args::try_parse_from(["bm_search", "search", "--trace", "--no-trace"]).is_err());
    }

    #[test]
    fn test_gen_config_writes_toml() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("nested").join("bm_search.toml");

        run(
            Command::GenConfig { output: output.clone() },
            AppConfig::default(),
            Cursor::new(""),
            Vec::new(),
        )
        .unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        let parsed: AppConfig = toml::from_str(&written).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn test_validate_command() {
        let mut out = Vec::new();
        run(Command::Validate, AppConfig::default(), Cursor::new(""), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Configuration is valid\n");
    }

    #[test]
    fn test_json_output_with_prompted_input() {
        let mut config = AppConfig::default();
        config.trace.format = TraceFormat::Json;
        let mut out = Vec::new();

        let result = run_search(
            &SearchArgs::default(),
            &config,
            Cursor::new("ABAAABCD\nABC\n"),
            &mut out,
        )
        .unwrap();
        assert_eq!(result, Some(4));

        let output = String::from_utf8(out).unwrap();
        let records: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(records.len(), 7);
        assert_eq!(records[6]["kind"], "result");
        assert_eq!(records[6]["position"], 4);
    }

    #[derive(Clone, Default)]
    struct CapturedLog(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_disabled_trace_goes_to_debug_log() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let args = SearchArgs {
            text: Some("ABAAABCD".to_string()),
            pattern: Some("ABC".to_string()),
            ..SearchArgs::default()
        };
        let mut out = Vec::new();

        let result = tracing::subscriber::with_default(subscriber, || {
            run_search(&args, &quiet_config(), Cursor::new(""), &mut out)
        })
        .unwrap();
        assert_eq!(result, Some(4));

        let output = String::from_utf8(out).unwrap();
        assert!(!output.contains("Mismatch"));
        let logged = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("boyer-moore scan"));
        assert!(logged.contains("kind=Mismatch"));
    }
}
