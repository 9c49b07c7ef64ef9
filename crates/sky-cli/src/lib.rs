// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use serde::Serialize;
use sky_core::{Dataset, SkyError};
use sky_noiseless::noiseless_skyline;
use sky_noisy::full_skyline;
use sky_oracle::Oracle;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Debug)]
pub enum CliError {
    Sky(SkyError),
    Io {
        context: String,
        source: std::io::Error,
    },
    Json {
        context: String,
        source: serde_json::Error,
    },
    InvalidInput(String),
}

impl CliError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Sky(SkyError::InvalidInput(_)) | Self::InvalidInput(_) => "invalid_input",
            Self::Sky(SkyError::NotSupported(_)) => "not_supported",
            Self::Sky(SkyError::ResourceLimit(_)) => "resource_limit",
            Self::Io { .. } => "io_error",
            Self::Json { .. } => "json_error",
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sky(err) => write!(f, "{err}"),
            Self::Io { context, source } => write!(f, "{context}: {source}"),
            Self::Json { context, source } => write!(f, "{context}: {source}"),
            Self::InvalidInput(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Sky(err) => Some(err),
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<SkyError> for CliError {
    fn from(value: SkyError) -> Self {
        Self::Sky(value)
    }
}

/// Requested computation mode.
#[derive(Clone, Debug, PartialEq)]
pub enum Mode {
    Noiseless,
    Noisy {
        error_probability: f64,
        tolerance: f64,
        seed: Option<u64>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cli {
    pub dataset: PathBuf,
    pub mode: Mode,
    pub json: bool,
}

/// Outcome of argument parsing: either a run request or an informational
/// command handled by the binary shell.
#[derive(Debug, PartialEq)]
pub enum Invocation {
    Run(Cli),
    Help,
    Version,
}

const USAGE: &str = "usage: skyline <datasetfile> noisless [--json]\n       skyline <datasetfile> noisy <error_probability> <tolerance> [--seed <u64>] [--json]";

pub fn parse_cli(args: &[String]) -> Result<Invocation, CliError> {
    if args
        .iter()
        .any(|arg| matches!(arg.as_str(), "-h" | "--help"))
    {
        return Ok(Invocation::Help);
    }
    if args
        .iter()
        .any(|arg| matches!(arg.as_str(), "-V" | "--version"))
    {
        return Ok(Invocation::Version);
    }
    if args.len() < 2 {
        return Err(CliError::invalid_input(USAGE));
    }

    let dataset = PathBuf::from(args[0].as_str());
    let (mode, rest) = match args[1].as_str() {
        // Both spellings of the mode literal are accepted.
        "noisless" | "noiseless" => (Mode::Noiseless, &args[2..]),
        "noisy" => {
            if args.len() < 4 {
                return Err(CliError::invalid_input(
                    "noisy mode requires <error_probability> and <tolerance>",
                ));
            }
            let error_probability = parse_probability(args[2].as_str(), "error_probability")?;
            let tolerance = parse_probability(args[3].as_str(), "tolerance")?;
            (
                Mode::Noisy {
                    error_probability,
                    tolerance,
                    seed: None,
                },
                &args[4..],
            )
        }
        other => {
            return Err(CliError::invalid_input(format!(
                "unknown mode '{other}'; expected 'noisless' or 'noisy'"
            )));
        }
    };

    let mut cli = Cli {
        dataset,
        mode,
        json: false,
    };

    let mut idx = 0usize;
    while idx < rest.len() {
        let (flag, inline_value) = split_flag(rest[idx].as_str())?;
        match flag {
            "--json" => {
                if inline_value.is_some() {
                    return Err(CliError::invalid_input("--json does not accept a value"));
                }
                cli.json = true;
            }
            "--seed" => {
                let Mode::Noisy { ref mut seed, .. } = cli.mode else {
                    return Err(CliError::invalid_input(
                        "--seed is only supported in noisy mode",
                    ));
                };
                let raw = take_flag_value(flag, inline_value, rest, &mut idx)?;
                let parsed = raw.parse::<u64>().map_err(|_| {
                    CliError::invalid_input(format!(
                        "--seed expects a non-negative integer, got '{raw}'"
                    ))
                })?;
                *seed = Some(parsed);
            }
            other => {
                return Err(CliError::invalid_input(format!("unknown option '{other}'")));
            }
        }
        idx += 1;
    }

    Ok(Invocation::Run(cli))
}

fn split_flag(token: &str) -> Result<(&str, Option<String>), CliError> {
    if !token.starts_with("--") {
        return Err(CliError::invalid_input(format!(
            "unexpected positional argument '{token}'; expected --flag"
        )));
    }
    if let Some((flag, value)) = token.split_once('=') {
        return Ok((flag, Some(value.to_string())));
    }
    Ok((token, None))
}

fn take_flag_value(
    flag: &str,
    inline_value: Option<String>,
    tokens: &[String],
    idx: &mut usize,
) -> Result<String, CliError> {
    if let Some(value) = inline_value {
        return Ok(value);
    }

    *idx += 1;
    let value = tokens
        .get(*idx)
        .ok_or_else(|| CliError::invalid_input(format!("{flag} requires a value")))?;
    if value.starts_with("--") {
        return Err(CliError::invalid_input(format!(
            "{flag} requires a value, but got option '{value}'"
        )));
    }
    Ok(value.clone())
}

fn parse_probability(raw: &str, name: &str) -> Result<f64, CliError> {
    let parsed = raw
        .parse::<f64>()
        .map_err(|_| CliError::invalid_input(format!("{name} expects a number, got '{raw}'")))?;
    if !parsed.is_finite() || !(0.0..0.5).contains(&parsed) {
        return Err(CliError::invalid_input(format!(
            "{name} must be in [0.0, 0.5); got {raw}"
        )));
    }
    Ok(parsed)
}

/// Parses a text dataset: one item per non-empty line, attributes separated
/// by commas or whitespace.
pub fn parse_dataset_text(raw: &str) -> Result<Dataset, CliError> {
    let mut rows = Vec::new();
    for (line_idx, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let cells: Vec<&str> = if line.contains(',') {
            line.split(',').map(str::trim).collect()
        } else {
            line.split_whitespace().collect()
        };

        let mut row = Vec::with_capacity(cells.len());
        for (col_idx, cell) in cells.iter().enumerate() {
            if cell.is_empty() {
                return Err(CliError::invalid_input(format!(
                    "line {} column {} is empty",
                    line_idx + 1,
                    col_idx + 1
                )));
            }
            let value = cell.parse::<f64>().map_err(|_| {
                CliError::invalid_input(format!(
                    "line {} column {} is not a valid float: '{}'",
                    line_idx + 1,
                    col_idx + 1,
                    cell
                ))
            })?;
            row.push(value);
        }
        rows.push(row);
    }

    Dataset::from_rows(rows).map_err(CliError::from)
}

pub fn load_dataset(path: &Path) -> Result<Dataset, CliError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| CliError::io(format!("failed to read '{}'", path.display()), source))?;
    parse_dataset_text(raw.as_str())
}

/// Result of one CLI run, ready for rendering.
#[derive(Clone, Debug, Serialize)]
pub struct RunReport {
    pub command: &'static str,
    pub n: usize,
    pub d: usize,
    pub indices: Vec<usize>,
    pub elapsed_ms: u64,
    pub comparisons: Option<u64>,
    pub error_probability: Option<f64>,
    pub tolerance: Option<f64>,
    pub seed: Option<u64>,
}

pub fn execute(dataset: Dataset, mode: &Mode) -> Result<RunReport, CliError> {
    let n = dataset.size();
    let d = dataset.ndims();

    match *mode {
        Mode::Noiseless => {
            let start = Instant::now();
            let mut indices = noiseless_skyline(&dataset);
            let elapsed_ms = start.elapsed().as_millis() as u64;
            indices.sort_unstable();
            Ok(RunReport {
                command: "noisless",
                n,
                d,
                indices,
                elapsed_ms,
                comparisons: None,
                error_probability: None,
                tolerance: None,
                seed: None,
            })
        }
        Mode::Noisy {
            error_probability,
            tolerance,
            seed,
        } => {
            let mut oracle = match seed {
                Some(seed) => Oracle::with_seed(dataset, error_probability, seed)?,
                None => Oracle::new(dataset, error_probability)?,
            };
            let start = Instant::now();
            let result = full_skyline(&mut oracle, tolerance)?;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            let mut indices = result.indices;
            indices.sort_unstable();
            Ok(RunReport {
                command: "noisy",
                n,
                d,
                indices,
                elapsed_ms,
                comparisons: Some(result.diagnostics.comparisons),
                error_probability: Some(error_probability),
                tolerance: Some(tolerance),
                seed: Some(result.diagnostics.seed.unwrap_or_else(|| oracle.seed())),
            })
        }
    }
}

/// One index per line, ascending.
pub fn render_plain(report: &RunReport) -> String {
    let mut out = String::new();
    for index in &report.indices {
        out.push_str(&index.to_string());
        out.push('\n');
    }
    out
}

/// Benchmark line for stderr: elapsed milliseconds, plus the base comparison
/// count in noisy mode.
pub fn render_stat_line(report: &RunReport) -> String {
    match report.comparisons {
        Some(comparisons) => format!("{} {}", report.elapsed_ms, comparisons),
        None => format!("{}", report.elapsed_ms),
    }
}

#[derive(Serialize)]
struct JsonEnvelope<'a> {
    input: &'a str,
    #[serde(flatten)]
    report: &'a RunReport,
}

pub fn render_json(path: &Path, report: &RunReport) -> Result<String, CliError> {
    let input = path.display().to_string();
    let envelope = JsonEnvelope {
        input: input.as_str(),
        report,
    };
    serde_json::to_string_pretty(&envelope)
        .map_err(|source| CliError::json("failed to serialize run report", source))
}
