//! The demo around the sorts: random input, printing, timing and the environment driven
//! configuration of the `classic-sorts` binary.

use std::env;
use std::fmt::Display;
use std::io::{self, Write};
use std::num::ParseIntError;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use rand::prelude::*;
use serde::Serialize;
use thiserror::Error;

use crate::algorithm::{Algorithm, UnknownAlgorithm};

/// Generated values lie in `0..VALUE_BOUND`.
pub const VALUE_BOUND: i32 = 500;

pub const DEFAULT_LEN: usize = 500;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SORT_ALGORITHM: {0}")]
    Algorithm(#[from] UnknownAlgorithm),
    #[error("SORT_LEN must be a non-negative integer, got {value:?}: {source}")]
    Len { value: String, source: ParseIntError },
    #[error("SORT_SEED must be an unsigned 64-bit integer, got {value:?}: {source}")]
    Seed { value: String, source: ParseIntError },
    #[error("SORT_PRINT must be 0 or 1, got {0:?}")]
    Print(String),
    #[error("SORT_REPORT must be text or json, got {0:?}")]
    Report(String),
}

/// Where the random generator gets its seed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedSource {
    Fixed(u64),
    /// Nanoseconds since the Unix epoch at the time of the call.
    Clock,
}

impl SeedSource {
    pub fn seed(self) -> u64 {
        match self {
            SeedSource::Fixed(seed) => seed,
            SeedSource::Clock => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_nanos() as u64)
                .unwrap_or_default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub algorithm: Algorithm,
    pub len: usize,
    pub seed: SeedSource,
    pub print: bool,
    pub report: ReportFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Quick,
            len: DEFAULT_LEN,
            seed: SeedSource::Clock,
            print: true,
            report: ReportFormat::Text,
        }
    }
}

impl Config {
    /// Reads `SORT_ALGORITHM`, `SORT_LEN`, `SORT_SEED`, `SORT_PRINT` and `SORT_REPORT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Missing keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(value) = lookup("SORT_ALGORITHM") {
            config.algorithm = value.parse()?;
        }

        if let Some(value) = lookup("SORT_LEN") {
            config.len = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::Len { value, source })?;
        }

        if let Some(value) = lookup("SORT_SEED") {
            let seed = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::Seed { value, source })?;
            config.seed = SeedSource::Fixed(seed);
        }

        if let Some(value) = lookup("SORT_PRINT") {
            config.print = match value.trim() {
                "0" | "false" => false,
                "1" | "true" => true,
                _ => return Err(ConfigError::Print(value.clone())),
            };
        }

        if let Some(value) = lookup("SORT_REPORT") {
            config.report = match value.trim().to_ascii_lowercase().as_str() {
                "text" => ReportFormat::Text,
                "json" => ReportFormat::Json,
                _ => return Err(ConfigError::Report(value)),
            };
        }

        Ok(config)
    }
}

/// Outcome of one harness run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    pub algorithm: Algorithm,
    pub len: usize,
    pub seed: u64,
    pub micros: u64,
    pub sorted: bool,
}

/// Returns `len` values in `0..VALUE_BOUND`. The same seed always yields the same values.
pub fn random_array(len: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(0..VALUE_BOUND)).collect()
}

/// Renders the values separated by single spaces.
pub fn format_array<T: Display>(v: &[T]) -> String {
    v.iter()
        .map(|val| val.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs `f` and returns its result together with the elapsed wall-clock time.
pub fn time<R>(f: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

pub fn is_sorted<T: Ord>(v: &[T]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}

/// Generates an array, sorts it with the configured algorithm and writes the result to `out`.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<Report, Error> {
    let seed = config.seed.seed();
    let mut v = random_array(config.len, seed);

    if config.print && config.report == ReportFormat::Text {
        writeln!(out, "{}", format_array(&v))?;
    }

    let ((), elapsed) = time(|| config.algorithm.sort(&mut v));

    let report = Report {
        algorithm: config.algorithm,
        len: v.len(),
        seed,
        micros: elapsed.as_micros() as u64,
        sorted: is_sorted(&v),
    };

    match config.report {
        ReportFormat::Text => {
            if config.print {
                writeln!(out, "{}", format_array(&v))?;
            }
            writeln!(out)?;
            writeln!(out, "Time taken (microseconds): {}", report.micros)?;
        }
        ReportFormat::Json => {
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }
    }

    Ok(report)
}
