//! The load / shift / save demo.
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::{Deserialize, Serialize};

use matview::io::{load_with, save_with};
use matview::math::Matrix;
use matview::text::render_with;
use matview::TextFormat;

/// Parameters for one demo run. Every field has a default, so a config file
/// only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Subtracted from every element.
    pub subtract: i64,
    pub format: TextFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("matrixload.txt"),
            output: PathBuf::from("output").join("matrix.txt"),
            subtract: 2,
            format: TextFormat::default(),
        }
    }
}

impl DemoConfig {
    /// Config file (if given) overlaid with command-line overrides.
    pub fn from_arguments(matches: &ArgMatches) -> Result<Self> {
        let mut config = match matches.get_one::<PathBuf>("config") {
            Some(path) => load_demo_config(path)?,
            None => DemoConfig::default(),
        };

        if let Some(input) = matches.get_one::<PathBuf>("input") {
            config.input = input.clone();
        }
        if let Some(output) = matches.get_one::<PathBuf>("output") {
            config.output = output.clone();
        }
        if let Some(subtract) = matches.get_one::<i64>("subtract") {
            config.subtract = *subtract;
        }

        Ok(config)
    }
}

/// Load a demo configuration from a JSON file.
pub fn load_demo_config<P: AsRef<Path>>(path: P) -> Result<DemoConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: DemoConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Loads `config.input`, prints it, subtracts `config.subtract` lane by
/// lane, prints it again and saves it to `config.output`.
pub fn run_demo<W: Write>(config: &DemoConfig, out: &mut W) -> Result<Matrix<i64>> {
    let mut matrix: Matrix<i64> = load_with(&config.input, &config.format)
        .with_context(|| format!("Failed to load matrix: {}", config.input.display()))?;
    log::debug!(
        "Loaded {}x{} matrix from {}",
        matrix.nrows(),
        matrix.ncols(),
        config.input.display()
    );

    let display = TextFormat {
        row_separator: '\n',
        ..config.format.clone()
    };

    writeln!(out, "Matrix before modification:")?;
    write!(out, "{}", render_with(matrix.view(), &display))?;

    if let Some(x) = matrix
        .as_slice()
        .iter()
        .find(|x| x.checked_sub(config.subtract).is_none())
    {
        anyhow::bail!("Subtracting {} from {} overflows i64", config.subtract, x);
    }
    for mut row in &mut matrix.view_mut() {
        row -= config.subtract;
    }

    writeln!(out, "Matrix after modification:")?;
    write!(out, "{}", render_with(matrix.view(), &display))?;

    save_with(matrix.view(), &config.output, &config.format)
        .with_context(|| format!("Failed to save matrix: {}", config.output.display()))?;

    Ok(matrix)
}
