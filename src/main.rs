//! Command-line host for markdown-strip.
//!
//! Plays the editor's role: the selection is a whole file (or stdin), and the
//! result goes to stdout. Settings use the plugin's `data.json` format.

use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use markdown_strip::{remove_pattern, remove_phrase, Config, Editor, Operation, PatternKey};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Pattern to remove, e.g. `asterisk` or `numbered-list`. Repeatable.
    #[arg(short, long = "pattern", value_name = "KEY")]
    patterns: Vec<PatternKey>,
    /// Literal phrase to remove. Repeatable.
    #[arg(long = "phrase", value_name = "TEXT")]
    phrases: Vec<String>,
    /// Apply the operation with this chooser label, e.g. `Quote (>)`.
    #[arg(short, long, value_name = "LABEL")]
    choose: Option<String>,
    /// Settings file in the plugin's JSON format.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Write the effective settings, defaults included, and exit.
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,
    /// Don't tidy indentation after removing patterns.
    #[arg(long)]
    keep_indentation: bool,
    /// Print the operations on offer and exit.
    #[arg(long)]
    list: bool,
    /// Input file. Reads stdin when omitted.
    file: Option<PathBuf>,
}

fn init_tracing() {
    _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings: {}", path.display()))?;
    Config::from_json(&json).with_context(|| format!("Failed to parse settings: {}", path.display()))
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input: {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

/// Operations named on the command line, or everything the settings offer.
fn selected_operations(cli: &Cli, config: &Config) -> Result<Vec<Operation>> {
    if let Some(label) = &cli.choose {
        let Some(operation) = config.resolve_choice(label) else {
            bail!("No enabled operation is labelled {label:?}");
        };
        return Ok(vec![operation]);
    }
    if cli.patterns.is_empty() && cli.phrases.is_empty() {
        return Ok(config.operations().collect());
    }
    Ok(cli.patterns.iter().copied().map(Operation::Pattern).collect())
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;

    if let Some(path) = &cli.write_config {
        fs::write(path, config.to_json()?)
            .with_context(|| format!("Failed to write settings: {}", path.display()))?;
        tracing::info!("Saved settings to {}", path.display());
        return Ok(());
    }

    if cli.list {
        let mut stdout = io::stdout().lock();
        for operation in config.operations() {
            writeln!(stdout, "{}\t{}", operation.command_id(), operation.label())?;
        }
        return Ok(());
    }

    let mut text = read_input(cli.file.as_ref())?;
    for operation in selected_operations(&cli, &config)? {
        let applied = match operation {
            Operation::Pattern(key) if cli.keep_indentation => {
                let rewrite = remove_pattern(text.selection(), key).into_owned();
                text.replace_selection(&rewrite);
                true
            }
            _ => operation.run(&mut text, &config),
        };
        tracing::debug!(operation = %operation.command_id(), applied);
    }
    for phrase in &cli.phrases {
        let rewrite = remove_phrase(text.selection(), phrase).into_owned();
        text.replace_selection(&rewrite);
    }

    io::stdout()
        .write_all(text.as_bytes())
        .context("Failed to write output")
}

fn main() -> Result<()> {
    init_tracing();
    run(Cli::parse())
}
