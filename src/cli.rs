// src/cli.rs
use anyhow::Result;
use clap::Parser;
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::{Config, load_config, load_config_file};
use crate::core::case::CaseMode;
use crate::core::collate::SortOrder;
use crate::core::pipeline::Pipeline;
use crate::core::scanner::count_paths;
use crate::utils::{OutputFormat, select, write_report};

/// Count words in text files and list them alphabetically, sorting accented
/// letters with their base letter.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Files or directories to count
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// How words are case-folded before counting
    #[arg(short, long, value_enum)]
    pub case: Option<CaseMode>,

    /// Report order
    #[arg(short, long, value_enum)]
    pub sort: Option<SortOrder>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Number of words to show
    #[arg(short = 't', long)]
    pub top: Option<usize>,

    /// Hide words counted fewer times than this
    #[arg(short = 'm', long)]
    pub min_count: Option<u64>,

    /// Directories to skip when walking (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub exclude: Option<Vec<String>>,

    /// Config file to use instead of searching for wfc.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Increase log output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Command-line flags merged over the config file and the defaults.
#[derive(Debug)]
pub struct Settings {
    pub pipeline: Pipeline,
    pub format: OutputFormat,
    pub top: Option<usize>,
    pub min_count: u64,
    pub exclude: Vec<String>,
}

impl Settings {
    /// Combines `args` with `config`; flags win over config values.
    ///
    /// # Errors
    ///
    /// Returns an error if the config's `[accents]` table is invalid.
    pub fn resolve(args: &Args, config: Config) -> Result<Self> {
        let folder = config.accent_folder()?;
        let case = args.case.or(config.case).unwrap_or_default();
        let sort = args.sort.or(config.sort).unwrap_or_default();

        Ok(Self {
            pipeline: Pipeline::new(case, folder, sort),
            format: args.format.or(config.format).unwrap_or_default(),
            top: args.top.or(config.top),
            min_count: args.min_count.or(config.min_count).unwrap_or(0),
            exclude: args
                .exclude
                .clone()
                .or(config.exclude)
                .unwrap_or_else(|| vec![String::from(".git")]),
        })
    }
}

fn config_for(args: &Args) -> Result<Config> {
    match &args.config {
        Some(path) => load_config_file(path),
        None => load_config(&env::current_dir()?),
    }
}

/// Runs the command, writing the report to stdout.
///
/// # Errors
///
/// See [`run_with_writer`].
pub fn run(args: Args) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_writer(args, &mut out)
}

/// Runs the command, writing the report to `out`.
///
/// Every input is counted before anything is written, so a failure leaves
/// `out` untouched.
///
/// # Errors
///
/// This function may return an error if:
/// * A named file cannot be opened or read
/// * The config file cannot be read or is invalid
/// * A directory cannot be walked or its ignore file is invalid
/// * Writing the report fails
pub fn run_with_writer<W: Write>(args: Args, out: &mut W) -> Result<()> {
    let settings = Settings::resolve(&args, config_for(&args)?)?;
    tracing::debug!(?settings, "resolved settings");

    let table = count_paths(
        &args.paths,
        &settings.exclude,
        args.config.as_slice(),
        &settings.pipeline,
    )?;
    let entries = settings.pipeline.rank(&table);
    tracing::info!(
        inputs = args.paths.len(),
        tokens = table.total(),
        distinct = table.len(),
        "counted"
    );

    let entries = select(entries, settings.min_count, settings.top);
    write_report(out, &entries, settings.format)
}
