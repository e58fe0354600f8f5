use std::io::{self, BufWriter, IsTerminal};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use xshorthand::{
    convert, convert_file, load_abbreviations, update_file, xml_path_for, AbbreviationTable,
    Options, Update,
};

#[derive(Debug, Parser)]
#[command(
    name = "xs",
    author,
    version,
    about = "Xml Shorthand tool: converts .xs shorthand files to XML",
    long_about = None
)]
struct Args {
    /// Shorthand files to convert; reads stdin and writes stdout when omitted
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Number of spaces equivalent to one tab, for input and output
    #[arg(short = 's', long, default_value_t = 4, allow_negative_numbers = true)]
    tab_spaces: i64,

    /// Indent the XML output with tab characters instead of spaces
    #[arg(long)]
    tabs: bool,

    /// Write every attribute after the first on its own line
    #[arg(short = 'a', long)]
    one_attribute_per_line: bool,

    /// Define an abbreviation, used as $KEY
    #[arg(
        short = 'D',
        long = "define",
        value_name = "KEY=VALUE",
        value_parser = parse_definition
    )]
    defines: Vec<(String, String)>,

    /// Load abbreviations from a file of KEY=VALUE lines
    #[arg(long = "abbreviations", value_name = "FILE")]
    abbreviation_files: Vec<PathBuf>,

    /// Only convert files whose XML is missing or older than the source
    #[arg(short, long)]
    update: bool,
}

fn parse_definition(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, found '{s}'")),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();

    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(1);
        }
    }
}

/// Returns whether every input converted successfully
fn run() -> Result<bool> {
    let args = Args::parse();
    info!("Xml Shorthand tool");

    let options = Options::new()
        .with_tab_spaces(args.tab_spaces)?
        .with_indent_with_spaces(!args.tabs)
        .with_one_attribute_per_line(args.one_attribute_per_line);

    let mut abbreviations = AbbreviationTable::new();
    for path in &args.abbreviation_files {
        load_abbreviations(path, &mut abbreviations)
            .with_context(|| format!("failed to load abbreviations from {}", path.display()))?;
    }
    abbreviations.extend(args.defines);

    if args.files.is_empty() {
        info!("Reading from standard input...");
        let stdin = io::stdin().lock();
        let stdout = BufWriter::new(io::stdout().lock());
        convert(stdin, stdout, &options, &abbreviations).context("failed to convert stdin")?;
        info!("Done!");
        return Ok(true);
    }

    info!("Processing files...");
    let mut all_ok = true;
    for file in &args.files {
        if let Err(e) = convert_one(file, args.update, &options, &abbreviations) {
            error!("{:#}", e);
            all_ok = false;
        }
    }
    info!("Done!");
    Ok(all_ok)
}

fn convert_one(
    file: &Path,
    update: bool,
    options: &Options,
    abbreviations: &AbbreviationTable,
) -> Result<()> {
    if !file.exists() {
        bail!("{} does not exist", file.display());
    }
    if file.is_dir() {
        bail!("{} is a directory", file.display());
    }

    let target = xml_path_for(file);
    let context = || format!("failed to convert {}", file.display());
    if update {
        if let Update::UpToDate(path) =
            update_file(file, &target, options, abbreviations).with_context(context)?
        {
            info!("{} is up to date", path.display());
        }
    } else {
        convert_file(file, &target, options, abbreviations).with_context(context)?;
    }
    Ok(())
}
