use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use type_shorthand::{load_options, process_file, process_with_file, ExpandOptions};

#[derive(Parser)]
#[command(name = "type-shorthand")]
#[command(about = "Expand @type typography shorthands into standard CSS")]
#[command(version)]
struct Cli {
    /// Input stylesheet (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Root font size used to convert pixel font sizes to rem (e.g. 16px)
    #[arg(long)]
    root_size: Option<String>,

    /// TOML file with options (`rootSize = "16px"`)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut options = match &cli.config {
        Some(path) => load_options(path)?,
        None => ExpandOptions::default(),
    };
    if let Some(root_size) = cli.root_size {
        options.root_size = Some(root_size);
    }

    let css = match &cli.input {
        Some(path) => process_file(path, &options)?,
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            process_with_file(&input, "<stdin>", &options)?
        }
    };

    match &cli.output {
        Some(path) => std::fs::write(path, format!("{css}\n"))
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{css}").context("Failed to write stdout")?;
        }
    }

    Ok(())
}
