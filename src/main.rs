use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use minus::Pager;
use snapdiff::areas::comparison::{Comparison, ComparisonOptions};
use snapdiff::areas::snapshot::IgnoreSet;
use snapdiff::artifacts::core::{PagerWriter, should_page};
use snapdiff::artifacts::report::change_filter::ChangeFilter;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "snapdiff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Compare successive snapshots of a directory tree",
    long_about = "This tool compares two or more snapshots of a directory tree and reports \
    what was added, removed or modified, down to single files and, for Rust sources, \
    down to their declarations and statements.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        index = 1,
        required = true,
        num_args = 1..,
        help = "Snapshot folders to compare in order, or a single folder holding the snapshots"
    )]
    paths: Vec<PathBuf>,
    #[arg(short = 'a', long, help = "Also list unmodified entries")]
    all: bool,
    #[arg(
        short = 'i',
        long,
        value_delimiter = ',',
        help = "Folder names to ignore, comma separated (default: bin,obj,packages,properties)"
    )]
    ignore: Vec<String>,
    #[arg(long, value_parser = parse_filter, help = "Change kinds to list: any of U, M, A, R")]
    filter: Option<ChangeFilter>,
    #[arg(long, help = "Also write an HTML report next to every right-hand snapshot")]
    html: bool,
}

fn parse_filter(s: &str) -> Result<ChangeFilter, String> {
    ChangeFilter::try_parse(s).ok_or_else(|| format!("Invalid change filter: {}", s))
}

impl Cli {
    fn options(&self) -> ComparisonOptions {
        let ignore = if self.ignore.is_empty() {
            IgnoreSet::default_folders()
        } else {
            IgnoreSet::new(&self.ignore)
        };

        let filter = match (self.filter, self.all) {
            (Some(filter), _) => filter,
            (None, true) => ChangeFilter::all(),
            (None, false) => ChangeFilter::changes_only(),
        };

        ComparisonOptions::new(ignore, filter, self.html)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let options = cli.options();

    if should_page() {
        let pager = Pager::new();
        let comparison = Comparison::new(Box::new(PagerWriter::new(pager.clone())), options);
        comparison.compare(&cli.paths).await?;
        minus::page_all(pager)?;
    } else {
        let comparison = Comparison::new(Box::new(std::io::stdout()), options);
        comparison.compare(&cli.paths).await?;
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", "Unexpected error:".red());
            eprintln!("{}", format!("{:#}", error).red());
            ExitCode::FAILURE
        }
    }
}
