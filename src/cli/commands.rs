use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use crate::models::SiteLayout;
use crate::parsers::extract_fields;
use crate::pipeline::{DatasetSource, default_sources, load_manifest, publish_all};
use crate::publisher::DatasetPublisher;
use crate::publisher::atomic::to_json_bytes;
use crate::utils::{format_path_with_tilde, read_html_file};

#[derive(Parser)]
#[command(name = "ai-project-launcher")]
#[command(version = "0.1.0")]
#[command(
    about = "Publish Claude and ChatGPT project lists to Alfred full-text search",
    long_about = None
)]
pub struct Cli {
    /// Directory holding the html/ and icon/ folders [default: current directory]
    #[arg(long, global = true, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// afwf_fts_anything data directory [default: ~/.alfred-afwf/afwf_fts_anything]
    #[arg(long, global = true, value_name = "DIR")]
    pub fts_dir: Option<PathBuf>,

    /// JSON manifest of sources to use instead of the built-in accounts
    #[arg(long, global = true, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Publish every configured dataset (the default)
    Publish {
        /// Only publish the named dataset (repeatable)
        #[arg(long, value_name = "DATASET")]
        only: Vec<String>,
    },
    /// Print the projects extracted from a saved page as JSON
    Parse {
        /// Site the page was saved from
        #[arg(long, value_enum)]
        layout: SiteLayout,
        /// Saved HTML page
        html: PathBuf,
    },
    /// Print the search settings used for a site
    Settings {
        #[arg(long, value_enum)]
        layout: SiteLayout,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        None => publish(&cli, &[]),
        Some(Commands::Publish { only }) => publish(&cli, only),
        Some(Commands::Parse { layout, html }) => parse(*layout, html),
        Some(Commands::Settings { layout }) => print_json(&layout.settings()),
    }
}

fn publish(cli: &Cli, only: &[String]) -> Result<()> {
    let base_dir = match &cli.base_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    let publisher = match &cli.fts_dir {
        Some(dir) => DatasetPublisher::new(dir),
        None => DatasetPublisher::from_home()?,
    };

    let sources = match &cli.manifest {
        Some(manifest) => load_manifest(manifest, &base_dir)?,
        None => default_sources(&base_dir),
    };
    let sources = select_sources(sources, only)?;

    let outcome = publish_all(&publisher, &sources)?;

    for report in &outcome.reports {
        println!(
            "Published {}: {} projects -> {}",
            report.dataset_name,
            report.record_count,
            format_path_with_tilde(&report.data_path)
        );
    }
    for failure in &outcome.failures {
        println!("Failed {}: {:#}", failure.dataset_name, failure.error);
    }

    outcome.into_result()?;
    Ok(())
}

fn select_sources(sources: Vec<DatasetSource>, only: &[String]) -> Result<Vec<DatasetSource>> {
    if only.is_empty() {
        return Ok(sources);
    }
    for name in only {
        if !sources.iter().any(|s| &s.dataset_name == name) {
            bail!("Unknown dataset: {}", name);
        }
    }
    Ok(sources.into_iter().filter(|s| only.contains(&s.dataset_name)).collect())
}

fn parse(layout: SiteLayout, html: &Path) -> Result<()> {
    let content = read_html_file(html)?;
    let records = extract_fields(layout, &content)
        .with_context(|| format!("Failed to parse {}", html.display()))?;
    print_json(&records)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let bytes = to_json_bytes(value)?;
    println!("{}", String::from_utf8(bytes).context("Serialized JSON is not UTF-8")?);
    Ok(())
}
