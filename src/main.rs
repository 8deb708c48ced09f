mod aggregate;
mod analysis;
mod config;
mod dataset;
mod error;
mod industry;
mod keywords;
mod models;
mod news;
mod report;
mod resolver;
mod search;
mod sentiment;
mod synthetic;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use analysis::Analyzer;
use config::Config;
use dataset::Dataset;
use industry::Classifier;
use models::{CompanyQuery, CompanyRecord};
use resolver::SourceResolver;
use sentiment::SentimentScorer;
use synthetic::SyntheticDataProvider;

#[derive(Parser)]
#[command(name = "hrdd")]
#[command(about = "HR due diligence - news, culture and reputation signals for a company")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a company
    Analyze {
        /// Company name
        company: String,

        /// Number of top terms to report per section
        #[arg(short, long, default_value_t = config::DEFAULT_TOP_N)]
        top: usize,

        /// Seed for reproducible synthetic fallback data
        #[arg(long)]
        seed: Option<u64>,

        /// Path to the cached dataset (defaults to ./sample_reviews.json)
        #[arg(short, long)]
        dataset: Option<PathBuf>,

        /// Skip live news and web search
        #[arg(long)]
        offline: bool,

        /// Skip the live web-search snippet source
        #[arg(long)]
        no_search: bool,

        /// Never fabricate data when no real source has any
        #[arg(long)]
        no_synthetic: bool,

        /// Fail unless the live news API is configured
        #[arg(long)]
        require_live: bool,

        /// Timeout for each live request, in seconds
        #[arg(long, default_value_t = config::DEFAULT_TIMEOUT_SECS)]
        timeout: u64,

        /// News language filter
        #[arg(long, default_value = "en")]
        language: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ReportFormat,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate a sample dataset from a list of company names
    Generate {
        /// Path to companies list (one per line)
        #[arg(short, long, default_value = "companies.txt")]
        companies: PathBuf,

        /// Output JSON file
        #[arg(short, long, default_value = config::DEFAULT_DATASET_FILE)]
        out: PathBuf,

        /// Random seed for reproducibility
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Show which industry a company name maps to
    Industry {
        /// Company name
        company: String,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            company,
            top,
            seed,
            dataset,
            offline,
            no_search,
            no_synthetic,
            require_live,
            timeout,
            language,
            format,
            output,
        } => {
            let query = CompanyQuery::new(&company)
                .ok_or_else(|| anyhow!("Company name must not be empty"))?;

            let config = Config {
                news_api_key: Config::api_key_from_env(),
                dataset_path: Config::resolve_dataset_path(dataset),
                live: !offline,
                live_search: !no_search,
                synthetic: !no_synthetic,
                require_live,
                seed,
                timeout: Duration::from_secs(timeout),
                top_n: top,
                news_language: language,
                ..Config::default()
            };
            config.report_startup();

            let dataset = Dataset::load(&config.dataset_path);
            let resolver = SourceResolver::from_config(&config, dataset)?;

            eprintln!("Analyzing {} using: {}", query, resolver.source_names().join(" -> "));
            let analyzer = Analyzer::new(
                &resolver,
                SentimentScorer::vader(),
                Classifier::standard(),
                config.top_n,
            );
            let result = analyzer.analyze(&query);

            let rendered = match format {
                ReportFormat::Text => report::render_text(&result),
                ReportFormat::Json => {
                    report::render_json(&result).context("Failed to serialize report")?
                }
            };

            if let Some(out_path) = output {
                std::fs::write(&out_path, &rendered)
                    .with_context(|| format!("Failed to write to {}", out_path.display()))?;
                println!("Report saved to: {}", out_path.display());
            } else {
                println!("{}", rendered);
            }
        }

        Commands::Generate {
            companies,
            out,
            seed,
        } => {
            let raw = std::fs::read_to_string(&companies).with_context(|| {
                format!(
                    "Failed to read {}. Create it with one company name per line.",
                    companies.display()
                )
            })?;

            let names: Vec<CompanyQuery> = raw.lines().filter_map(CompanyQuery::new).collect();
            if names.is_empty() {
                bail!("No company names found in {}", companies.display());
            }
            println!("Found {} companies in {}.", names.len(), companies.display());

            let provider = SyntheticDataProvider::new(Some(seed));
            let records: BTreeMap<String, CompanyRecord> = names
                .iter()
                .map(|name| (name.to_string(), provider.generate(name)))
                .collect();

            let json = serde_json::to_string_pretty(&records).context("Failed to serialize dataset")?;
            std::fs::write(&out, json)
                .with_context(|| format!("Failed to write to {}", out.display()))?;
            println!("Generated {} with {} entries.", out.display(), records.len());
        }

        Commands::Industry { company } => {
            let query = CompanyQuery::new(&company)
                .ok_or_else(|| anyhow!("Company name must not be empty"))?;
            println!("{}: {}", query, Classifier::standard().classify(query.as_str()));
        }
    }

    Ok(())
}
