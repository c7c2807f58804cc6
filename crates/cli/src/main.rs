use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rig_analyze::analyze;
use rig_catalog::CatalogSnapshot;
use rig_extract::ComponentExtractor;
use rig_rank::Ranker;
use rig_roast::suggest;
use std::io::Read;
use std::path::PathBuf;

mod report;

#[derive(Parser)]
#[command(name = "rig")]
#[command(about = "Rank, parse and roast PC builds against a parts catalog", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Catalog JSON file (an array of items)
    #[arg(short, long, global = true, default_value = "catalog.json")]
    catalog: PathBuf,

    /// Emit JSON instead of a text report
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank catalog items for a query ("₹80k gaming pc", "quiet cooler")
    Rank {
        query: String,

        /// Maximum number of results
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },

    /// Extract structured components from text, a table or URLs ("-" reads stdin)
    Parse { input: String },

    /// Run the compatibility/value rules over a build ("-" reads stdin)
    Analyze { input: String },

    /// Parse, analyze and grade a build in one pass ("-" reads stdin)
    Roast { input: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.verbose { "debug" } else { "warn" }),
    )
    .init();

    let catalog = CatalogSnapshot::load(&cli.catalog)
        .with_context(|| format!("loading catalog {}", cli.catalog.display()))?;
    log::info!("{} catalog items loaded", catalog.len());

    match cli.command {
        Commands::Rank { query, limit } => {
            let ranked = Ranker::new(&catalog).rank(&query, None, limit);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else {
                print!("{}", report::render_ranking(&query, &ranked));
            }
        }
        Commands::Parse { input } => {
            let raw = read_input(&input)?;
            let build = ComponentExtractor::new(&catalog).parse(&raw);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&build)?);
            } else {
                print!("{}", report::render_build(&build));
            }
        }
        Commands::Analyze { input } => {
            let raw = read_input(&input)?;
            let build = ComponentExtractor::new(&catalog).parse(&raw);
            let analysis = analyze(&catalog, &build);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                print!("{}", report::render_analysis(&analysis));
            }
        }
        Commands::Roast { input } => {
            let raw = read_input(&input)?;
            let build = ComponentExtractor::new(&catalog).parse(&raw);
            let analysis = analyze(&catalog, &build);
            let roast = suggest(&catalog, &analysis, &build);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&roast)?);
            } else {
                print!("{}", report::render_roast(&analysis, &roast));
            }
        }
    }

    Ok(())
}

/// "-" means stdin; an existing path means file contents; anything else is
/// taken as the literal build text.
fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("reading stdin")?;
        return Ok(buffer);
    }
    let path = PathBuf::from(input);
    if path.is_file() {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()));
    }
    Ok(input.to_string())
}
