//! Sentinel CLI: score an entity graph and print the ranking
//!
//! Reads the cleaned node-link graph and the embedding map, runs the
//! anomaly engine and writes `{id, raw_score, norm_score}` records.

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use sentinel::{
    load_node_link, AnomalyEngine, EmbeddingMap, EntityGraph, EntityId, ExplainedRecord,
    ResultExporter, ScoreReport, ScoringConfig,
};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "sentinel", version, about = "Anomaly scoring for entity relationship graphs")]
struct Cli {
    /// Output format for terminal output
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

/// Inputs shared by the scoring commands
#[derive(Args)]
struct Inputs {
    /// Cleaned graph in node-link JSON format
    #[arg(long)]
    graph: PathBuf,

    /// Embedding map: JSON object of id -> [x, y]
    #[arg(long)]
    embeddings: PathBuf,

    /// YAML configuration file
    #[arg(long, env = "SENTINEL_CONFIG")]
    config: Option<PathBuf>,

    /// Maximum cycle length in hops (overrides the config file)
    #[arg(long)]
    max_cycle_length: Option<usize>,

    /// Per-node cap on cycle search path extensions (overrides the config file)
    #[arg(long)]
    cycle_budget: Option<usize>,

    /// Score on a single thread
    #[arg(long)]
    sequential: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every node and write the records
    Score {
        #[command(flatten)]
        inputs: Inputs,

        /// Output file for the score records
        #[arg(long, short, default_value = "nodes_coef.json")]
        output: PathBuf,

        /// Include the feature breakdown in the output file
        #[arg(long)]
        explain: bool,

        /// Number of top-ranked nodes to print
        #[arg(long, default_value_t = 20)]
        top: usize,
    },
    /// Show the feature breakdown of one entity
    Explain {
        #[command(flatten)]
        inputs: Inputs,

        /// Entity id; digits are matched as a numeric id first
        id: String,
    },
    /// Print the default configuration as YAML
    Config,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Score {
            inputs,
            output,
            explain,
            top,
        } => run_score(&inputs, &output, explain, top, &cli.format),
        Commands::Explain { inputs, id } => run_explain(&inputs, &id, &cli.format),
        Commands::Config => run_config(),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn load_config(inputs: &Inputs) -> anyhow::Result<ScoringConfig> {
    let mut config = match &inputs.config {
        Some(path) => ScoringConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ScoringConfig::default(),
    };
    if let Some(max) = inputs.max_cycle_length {
        config.max_cycle_length = max;
    }
    if inputs.cycle_budget.is_some() {
        config.cycle_budget = inputs.cycle_budget;
    }
    if inputs.sequential {
        config.parallel = false;
    }
    Ok(config)
}

fn run_engine(inputs: &Inputs) -> anyhow::Result<(EntityGraph, ScoreReport)> {
    let config = load_config(inputs)?;
    let (graph, _report) = load_node_link(&inputs.graph)
        .with_context(|| format!("loading graph {}", inputs.graph.display()))?;
    let embeddings = EmbeddingMap::load(&inputs.embeddings)
        .with_context(|| format!("loading embeddings {}", inputs.embeddings.display()))?;

    let report = AnomalyEngine::new(&graph, &embeddings, config).run()?;
    Ok((graph, report))
}

fn run_score(
    inputs: &Inputs,
    output: &Path,
    explain: bool,
    top: usize,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let (_graph, report) = run_engine(inputs)?;

    let exporter = ResultExporter::default();
    if explain {
        exporter.write_explained_to_path(output, &report.explained())?;
    } else {
        exporter.write_to_path(output, &report.records)?;
    }
    info!("Done: {} generated", output.display());

    let ranked = report.top(top);
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&ranked)?);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["rank", "id", "raw_score", "norm_score"]);
            for (rank, record) in ranked.iter().enumerate() {
                table.add_row(vec![
                    (rank + 1).to_string(),
                    record.id.to_string(),
                    format!("{:.4}", record.raw_score),
                    format!("{:.2}", record.norm_score),
                ]);
            }
            println!("{}", table);
            println!(
                "{} of {} node(s), {} component(s)",
                ranked.len(),
                report.len(),
                report.component_count
            );
        }
    }

    Ok(())
}

/// Numeric ids in the graph take precedence over the same digits as a name
fn resolve_entity(graph: &EntityGraph, raw: &str) -> EntityId {
    if let Ok(n) = raw.parse::<i64>() {
        let numeric = EntityId::Int(n);
        if graph.contains_entity(&numeric) {
            return numeric;
        }
    }
    EntityId::from(raw)
}

fn run_explain(inputs: &Inputs, raw_id: &str, format: &OutputFormat) -> anyhow::Result<()> {
    let (graph, report) = run_engine(inputs)?;
    let entity = resolve_entity(&graph, raw_id);
    let Some(explained) = report.explain(&entity) else {
        bail!("entity {} is not in the graph", raw_id);
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&explained)?),
        OutputFormat::Table => print_explained(&explained, report.mean_vessel_ratio),
    }
    Ok(())
}

fn print_explained(explained: &ExplainedRecord, mean_vessel_ratio: f64) {
    let f = &explained.features;
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["feature", "value"]);
    table.add_row(vec!["vessel ratio (Rv)".to_string(), format!("{:.6}", f.vessel_ratio)]);
    table.add_row(vec!["mean vessel ratio".to_string(), format!("{:.6}", mean_vessel_ratio)]);
    table.add_row(vec!["family edges (F12)".to_string(), f.family_edges.to_string()]);
    table.add_row(vec!["political orgs (P12)".to_string(), f.political_orgs.to_string()]);
    let cycles = if f.cycles_truncated {
        format!("{} (budget hit)", f.cycles)
    } else {
        f.cycles.to_string()
    };
    table.add_row(vec!["flagged cycles (C)".to_string(), cycles]);
    table.add_row(vec!["distance to primary".to_string(), format!("{:.6}", f.dist_primary)]);
    table.add_row(vec!["distance to secondary".to_string(), format!("{:.6}", f.dist_secondary)]);
    table.add_row(vec!["raw score".to_string(), format!("{:.6}", explained.record.raw_score)]);
    table.add_row(vec!["normalized score".to_string(), format!("{:.2}", explained.record.norm_score)]);

    println!("Entity {}", explained.record.id);
    println!("{}", table);
}

fn run_config() -> anyhow::Result<()> {
    print!("{}", ScoringConfig::default().to_yaml()?);
    Ok(())
}
