use anyhow::Context;
use clap::Parser;
use planrec_artifacts::ArtifactStore;
use planrec_core::{Engine, UsageRecord, DEFAULT_TOP_K};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Telecom plan recommender over pre-trained clustering artifacts
#[derive(Parser, Debug)]
#[command(name = "planrec")]
#[command(about = "Recommend telecom plans for a usage profile", long_about = None)]
struct Args {
    /// Path to the artifacts directory
    #[arg(short, long, default_value = "./artifacts")]
    artifacts: PathBuf,

    /// Usage record as a JSON object, read from this file ("-" for stdin)
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Number of plans to recommend
    #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
    top_k: usize,

    /// Print the plan catalog and exit
    #[arg(long)]
    plans: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting planrec v{}", env!("CARGO_PKG_VERSION"));
    info!("Artifacts directory: {:?}", args.artifacts);

    // Loader failure is fatal: never serve against partial artifacts
    let artifacts = ArtifactStore::load(&args.artifacts)
        .with_context(|| format!("loading artifacts from {:?}", args.artifacts))?;

    if args.plans {
        let listing = serde_json::json!({ "plans": artifacts.catalog().entries() });
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    let raw = if args.input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading usage record from stdin")?;
        buf
    } else {
        std::fs::read_to_string(&args.input)
            .with_context(|| format!("reading usage record from {}", args.input))?
    };
    let record: UsageRecord = serde_json::from_str(&raw).context("parsing usage record JSON")?;

    let engine = Engine::new(Arc::new(artifacts));
    let recommendations = engine.recommend(&record, args.top_k)?;
    info!("Ranked {} plans", recommendations.len());

    let output = serde_json::json!({ "recommendations": recommendations });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
