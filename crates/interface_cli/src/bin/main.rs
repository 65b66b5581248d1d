//! claims-audit: policy-compliance auditing for medical insurance claims

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use domain_rules::RuleTable;
use interface_cli::{summary, AuditPipeline, CliConfig};

/// Built-in demo rule table, used when no rules file is configured.
const DEMO_RULES_JSON: &str = include_str!("../../../../demos/rules/medicare_audit_rules.json");
/// Built-in demonstration claims.
const DEMO_CLAIMS_JSON: &str = include_str!("../../../../demos/claims/sample_claims.json");

#[derive(Parser)]
#[command(name = "claims-audit")]
#[command(about = "Audits medical insurance claims against coverage-rule tables")]
struct Cli {
    /// Path to a rules JSON file (overrides CLAIMS_RULES_PATH)
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit a single claim given as free text or JSON
    Audit {
        /// The raw claim text
        text: String,
    },
    /// Audit a batch of claims from a JSON array file
    Batch {
        /// Input file: a JSON array of claim texts or claim objects
        input: PathBuf,
        /// Write the full results as JSON to this path
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Run the built-in demonstration claims
    Demo,
    /// Validate a rules file without auditing anything
    ValidateRules {
        /// The rules file to check
        path: PathBuf,
    },
}

/// One named demo case.
#[derive(Debug, Deserialize)]
struct DemoCase {
    name: String,
    text: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::from_env().context("reading CLAIMS_* environment")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    match cli.command {
        Commands::Audit { text } => {
            let pipeline = build_pipeline(cli.rules.as_deref(), &config)?;
            let outcome = pipeline.process_text(&text);
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        Commands::Batch { input, output } => {
            let pipeline = build_pipeline(cli.rules.as_deref(), &config)?;
            let content = std::fs::read_to_string(&input)
                .with_context(|| format!("reading {}", input.display()))?;
            let entries: Vec<Value> =
                serde_json::from_str(&content).context("batch input must be a JSON array")?;

            let outcomes: Vec<_> = entries
                .iter()
                .map(|entry| match entry {
                    Value::String(text) => pipeline.process_text(text),
                    other => pipeline.process_text(&other.to_string()),
                })
                .collect();

            for outcome in &outcomes {
                println!("{}\n", summary::render_outcome(outcome));
            }

            let batch = summary::summarize(&outcomes);
            println!("{batch}");

            if let Some(path) = output {
                let report = serde_json::json!({
                    "summary": batch,
                    "results": outcomes,
                });
                std::fs::write(&path, serde_json::to_string_pretty(&report)?)
                    .with_context(|| format!("writing {}", path.display()))?;
                tracing::info!(path = %path.display(), "batch results written");
            }
        }
        Commands::Demo => {
            let pipeline = build_pipeline(cli.rules.as_deref(), &config)?;
            let cases: Vec<DemoCase> =
                serde_json::from_str(DEMO_CLAIMS_JSON).context("built-in demo claims")?;

            let mut outcomes = Vec::with_capacity(cases.len());
            for case in &cases {
                println!("=== {} ===", case.name);
                let outcome = pipeline.process_text(&case.text);
                println!("{}\n", summary::render_outcome(&outcome));
                outcomes.push(outcome);
            }

            println!("{}", summary::summarize(&outcomes));
        }
        Commands::ValidateRules { path } => {
            let table = RuleTable::from_json_file(&path)?;
            println!(
                "{}: {} determinations, deductible {}, coinsurance {}",
                path.display(),
                table.rule_count(),
                table.limits.annual_deductible,
                table.limits.coinsurance_rate,
            );
        }
    }

    Ok(())
}

/// Resolves the rule table and builds the pipeline.
///
/// Precedence: --rules flag, then CLAIMS_RULES_PATH, then the built-in
/// demo table.
fn build_pipeline(flag: Option<&Path>, config: &CliConfig) -> anyhow::Result<AuditPipeline> {
    let table = match flag.or(config.rules_path.as_deref()) {
        Some(path) => RuleTable::from_json_file(path)?,
        None => {
            tracing::warn!("no rules file configured, using built-in demo determinations");
            RuleTable::from_json_str(DEMO_RULES_JSON).context("built-in demo rules")?
        }
    };
    Ok(AuditPipeline::new(Arc::new(table)))
}
