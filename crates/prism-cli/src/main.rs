//! Prism - compare LLM answers across providers
//!
//! One prompt in, one normalized answer per model out, no matter which
//! provider family serves it or how badly it is behaving today.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use prism_core::{compare_models, models::builtin_models, Credentials, LlmClient, ModelRegistry};

mod config;

/// Models queried when `compare` is run without an explicit list
const DEFAULT_COMPARISON: &[&str] = &["Mixtral 8x7B Instruct", "Claude 3 Sonnet", "Claude 3 Haiku"];

/// Prism - multi-provider LLM comparator
#[derive(Parser)]
#[command(name = "prism")]
#[command(about = "Compare LLM responses across providers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a single model one question
    Query {
        /// Model display name (see `prism models`)
        #[arg(short, long)]
        model: String,
        /// Prompt text
        prompt: String,
    },

    /// Ask several models the same question concurrently
    Compare {
        /// Prompt text
        prompt: String,
        /// Comma-separated model display names
        #[arg(short, long, value_delimiter = ',')]
        models: Option<Vec<String>>,
    },

    /// List the registered models
    Models {
        /// Emit the registry as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = Arc::new(ModelRegistry::builtin());

    match cli.command {
        Commands::Models { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(builtin_models())?);
            } else {
                println!("Registered models ({}):", registry.len());
                for name in registry.names() {
                    let model = registry.resolve(&name)?;
                    println!("  {} - {}", model.name, model.provider);
                }
            }
        }
        Commands::Query { model, prompt } => {
            let client = Arc::new(LlmClient::new(load_or_empty()));
            let models = vec![model.clone()];
            let results = compare_models(registry, client, &prompt, &models).await?;
            if let Some(result) = results.get(&model) {
                print_result(&model, result);
            }
        }
        Commands::Compare { prompt, models } => {
            let client = Arc::new(LlmClient::new(load_or_empty()));
            let models: Vec<String> = models.unwrap_or_else(|| {
                DEFAULT_COMPARISON.iter().map(|m| m.to_string()).collect()
            });
            let results = compare_models(registry, client, &prompt, &models).await?;
            // reassemble in the order the caller asked for
            for model in &models {
                if let Some(result) = results.get(model) {
                    print_result(model, result);
                }
            }
        }
    }

    Ok(())
}

fn load_or_empty() -> Credentials {
    let credentials = config::load_credentials();
    if credentials.bedrock.is_none()
        && credentials.azure.is_empty()
        && credentials.anthropic_api_key.is_none()
    {
        eprintln!("warning: no provider credentials configured, every model will fall back");
    }
    credentials
}

fn print_result(model: &str, result: &prism_core::QueryResult) {
    println!("=== {model} ===");
    println!("{}", result.response_text);
    println!(
        "  ~{} tokens | ~${:.6} | {:.2}s",
        result.estimated_tokens, result.estimated_cost_usd, result.processing_time_seconds
    );
    println!();
}
