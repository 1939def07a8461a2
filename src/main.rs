//! signalflow CLI - workspace signal triage
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for parsing arguments, rendering output, and handling top-level errors.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use signalflow::agent::summarize_feed;
use signalflow::summary::Sentiment;
use signalflow::{signal, Config, Signal, SummaryClient, SummaryResult};

#[derive(Parser)]
#[command(name = "signalflow")]
#[command(author, version, about = "Workspace signal triage with AI-generated summaries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise a single piece of content from a file or stdin
    Summarise {
        /// Path to a text file, or - to read stdin
        file: String,
        /// Context shown to the model (defaults to the file name)
        #[arg(long)]
        context: Option<String>,
        /// Print the structured result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Summarise a whole signal feed concurrently
    Triage {
        /// JSON signal feed to triage instead of the bundled samples
        #[arg(long)]
        signals: Option<PathBuf>,
        /// Print the structured results as JSON
        #[arg(long)]
        json: bool,
    },
    /// List a signal feed without calling the model
    Signals {
        /// JSON signal feed to list instead of the bundled samples
        #[arg(long)]
        signals: Option<PathBuf>,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Serialize)]
struct TriageRow<'a> {
    signal: &'a Signal,
    result: &'a SummaryResult,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if atty::isnt(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Summarise {
            file,
            context,
            json,
        } => {
            let content = read_content(&file)?;
            let context = context.unwrap_or_else(|| {
                if file == "-" {
                    "stdin".to_string()
                } else {
                    file.clone()
                }
            });

            let config = Config::load()?;
            let client = SummaryClient::new(&config)?;
            let result = client.summarize(&content, &context).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                render_summary(&result);
            }
        }
        Commands::Triage { signals, json } => {
            let feed = match signals {
                Some(path) => signal::load_signals(&path)?,
                None => signal::sample_signals()?,
            };

            let config = Config::load()?;
            let client = Arc::new(SummaryClient::new(&config)?);
            if !client.has_credential() {
                eprintln!("Warning: no API key configured, producing placeholder summaries");
            }

            let rows = summarize_feed(client, feed).await?;

            if json {
                let payload: Vec<TriageRow> = rows
                    .iter()
                    .map(|(signal, result)| TriageRow { signal, result })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                for (signal, result) in &rows {
                    render_signal_header(signal);
                    render_summary(result);
                    println!();
                }
            }
        }
        Commands::Signals { signals } => {
            let signals = match signals {
                Some(path) => signal::load_signals(&path)?,
                None => signal::sample_signals()?,
            };
            println!("Signals ({}):\n", signals.len());
            for signal in &signals {
                let title = if signal.is_read {
                    signal.title.normal()
                } else {
                    signal.title.bold()
                };
                println!(
                    "📄 {} ({})",
                    title,
                    signal.timestamp.format("%Y-%m-%d %H:%M")
                );
                println!(
                    "   {} | {} | {}",
                    signal.source.label(),
                    signal.sender.name,
                    paint_priority(signal)
                );
                if !signal.tags.is_empty() {
                    println!("   🏷️  {}", signal.tags.join(", "));
                }
                println!();
            }
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        }
    }

    Ok(())
}

fn read_content(file: &str) -> anyhow::Result<String> {
    if file == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(std::fs::read_to_string(file)?)
    }
}

fn render_signal_header(signal: &Signal) {
    println!("=== {} ===\n", signal.title);
    println!(
        "  {} | {} | {} | {}",
        signal.source.label(),
        signal.sender.name,
        signal.timestamp.format("%Y-%m-%d %H:%M"),
        paint_priority(signal)
    );
    if !signal.tags.is_empty() {
        println!("  🏷️  {}", signal.tags.join(", "));
    }
    println!();
}

fn render_summary(result: &SummaryResult) {
    println!("💡 Summary:");
    println!("  {}\n", result.summary);

    if let Some(sentiment) = result.sentiment {
        println!("🎭 Sentiment: {}\n", paint_sentiment(sentiment));
    }

    if !result.action_items.is_empty() {
        println!("✅ Action Items:");
        for item in &result.action_items {
            println!("  • {}", item);
        }
        println!();
    }

    if let Some(task) = &result.suggested_task {
        println!("📌 Suggested Task: {} ({})", task.title, task.kind.label());
        println!("  {}", task.description);
        println!("  ---");
        for line in task.preview.lines() {
            println!("  {}", line);
        }
    }
}

fn paint_sentiment(sentiment: Sentiment) -> colored::ColoredString {
    match sentiment {
        Sentiment::Positive => sentiment.label().green(),
        Sentiment::Neutral => sentiment.label().normal(),
        Sentiment::Negative => sentiment.label().yellow(),
        Sentiment::Urgent => sentiment.label().red().bold(),
    }
}

fn paint_priority(signal: &Signal) -> colored::ColoredString {
    use signalflow::signal::Priority;
    match signal.priority {
        Priority::High => signal.priority.label().red(),
        Priority::Medium => signal.priority.label().yellow(),
        Priority::Low => signal.priority.label().green(),
    }
}
