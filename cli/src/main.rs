//! norma CLI - document normalization to ABNT 2023 academic style

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;
use log::debug;

use norma::{normalize_file_with_options, render, JsonFormat, PipelineOptions, RenderOptions};

#[derive(Parser)]
#[command(name = "norma")]
#[command(version)]
#[command(about = "Normalize prose documents to ABNT 2023 academic style", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize to plain text
    Text {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Disable parallel paragraph processing
        #[arg(long)]
        sequential: bool,
    },

    /// Normalize to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Include YAML frontmatter
        #[arg(short, long)]
        frontmatter: bool,

        /// Insert this heading before the first reference entry
        #[arg(long, value_name = "HEADING")]
        references_heading: Option<String>,

        /// Disable parallel paragraph processing
        #[arg(long)]
        sequential: bool,
    },

    /// Normalize to JSON (paragraphs plus the style directive table)
    Json {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show a classification summary
    Info {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> norma::Result<()> {
    match cli.command {
        Commands::Text {
            input,
            output,
            sequential,
        } => {
            let doc = normalize_file_with_options(&input, pipeline_options(sequential))?;
            let content = render::to_text(&doc, &RenderOptions::default())?;
            write_output(&content, output)
        }

        Commands::Markdown {
            input,
            output,
            frontmatter,
            references_heading,
            sequential,
        } => {
            let doc = normalize_file_with_options(&input, pipeline_options(sequential))?;
            let mut options = RenderOptions::new().with_frontmatter(frontmatter);
            if let Some(heading) = references_heading {
                options = options.with_references_heading(heading);
            }
            let content = render::to_markdown(&doc, &options)?;
            write_output(&content, output)
        }

        Commands::Json {
            input,
            output,
            compact,
        } => {
            let doc = normalize_file_with_options(&input, PipelineOptions::default())?;
            let format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            let content = render::to_json(&doc, format)?;
            write_output(&content, output)
        }

        Commands::Info { input, json } => {
            let doc = normalize_file_with_options(&input, PipelineOptions::default())?;
            if json {
                let summary = serde_json::to_string_pretty(&doc.metadata)
                    .map_err(|e| norma::Error::Render(e.to_string()))?;
                println!("{}", summary);
            } else {
                print_info(&doc);
            }
            Ok(())
        }
    }
}

fn pipeline_options(sequential: bool) -> PipelineOptions {
    PipelineOptions::new().with_parallel(!sequential)
}

fn write_output(content: &str, output: Option<PathBuf>) -> norma::Result<()> {
    match output {
        Some(path) => {
            debug!("writing {} bytes to {}", content.len(), path.display());
            fs::write(&path, content)?;
            eprintln!("{} {}", "wrote".green(), path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

fn print_info(doc: &norma::NormalizedDocument) {
    if let Some(ref source) = doc.metadata.source_name {
        println!("{} {}", "source:".bold(), source);
    }
    println!("{} {}", "paragraphs:".bold(), doc.metadata.paragraph_count);
    println!("  {} {}", "body:".bold(), doc.metadata.body_count);
    println!("  {} {}", "block quotes:".bold(), doc.metadata.quote_count);
    println!("  {} {}", "references:".bold(), doc.metadata.reference_count);
    if let Some(at) = doc.metadata.normalized_at {
        println!("{} {}", "normalized at:".bold(), at.to_rfc3339());
    }
}
