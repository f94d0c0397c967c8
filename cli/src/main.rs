//! untable CLI - titled table extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use untable::render::{self, DEFAULT_JSON_FILE};
use untable::{
    load_document, ExtractOptions, Extraction, JsonFormat, PageSelection, TableExtractor,
};

#[derive(Parser)]
#[command(name = "untable")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract titled tables from document-understanding responses", long_about = None)]
struct Cli {
    /// Input document (saved provider response)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output JSON file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract tables to JSON
    Extract {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long, env = "UNTABLE_PAGES")]
        pages: Option<String>,

        /// Process pages one at a time
        #[arg(long)]
        sequential: bool,
    },

    /// Extract tables to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long, env = "UNTABLE_PAGES")]
        pages: Option<String>,
    },

    /// List the title associated with each table
    Titles {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show document information
    Info {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Extract tables from several documents into a directory
    Batch {
        /// Input documents
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR", env = "UNTABLE_OUTPUT_DIR")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Extract {
            input,
            output,
            compact,
            pages,
            sequential,
        }) => cmd_extract(
            &input,
            output.as_deref(),
            compact,
            pages.as_deref(),
            sequential,
        ),
        Some(Commands::Markdown {
            input,
            output,
            pages,
        }) => cmd_markdown(&input, output.as_deref(), pages.as_deref()),
        Some(Commands::Titles { input, json }) => cmd_titles(&input, json),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Batch { inputs, output }) => cmd_batch(&inputs, output.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: extract to table_data.json if input is provided
            if let Some(input) = cli.input {
                cmd_default(&input, cli.output.as_deref())
            } else {
                println!("{}", "Usage: untable <FILE> [OUTPUT]".yellow());
                println!("       untable --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn page_selection(pages: Option<&str>) -> Result<PageSelection, Box<dyn std::error::Error>> {
    match pages {
        Some(p) => Ok(PageSelection::parse(p)?),
        None => Ok(PageSelection::All),
    }
}

fn extract(input: &Path, options: ExtractOptions) -> Result<Extraction, Box<dyn std::error::Error>> {
    let doc = load_document(input)?;
    let extraction = TableExtractor::with_options(options).extract(&doc)?;
    if extraction.stats.shape_mismatches > 0 {
        eprintln!(
            "{} {} rows did not match their table header",
            "Warning:".yellow().bold(),
            extraction.stats.shape_mismatches
        );
    }
    Ok(extraction)
}

fn cmd_default(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let output = output.unwrap_or_else(|| Path::new(DEFAULT_JSON_FILE));
    let extraction = extract(input, ExtractOptions::new())?;
    render::write_json(output, &extraction.records, JsonFormat::Pretty)?;
    println!(
        "{} {} tables to {}",
        "Saved".green(),
        extraction.records.len(),
        output.display()
    );
    Ok(())
}

fn cmd_extract(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    pages: Option<&str>,
    sequential: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = ExtractOptions::new()
        .with_pages(page_selection(pages)?)
        .with_parallel(!sequential);
    let extraction = extract(input, options)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    if let Some(path) = output {
        render::write_json(path, &extraction.records, format)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", render::to_json(&extraction.records, format)?);
    }

    Ok(())
}

fn cmd_markdown(
    input: &Path,
    output: Option<&Path>,
    pages: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = ExtractOptions::new().with_pages(page_selection(pages)?);
    let extraction = extract(input, options)?;
    let markdown = render::to_markdown(&extraction.records);

    if let Some(path) = output {
        fs::write(path, &markdown)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", markdown);
    }

    Ok(())
}

#[derive(Serialize)]
struct TitleEntry<'a> {
    page: u32,
    table: usize,
    title: &'a str,
}

fn cmd_titles(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let extraction = extract(input, ExtractOptions::new())?;

    let entries: Vec<TitleEntry<'_>> = extraction
        .iter()
        .map(|(location, record)| TitleEntry {
            page: location.page,
            table: location.index,
            title: &record.title,
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in &entries {
        let title = if entry.title.is_empty() {
            "(untitled)".dimmed().to_string()
        } else {
            entry.title.to_string()
        };
        println!(
            "{} {:>3}  {} {:>2}  {}",
            "page".dimmed(),
            entry.page,
            "table".dimmed(),
            entry.table,
            title
        );
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if let Some(ref mime) = doc.mime_type {
        println!("{}: {}", "Source type".bold(), mime);
    }
    println!("{}: {}", "Pages".bold(), doc.page_count());
    println!("{}: {}", "Paragraphs".bold(), doc.paragraph_count());
    println!("{}: {}", "Tables".bold(), doc.table_count());
    println!("{}: {}", "Characters".bold(), doc.text.chars().count());

    let extraction = TableExtractor::new().extract(&doc)?;
    let stats = &extraction.stats;

    println!();
    println!("{}", "Extraction Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Data rows".bold(), stats.row_count);
    println!("{}: {}", "Untitled tables".bold(), stats.untitled_tables);
    println!("{}: {}", "Shape mismatches".bold(), stats.shape_mismatches);

    Ok(())
}

fn cmd_batch(inputs: &[PathBuf], output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut failures = Vec::new();
    let mut table_count = 0;
    for input in inputs {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        pb.set_message(stem.to_string());

        let target = output_dir.join(format!("{}_tables.json", stem));
        match extract(input, ExtractOptions::new()) {
            Ok(extraction) => {
                render::write_json(&target, &extraction.records, JsonFormat::Pretty)?;
                table_count += extraction.records.len();
            }
            Err(e) => {
                log::warn!("Skipping {}: {}", input.display(), e);
                failures.push((input.clone(), e.to_string()));
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!(
        "\n{} {} tables from {} documents",
        "Extracted".green().bold(),
        table_count,
        inputs.len() - failures.len()
    );
    for (path, error) in &failures {
        println!("  {} {}: {}", "✗".red(), path.display(), error);
    }

    if !failures.is_empty() {
        return Err(format!("{} of {} documents failed", failures.len(), inputs.len()).into());
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "untable".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Titled table extraction tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/untable".dimmed());
    println!("License: MIT");
}
