use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::debug;

use crate::filters::LabelFilter;
use crate::indexer::{build_journal, discover_entries};
use crate::models::Journal;
use crate::parsers::{MarkdownScanner, scan_entry_files};
use crate::render::{DEFAULT_HEADING_LEVEL, RenderOptions, write_labels, write_timeline};
use crate::tags::{TagReader, TagRecord, TagWriter};
use crate::utils::init_logging;
use crate::utils::logging::DEFAULT_LOG_LEVEL;

/// Tag file name meaning stdin or stdout
const STDIO_TAGFILE: &str = "-";

#[derive(Parser)]
#[command(name = "markdown-journal")]
#[command(version = "0.1.0")]
#[command(about = "Index and browse a journal of dated Markdown entries", long_about = None)]
pub struct Cli {
    /// Diagnostic log level written to stderr (RUST_LOG takes precedence)
    #[arg(long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a ctags compatible tags file
    Ctags {
        /// Journal directories or entry files (defaults to the current directory)
        paths: Vec<PathBuf>,

        /// Recurse into subdirectories
        #[arg(short = 'R', long)]
        recurse: bool,

        /// Write tags to this file; "-" writes to stdout
        #[arg(short = 'f', long = "tagfile", default_value = "tags")]
        tagfile: String,

        /// Do not sort tags by name
        #[arg(long)]
        no_sort: bool,
    },
    /// Display a timeline of journal entries
    Timeline {
        #[command(flatten)]
        source: SourceArgs,

        /// Heading level of the year headings
        #[arg(short, long, default_value_t = DEFAULT_HEADING_LEVEL)]
        level: usize,
    },
    /// Display journal entries grouped by label
    Labels {
        #[command(flatten)]
        source: SourceArgs,

        /// Heading level of the label headings
        #[arg(short, long, default_value_t = DEFAULT_HEADING_LEVEL)]
        level: usize,

        /// Only show labels matching this regular expression (repeat to require several)
        #[arg(long = "filter", value_name = "REGEX")]
        filters: Vec<String>,
    },
    /// Show statistics about the journal
    Stats {
        #[command(flatten)]
        source: SourceArgs,
    },
}

/// Where journal records come from
#[derive(Args)]
pub struct SourceArgs {
    /// Journal directories or entry files (defaults to the current directory)
    pub paths: Vec<PathBuf>,

    /// Recurse into subdirectories
    #[arg(short = 'R', long)]
    pub recurse: bool,

    /// Read entries from this tags file instead of scanning; "-" reads stdin
    #[arg(short = 'f', long = "tagfile")]
    pub tagfile: Option<String>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let _logger = init_logging(&cli.log_level)?;

    match cli.command {
        Some(Commands::Ctags { paths, recurse, tagfile, no_sort }) => {
            generate_ctags(&paths, recurse, &tagfile, no_sort)?;
        }
        Some(Commands::Timeline { source, level }) => {
            let options = RenderOptions::new(level)?;
            let journal = load_journal(&source)?;
            let mut out = io::stdout().lock();
            write_timeline(&journal, &options, &mut out).context("Failed to write timeline")?;
        }
        Some(Commands::Labels { source, level, filters }) => {
            let label_filter = LabelFilter::new(&filters)?;
            let options = RenderOptions::new(level)?.with_label_filter(label_filter);
            let journal = load_journal(&source)?;
            let mut out = io::stdout().lock();
            write_labels(&journal, &options, &mut out).context("Failed to write labels")?;
        }
        Some(Commands::Stats { source }) => {
            let journal = load_journal(&source)?;
            show_stats(&journal);
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn generate_ctags(paths: &[PathBuf], recurse: bool, tagfile: &str, no_sort: bool) -> Result<()> {
    let mut records = scan_paths(paths, recurse)?;
    if !no_sort {
        records.sort_by(|a, b| a.name.cmp(&b.name));
    }

    let out: Box<dyn Write> = if tagfile == STDIO_TAGFILE {
        Box::new(io::stdout().lock())
    } else {
        let file = File::create(tagfile)
            .with_context(|| format!("Failed to create tag file: {}", tagfile))?;
        Box::new(file)
    };

    TagWriter::new(out)
        .write_all(&records)
        .with_context(|| format!("Failed to write tag file: {}", tagfile))?;
    debug!("Wrote {} tags to {}", records.len(), tagfile);

    Ok(())
}

fn load_journal(source: &SourceArgs) -> Result<Journal> {
    let records = match &source.tagfile {
        Some(tagfile) => read_tag_file(tagfile)?,
        None => scan_paths(&source.paths, source.recurse)?,
    };
    Ok(build_journal(records))
}

fn scan_paths(paths: &[PathBuf], recurse: bool) -> Result<Vec<TagRecord>> {
    let roots = if paths.is_empty() { vec![PathBuf::from(".")] } else { paths.to_vec() };
    let files = discover_entries(&roots, recurse)?;
    debug!("Found {} entry files", files.len());
    scan_entry_files(&MarkdownScanner, &files)
}

fn read_tag_file(tagfile: &str) -> Result<Vec<TagRecord>> {
    let records = if tagfile == STDIO_TAGFILE {
        TagReader::new(io::stdin().lock()).read_all()
    } else {
        let file = File::open(tagfile)
            .with_context(|| format!("Failed to open tag file: {}", tagfile))?;
        TagReader::new(BufReader::new(file)).read_all()
    };
    records.with_context(|| format!("Failed to read tag file: {}", tagfile))
}

fn show_stats(journal: &Journal) {
    let occurrences: usize = journal.labels().iter().map(|l| l.occurrences.len()).sum();

    println!("Journal Statistics");
    println!("==================");
    println!("Total entries: {}", journal.entries().len());
    println!("Total labels: {}", journal.labels().len());
    println!("Label occurrences: {}", occurrences);

    if let Some(oldest) = journal.entries().last() {
        println!("Oldest entry: {}", oldest.date().format("%Y-%m-%d"));
    }
    if let Some(newest) = journal.entries().first() {
        println!("Newest entry: {}", newest.date().format("%Y-%m-%d"));
    }
}
