use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use corpus::{CorpusData, CorpusOptions, Pipeline};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Build a vocabulary-indexed corpus from a folder of text files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the flattened corpus and print a summary (or the whole corpus as JSON)
    Build {
        /// Corpus folder
        #[arg(long)]
        folder: PathBuf,
        /// Print the full corpus as JSON instead of a summary
        #[arg(long, default_value_t = false)]
        json: bool,
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Print the deterministic 32-bit embedding of every vocabulary term
    Embed {
        /// Corpus folder; prompted for on stdin when omitted
        #[arg(long)]
        folder: Option<PathBuf>,
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Extension (without the dot) of the files to read
    #[arg(long, default_value = "txt")]
    extension: String,
    /// Keep directory-listing order instead of sorting files by name
    #[arg(long, default_value_t = false)]
    unsorted: bool,
}

impl SourceArgs {
    fn options(&self) -> CorpusOptions {
        CorpusOptions { extension: self.extension.clone(), sort_files: !self.unsorted }
    }
}

#[derive(Serialize)]
struct Summary<'a> {
    num_docs: usize,
    vocab_size: usize,
    total_tokens: usize,
    documents: Vec<DocSummary<'a>>,
}

#[derive(Serialize)]
struct DocSummary<'a> {
    path: &'a std::path::Path,
    tokens: usize,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { folder, json, source } => build(folder, json, &source),
        Commands::Embed { folder, source } => embed(folder, &source),
    }
}

fn build(folder: PathBuf, json: bool, source: &SourceArgs) -> Result<()> {
    let pipeline = Pipeline::new(source.options());
    let corpus = pipeline
        .build(&folder)
        .with_context(|| format!("building corpus from {}", folder.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &corpus)?;
    } else {
        serde_json::to_writer_pretty(&mut out, &summarize(&corpus))?;
    }
    writeln!(out)?;
    tracing::info!(folder = %folder.display(), num_docs = corpus.num_docs, vocab_size = corpus.vocab_size, "corpus build complete");
    Ok(())
}

fn summarize(corpus: &CorpusData) -> Summary<'_> {
    let documents = corpus
        .sources
        .iter()
        .zip(corpus.documents())
        .map(|(path, ids)| DocSummary { path, tokens: ids.len() })
        .collect();
    Summary { num_docs: corpus.num_docs, vocab_size: corpus.vocab_size, total_tokens: corpus.total_tokens(), documents }
}

fn embed(folder: Option<PathBuf>, source: &SourceArgs) -> Result<()> {
    let folder = match folder {
        Some(f) => f,
        None => prompt_folder(io::stdin().lock(), io::stdout().lock())?,
    };
    let pipeline = Pipeline::new(source.options());
    let embeddings = pipeline
        .embeddings(&folder)
        .with_context(|| format!("computing embeddings for {}", folder.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_embeddings(&mut out, &embeddings)?;
    tracing::info!(folder = %folder.display(), terms = embeddings.len(), "embedding listing complete");
    Ok(())
}

fn prompt_folder<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<PathBuf> {
    write!(output, "Enter path to corpus folder: ")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    let path = line.trim_end_matches(['\r', '\n']);
    if path.is_empty() {
        bail!("no folder path given");
    }
    Ok(PathBuf::from(path))
}

fn write_embeddings<W: Write>(out: &mut W, embeddings: &BTreeMap<String, u32>) -> io::Result<()> {
    writeln!(out, "\n=== Vocabulary ({} terms) ===", embeddings.len())?;
    for (term, value) in embeddings {
        writeln!(out, "{term:<20} -> {value}")?;
    }
    Ok(())
}
