use anyhow::{Context, Result};
use clap::Parser;
use search_core::{read_corpus, read_query, SearchConfig, MAX_RESULT_DOCUMENT_COUNT};
use tracing_subscriber::{fmt, EnvFilter};

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "search-cli")]
#[command(about = "Rank documents against a query with TF-IDF", long_about = None)]
struct Cli {
    /// Input file: stop words line, document count, documents, query. Reads stdin when omitted.
    #[arg(long)]
    input: Option<PathBuf>,
    /// Maximum number of documents to print
    #[arg(long, default_value_t = MAX_RESULT_DOCUMENT_COUNT)]
    max_results: usize,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    let mut reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => {
            let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            Box::new(BufReader::new(f))
        }
        None => Box::new(io::stdin().lock()),
    };

    let corpus = read_corpus(&mut reader).context("reading corpus")?;
    let num_docs = corpus.documents.len();
    let server = corpus.into_search_server(SearchConfig { max_results: cli.max_results });
    tracing::info!(num_docs, num_terms = server.term_count(), "index built");

    let query = read_query(&mut reader).context("reading query")?;
    let results = server.find_top_documents(&query);

    let mut out = BufWriter::new(io::stdout().lock());
    for doc in &results {
        writeln!(out, "{doc}")?;
    }
    out.flush()?;
    Ok(())
}
