use anyhow::Result;
use axum::Router;
use clap::Parser;
use search_core::{SearchConfig, SearchServer, MAX_RESULT_DOCUMENT_COUNT};
use server::{build_app, load_corpus_file};
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Corpus file to index at startup (stop words line, document count, documents)
    #[arg(long)]
    corpus: Option<PathBuf>,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
    /// Maximum number of results per query
    #[arg(long, default_value_t = MAX_RESULT_DOCUMENT_COUNT)]
    max_results: usize,
    /// Token required by the /index/batch endpoint
    #[arg(long, env = "ADMIN_TOKEN")]
    admin_token: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let config = SearchConfig { max_results: args.max_results };
    let search = match &args.corpus {
        Some(path) => load_corpus_file(path, config)?,
        None => {
            tracing::warn!("no corpus given, starting with an empty index");
            SearchServer::with_config(config)
        }
    };
    let num_docs = search.document_count();
    tracing::info!(num_docs, num_terms = search.term_count(), "index ready");
    let app: Router = build_app(search, args.admin_token);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
