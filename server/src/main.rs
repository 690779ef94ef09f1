use anyhow::{Context, Result};
use axum::Router;
use clap::Parser;
use server::{build_app, DEFAULT_MAX_UPLOAD_BYTES};
use std::net::SocketAddr;
use std::path::PathBuf;
use tfidf_core::{EngineConfig, Language, DEFAULT_TOP_N_WORDS};
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8000)]
    port: u16,
    /// Stopword language (english, french, german, spanish, russian)
    #[arg(long, default_value = "english")]
    language: String,
    /// Extra stopwords file, one word per line
    #[arg(long)]
    stopwords: Option<PathBuf>,
    /// Apply NFKC normalization before tokenizing
    #[arg(long, default_value_t = false)]
    normalize_unicode: bool,
    /// Ranked words kept per document when the request does not say
    #[arg(long, default_value_t = DEFAULT_TOP_N_WORDS)]
    top_n_words: usize,
    /// Maximum request body size in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    max_upload_bytes: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let language: Language = args.language.parse()?;
    let config = EngineConfig {
        language,
        stopwords_file: args.stopwords,
        normalize_unicode: args.normalize_unicode,
        top_n_words: args.top_n_words,
    };
    let app: Router = build_app(config, args.max_upload_bytes).context("initializing tf-idf engine")?;

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
