use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use tfidf_core::{DocumentDescriptor, DocumentInput, EngineConfig, Language, ProcessOutput, TfidfEngine, DEFAULT_TOP_N_WORDS};
use tracing_subscriber::{fmt, EnvFilter};
use walkdir::WalkDir;

use std::fs::{self, File};
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};

/// Extensions picked up when walking a directory.
const TEXT_EXTENSIONS: [&str; 3] = ["txt", "md", "text"];

#[derive(Parser)]
#[command(name = "tfidf-analyzer")]
#[command(about = "Rank the words of text documents by TF-IDF", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct EngineArgs {
    /// Stopword language (english, french, german, spanish, russian)
    #[arg(long, default_value = "english")]
    language: String,
    /// Extra stopwords file, one word per line
    #[arg(long)]
    stopwords: Option<PathBuf>,
    /// Apply NFKC normalization before tokenizing
    #[arg(long, default_value_t = false)]
    normalize_unicode: bool,
    /// Maximum ranked words per document
    #[arg(long, default_value_t = DEFAULT_TOP_N_WORDS)]
    top_n_words: usize,
    /// Write JSON here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
    /// Pretty-print the JSON
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

impl EngineArgs {
    fn engine(&self) -> Result<TfidfEngine> {
        let language: Language = self.language.parse()?;
        let config = EngineConfig {
            language,
            stopwords_file: self.stopwords.clone(),
            normalize_unicode: self.normalize_unicode,
            top_n_words: self.top_n_words,
        };
        TfidfEngine::new(config).context("initializing tf-idf engine")
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a text file (bare table) or every text file under a directory (filename -> table)
    Files {
        /// Input path (file or directory)
        #[arg(long)]
        input: PathBuf,
        #[command(flatten)]
        engine: EngineArgs,
    },
    /// Analyze a JSON document object or array of document objects; `-` reads stdin
    Json {
        #[arg(long)]
        input: String,
        #[command(flatten)]
        engine: EngineArgs,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    let (input, args) = match cli.command {
        Commands::Files { input, engine } => (load_files(&input)?, engine),
        Commands::Json { input, engine } => (load_json(&input)?, engine),
    };
    let engine = args.engine()?;
    let output = engine.process(input);
    write_output(&output, args.output.as_deref(), args.pretty)
}

/// A single file becomes a single descriptor; a directory becomes a batch sorted by path.
fn load_files(input: &Path) -> Result<DocumentInput> {
    if input.is_file() {
        let name = input.file_name().map(|n| n.to_string_lossy().into_owned());
        let content = read_text(input)?;
        return Ok(DocumentInput::Single(DocumentDescriptor { filename: name, content: Some(content) }));
    }
    if !input.is_dir() {
        bail!("input path {} does not exist", input.display());
    }

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(input).into_iter().filter_map(|e| e.ok()) {
        let p = entry.path();
        if p.is_file() {
            if let Some(ext) = p.extension().and_then(|s| s.to_str()) {
                if TEXT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) {
                    files.push(p.to_path_buf());
                }
            }
        }
    }
    files.sort();
    tracing::info!(dir = %input.display(), num_files = files.len(), "collected text files");

    let mut docs = Vec::with_capacity(files.len());
    for file in files {
        let rel = file.strip_prefix(input).unwrap_or(&file).to_string_lossy().into_owned();
        docs.push(DocumentDescriptor { filename: Some(rel), content: Some(read_text(&file)?) });
    }
    Ok(DocumentInput::Batch(docs))
}

fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    String::from_utf8(bytes).with_context(|| format!("{} is not valid UTF-8 text", path.display()))
}

fn load_json(input: &str) -> Result<DocumentInput> {
    let value: Value = if input == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        serde_json::from_str(&buf)?
    } else {
        let f = File::open(input).with_context(|| format!("opening {input}"))?;
        serde_json::from_reader(BufReader::new(f)).with_context(|| format!("parsing {input}"))?
    };
    Ok(DocumentInput::try_from(value)?)
}

fn write_output(output: &ProcessOutput, path: Option<&Path>, pretty: bool) -> Result<()> {
    let json = if pretty { serde_json::to_string_pretty(output)? } else { serde_json::to_string(output)? };
    match path {
        Some(p) => {
            fs::write(p, json).with_context(|| format!("writing {}", p.display()))?;
            tracing::info!(output = %p.display(), "wrote results");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
