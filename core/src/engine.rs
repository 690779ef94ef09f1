use crate::document::{DocumentDescriptor, DocumentInput, ProcessOutput};
use crate::error::Result;
use crate::frequency::{accumulate, TermFrequency};
use crate::idf::fit_idf;
use crate::ranking::{rank_document, ResultTable};
use crate::stopwords::{Language, StopwordSet};
use crate::tokenizer::Tokenizer;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;

pub const DEFAULT_TOP_N_WORDS: usize = 50;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub language: Language,
    /// Extra stopwords, one per line, added to the built-in list.
    pub stopwords_file: Option<PathBuf>,
    pub normalize_unicode: bool,
    pub top_n_words: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { language: Language::default(), stopwords_file: None, normalize_unicode: false, top_n_words: DEFAULT_TOP_N_WORDS }
    }
}

struct PreparedDoc {
    filename: String,
    freq: TermFrequency,
}

/// Stateless TF-IDF engine. Resources are loaded once in `new`; every call is independent.
#[derive(Debug, Clone)]
pub struct TfidfEngine {
    tokenizer: Tokenizer,
    top_n_words: usize,
}

impl TfidfEngine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        let stopwords = match &config.stopwords_file {
            Some(path) => StopwordSet::from_file(config.language, path)?,
            None => StopwordSet::builtin(config.language),
        };
        tracing::info!(language = %config.language, stopwords = stopwords.len(), top_n_words = config.top_n_words, "tf-idf engine ready");
        let tokenizer = Tokenizer::new(stopwords).with_unicode_normalization(config.normalize_unicode);
        Ok(Self { tokenizer, top_n_words: config.top_n_words })
    }

    pub fn tokenizer(&self) -> &Tokenizer { &self.tokenizer }

    pub fn default_top_n_words(&self) -> usize { self.top_n_words }

    pub fn process(&self, input: DocumentInput) -> ProcessOutput { self.process_documents(input, self.top_n_words) }

    /// Resolve the input shape of a raw JSON value, then process it.
    pub fn process_json(&self, value: Value, top_n_words: usize) -> Result<ProcessOutput> {
        let input = DocumentInput::try_from(value).map_err(|e| {
            tracing::warn!(error = %e, "rejected input");
            e
        })?;
        Ok(self.process_documents(input, top_n_words))
    }

    pub fn process_documents(&self, input: DocumentInput, top_n_words: usize) -> ProcessOutput {
        match input {
            DocumentInput::Single(doc) => {
                let mut tables = self.rank_batch(vec![doc], top_n_words);
                ProcessOutput::Table(tables.pop().map(|(_, t)| t).unwrap_or_default())
            }
            DocumentInput::Batch(docs) => {
                // later duplicates overwrite earlier ones
                ProcessOutput::Batch(self.rank_batch(docs, top_n_words).into_iter().collect::<BTreeMap<_, _>>())
            }
        }
    }

    /// Tokenize every document, fit idf once over the batch, then rank each document.
    fn rank_batch(&self, docs: Vec<DocumentDescriptor>, top_n_words: usize) -> Vec<(String, ResultTable)> {
        if docs.is_empty() {
            return Vec::new();
        }
        let mut corpus: Vec<Vec<String>> = Vec::with_capacity(docs.len());
        let mut prepared: Vec<PreparedDoc> = Vec::with_capacity(docs.len());
        for (i, doc) in docs.iter().enumerate() {
            let tokens = self.tokenizer.tokenize(doc.content_or_empty());
            prepared.push(PreparedDoc { filename: doc.name_or_placeholder(i), freq: accumulate(&tokens) });
            corpus.push(tokens);
        }
        let idf = fit_idf(&corpus);
        tracing::debug!(num_docs = docs.len(), vocabulary = idf.len(), top_n_words, "fitted corpus idf");
        prepared
            .into_iter()
            .map(|d| {
                let table = rank_document(&d.freq, &idf, top_n_words);
                (d.filename, table)
            })
            .collect()
    }
}
