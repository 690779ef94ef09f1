//! TF-IDF statistics over a small batch of documents.
//!
//! Pipeline: tokenize every document, count terms per document, fit a smoothed
//! idf over the whole batch, then rank each document's terms by (idf, tf).

pub mod document;
pub mod engine;
pub mod error;
pub mod frequency;
pub mod idf;
pub mod ranking;
pub mod stopwords;
pub mod tokenizer;

pub use document::{DocumentDescriptor, DocumentInput, ProcessOutput};
pub use engine::{EngineConfig, TfidfEngine, DEFAULT_TOP_N_WORDS};
pub use error::{Result, TfidfError};
pub use frequency::{accumulate, TermFrequency};
pub use idf::{fit_idf, IdfModel, DEFAULT_IDF};
pub use ranking::{rank_document, ResultRow, ResultTable};
pub use stopwords::{Language, StopwordSet};
pub use tokenizer::{tokenize, Tokenizer};
