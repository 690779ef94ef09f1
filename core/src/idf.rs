use std::collections::{HashMap, HashSet};

/// Score for terms the model was never fitted on.
pub const DEFAULT_IDF: f64 = 1.0;

/// Corpus-wide smoothed inverse document frequency.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdfModel {
    idf: HashMap<String, f64>,
    num_docs: usize,
}

impl IdfModel {
    pub fn get(&self, term: &str) -> f64 { self.idf.get(term).copied().unwrap_or(DEFAULT_IDF) }

    pub fn contains(&self, term: &str) -> bool { self.idf.contains_key(term) }

    /// Documents the model was fitted on; 0 when fitting was skipped.
    pub fn num_docs(&self) -> usize { self.num_docs }

    pub fn len(&self) -> usize { self.idf.len() }

    pub fn is_empty(&self) -> bool { self.idf.is_empty() }
}

/// Smoothed idf: ln((1 + N) / (1 + df)) + 1.
pub fn smoothed_idf(num_docs: usize, df: usize) -> f64 { ((1.0 + num_docs as f64) / (1.0 + df as f64)).ln() + 1.0 }

/// Fit idf over already filtered, lowercased token sequences, one per document.
/// Terms are split on whitespace only. If no document has a token, fitting is skipped.
pub fn fit_idf(corpus: &[Vec<String>]) -> IdfModel {
    let mut df: HashMap<&str, usize> = HashMap::new();
    for doc in corpus {
        let seen: HashSet<&str> = doc.iter().flat_map(|t| t.split_whitespace()).collect();
        for term in seen {
            *df.entry(term).or_insert(0) += 1;
        }
    }
    if df.is_empty() {
        tracing::debug!(num_docs = corpus.len(), "no tokens in corpus, skipping idf fit");
        return IdfModel::default();
    }
    let n = corpus.len();
    let idf = df.into_iter().map(|(term, df_t)| (term.to_string(), smoothed_idf(n, df_t))).collect();
    IdfModel { idf, num_docs: n }
}
