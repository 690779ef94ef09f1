use crate::frequency::TermFrequency;
use crate::idf::IdfModel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub word: String,
    pub tf: u32,
    pub tf_norm: f64,
    pub idf: f64,
}

pub type ResultTable = Vec<ResultRow>;

/// Round to the nearest 4-decimal value; exact decimal ties go to the even digit.
pub fn round4(x: f64) -> f64 { format!("{x:.4}").parse().unwrap_or(x) }

/// Join counts with corpus idf, sort by (idf, tf) descending and keep `top_n` rows.
/// Ties keep the order in which terms were first seen.
pub fn rank_document(freq: &TermFrequency, idf: &IdfModel, top_n: usize) -> ResultTable {
    let total = freq.total();
    if total == 0 {
        return Vec::new();
    }
    let mut rows: ResultTable = freq
        .iter()
        .map(|(word, tf)| ResultRow { word: word.to_string(), tf, tf_norm: round4(tf as f64 / total as f64), idf: round4(idf.get(word)) })
        .collect();
    // sort_by is stable
    rows.sort_by(|a, b| b.idf.total_cmp(&a.idf).then(b.tf.cmp(&a.tf)));
    rows.truncate(top_n);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::accumulate;
    use crate::idf::fit_idf;

    fn tokens(s: &str) -> Vec<String> { s.split_whitespace().map(str::to_string).collect() }

    #[test]
    fn rounds_to_four_places() {
        assert_eq!(round4(1.0 / 3.0), 0.3333);
        assert_eq!(round4(2.0 / 3.0), 0.6667);
        assert_eq!(round4(1.5f64.ln() + 1.0), 1.4055);
    }

    #[test]
    fn exact_ties_round_to_even() {
        assert_eq!(round4(1.0 / 32.0), 0.0312);
        assert_eq!(round4(5.0 / 32.0), 0.1562);
        assert_eq!(round4(3.0 / 32.0), 0.0938);
        // 5e-05 is stored slightly above the tie
        assert_eq!(round4(5e-05), 0.0001);
    }

    #[test]
    fn tf_norm_of_one_in_thirty_two() {
        let mut corpus = vec![tokens("alpha")];
        corpus[0].extend(std::iter::repeat("beta".to_string()).take(31));
        let freq = accumulate(&corpus[0]);
        assert_eq!(freq.total(), 32);
        let table = rank_document(&freq, &fit_idf(&corpus), 10);
        let alpha = table.iter().find(|r| r.word == "alpha").unwrap();
        assert_eq!(alpha.tf, 1);
        assert_eq!(alpha.tf_norm, 0.0312);
    }

    #[test]
    fn orders_by_idf_then_tf() {
        let corpus = vec![tokens("cat cat dog"), tokens("dog dog bird")];
        let idf = fit_idf(&corpus);
        let doc2 = rank_document(&accumulate(&corpus[1]), &idf, 50);
        let words: Vec<&str> = doc2.iter().map(|r| r.word.as_str()).collect();
        // dog has the higher tf but the lower idf
        assert_eq!(words, vec!["bird", "dog"]);
        assert_eq!(doc2[1].tf, 2);
        assert_eq!(doc2[1].tf_norm, 0.6667);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let corpus = vec![tokens("b a c a b")];
        let table = rank_document(&accumulate(&corpus[0]), &fit_idf(&corpus), 50);
        let words: Vec<&str> = table.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["b", "a", "c"]);
    }

    #[test]
    fn truncates_and_handles_empty() {
        let corpus = vec![tokens("a b c d e")];
        let idf = fit_idf(&corpus);
        assert_eq!(rank_document(&accumulate(&corpus[0]), &idf, 2).len(), 2);
        assert!(rank_document(&accumulate(&corpus[0]), &idf, 0).is_empty());
        assert!(rank_document(&TermFrequency::new(), &idf, 10).is_empty());
    }

    #[test]
    fn unseen_terms_use_default_idf() {
        let table = rank_document(&accumulate(&["ghost"]), &IdfModel::default(), 10);
        assert_eq!(table[0].idf, 1.0);
        assert_eq!(table[0].tf_norm, 1.0);
    }
}
