use indexmap::IndexMap;

/// Per-document term counts in first-seen order, plus the total token count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFrequency {
    counts: IndexMap<String, u32>,
    total: usize,
}

impl TermFrequency {
    pub fn new() -> Self { Self::default() }

    pub fn add(&mut self, term: &str) {
        match self.counts.get_mut(term) {
            Some(c) => *c += 1,
            None => { self.counts.insert(term.to_string(), 1); }
        }
        self.total += 1;
    }

    pub fn count(&self, term: &str) -> u32 { self.counts.get(term).copied().unwrap_or(0) }

    /// Sum of all counts, i.e. the filtered token sequence length.
    pub fn total(&self) -> usize { self.total }

    /// Number of distinct terms.
    pub fn len(&self) -> usize { self.counts.len() }

    pub fn is_empty(&self) -> bool { self.counts.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ { self.counts.iter().map(|(t, c)| (t.as_str(), *c)) }

    pub fn into_parts(self) -> (IndexMap<String, u32>, usize) { (self.counts, self.total) }
}

pub fn accumulate<S: AsRef<str>>(tokens: &[S]) -> TermFrequency {
    let mut freq = TermFrequency::new();
    for t in tokens {
        freq.add(t.as_ref());
    }
    freq
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_total() {
        let freq = accumulate(&["cat", "dog", "cat", "bird", "cat"]);
        assert_eq!(freq.count("cat"), 3);
        assert_eq!(freq.count("dog"), 1);
        assert_eq!(freq.count("fish"), 0);
        assert_eq!(freq.total(), 5);
        assert_eq!(freq.len(), 3);
    }

    #[test]
    fn keeps_first_seen_order() {
        let freq = accumulate(&["b", "a", "b", "c", "a"]);
        let order: Vec<&str> = freq.iter().map(|(t, _)| t).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn empty_tokens() {
        let freq = accumulate::<String>(&[]);
        assert!(freq.is_empty());
        assert_eq!(freq.total(), 0);
    }
}
