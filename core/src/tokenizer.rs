use crate::stopwords::{Language, StopwordSet};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

lazy_static! {
    static ref GENERIC_RE: Regex = Regex::new(r"(?u)\p{L}[\p{L}\p{N}_']*(?:-\p{L}[\p{L}\p{N}_']*)*").expect("valid regex");
}

#[derive(Debug, Error)]
#[error("no segmentation rules for {0}")]
pub struct SegmentationUnavailable(pub Language);

fn is_apostrophe(c: char) -> bool { c == '\'' || c == '\u{2019}' }

/// Split English contraction suffixes: "don't" -> "do" + "n't", "cat's" -> "cat" + "'s".
fn push_english<'a>(word: &'a str, out: &mut Vec<&'a str>) {
    if let Some(pos) = word.rfind(is_apostrophe) {
        let tail = &word[pos..];
        let rest = &tail[tail.chars().next().map_or(1, char::len_utf8)..];
        if rest == "t" && pos > 1 && word[..pos].ends_with('n') {
            out.push(&word[..pos - 1]);
            out.push(&word[pos - 1..]);
            return;
        }
        if pos > 0 && matches!(rest, "s" | "re" | "ve" | "ll" | "d" | "m") {
            out.push(&word[..pos]);
            out.push(tail);
            return;
        }
    }
    out.push(word);
}

fn push_word<'a>(word: &'a str, out: &mut Vec<&'a str>) { out.push(word) }

/// Split French elided articles and pronouns: "l'homme" -> "l'" + "homme".
fn push_french<'a>(word: &'a str, out: &mut Vec<&'a str>) {
    if let Some(pos) = word.find(is_apostrophe) {
        if matches!(&word[..pos], "l" | "d" | "j" | "qu" | "n" | "s" | "c" | "m" | "t") {
            let split = pos + word[pos..].chars().next().map_or(1, char::len_utf8);
            if split < word.len() {
                out.push(&word[..split]);
                out.push(&word[split..]);
                return;
            }
        }
    }
    out.push(word);
}

/// Unicode words, with runs joined by a single hyphen between letters kept as one segment.
fn hyphen_joined_words(text: &str) -> Vec<&str> {
    let mut spans: Vec<(usize, usize)> = Vec::new();
    for (start, word) in text.unicode_word_indices() {
        let end = start + word.len();
        if let Some(last) = spans.last_mut() {
            let joined = &text[last.1..start] == "-"
                && text[..last.1].chars().next_back().is_some_and(char::is_alphabetic)
                && word.chars().next().is_some_and(char::is_alphabetic);
            if joined {
                last.1 = end;
                continue;
            }
        }
        spans.push((start, end));
    }
    spans.into_iter().map(|(s, e)| &text[s..e]).collect()
}

/// Language-aware segmentation: Unicode word boundaries plus per-language clitic rules.
/// Russian deliberately has no rules and always takes the generic path.
pub fn segment(text: &str, language: Language) -> Result<Vec<&str>, SegmentationUnavailable> {
    let rules: for<'a> fn(&'a str, &mut Vec<&'a str>) = match language {
        Language::English => push_english,
        Language::French => push_french,
        Language::German | Language::Spanish => push_word,
        Language::Russian => return Err(SegmentationUnavailable(language)),
    };
    let mut out = Vec::new();
    for word in hyphen_joined_words(text) {
        rules(word, &mut out);
    }
    Ok(out)
}

/// Language-agnostic segmentation: runs starting with a letter, hyphenated compounds kept whole.
pub fn segment_generic(text: &str) -> Vec<&str> { GENERIC_RE.find_iter(text).map(|m| m.as_str()).collect() }

fn is_alphabetic_word(token: &str) -> bool { !token.is_empty() && token.chars().all(char::is_alphabetic) }

#[derive(Debug, Clone)]
pub struct Tokenizer {
    stopwords: StopwordSet,
    normalize_unicode: bool,
}

impl Tokenizer {
    pub fn new(stopwords: StopwordSet) -> Self { Self { stopwords, normalize_unicode: false } }

    /// Apply NFKC before lowercasing (full-width letters, ligatures).
    pub fn with_unicode_normalization(mut self, enabled: bool) -> Self {
        self.normalize_unicode = enabled;
        self
    }

    pub fn language(&self) -> Language { self.stopwords.language() }

    pub fn stopwords(&self) -> &StopwordSet { &self.stopwords }

    /// Lowercase, segment, keep purely alphabetic tokens, drop stopwords.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        let lowered = if self.normalize_unicode { text.nfkc().collect::<String>().to_lowercase() } else { text.to_lowercase() };
        let segments = match segment(&lowered, self.language()) {
            Ok(segments) => segments,
            Err(e) => {
                tracing::debug!(error = %e, "using language-agnostic segmentation");
                segment_generic(&lowered)
            }
        };
        segments
            .into_iter()
            .filter(|t| is_alphabetic_word(t) && !self.stopwords.contains(t))
            .map(str::to_string)
            .collect()
    }
}

/// Tokenize with the built-in stopwords of `language`.
pub fn tokenize(text: &str, language: Language) -> Vec<String> { Tokenizer::new(StopwordSet::builtin(language)).tokenize(text) }
