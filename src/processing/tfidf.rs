//! Request-scoped TF-IDF model.
//!
//! Documents are tokenized into lowercase words with stopwords removed and
//! kept as term-frequency maps. The inverse document frequency of a term is
//! `1 + ln(N / (1 + df))`, where `N` counts every document added so far, so
//! a score is only final once the whole corpus has been added.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}_]+").expect("word pattern is valid"));

const STOPWORDS: &[&str] = &[
    "about", "above", "after", "again", "all", "also", "am", "an", "and", "another", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "came", "can", "cannot", "come", "could", "did", "do", "does", "doing", "during", "each",
    "few", "for", "from", "further", "get", "got", "has", "had", "he", "have", "her", "here",
    "him", "himself", "his", "how", "if", "in", "into", "is", "it", "its", "itself", "like",
    "make", "many", "me", "might", "more", "most", "much", "must", "my", "myself", "never", "now",
    "of", "on", "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "said",
    "same", "see", "should", "since", "so", "some", "still", "such", "take", "than", "that",
    "the", "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this",
    "those", "through", "to", "too", "under", "until", "up", "very", "was", "way", "we", "well",
    "were", "what", "where", "when", "which", "while", "who", "whom", "with", "would", "why",
    "you", "your", "yours", "yourself", "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k",
    "l", "m", "n", "o", "p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z", "1", "2", "3",
    "4", "5", "6", "7", "8", "9", "0", "_",
];

/// Label under which a document's statistics are stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocumentKey {
    /// Position of a candidate in the candidate sequence.
    Index(usize),
    /// The post the candidates are compared against.
    Current,
}

/// Split `text` into lowercase word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|word| word.as_str().to_string())
        .collect()
}

fn is_stopword(term: &str) -> bool {
    STOPWORDS.contains(&term)
}

#[derive(Debug, Default)]
struct TermCounts {
    counts: HashMap<String, usize>,
}

impl TermCounts {
    fn tf(&self, term: &str) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }
}

#[derive(Debug, Default)]
pub struct TfIdf {
    documents: Vec<TermCounts>,
    keys: HashMap<DocumentKey, usize>,
    document_frequency: HashMap<String, usize>,
}

impl TfIdf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `text` under `key`. Re-using a key points it at the newest
    /// document; the older one still counts toward corpus statistics.
    pub fn add_document(&mut self, text: &str, key: DocumentKey) {
        let mut document = TermCounts::default();
        for term in tokenize(text) {
            if is_stopword(&term) {
                continue;
            }
            *document.counts.entry(term).or_insert(0) += 1;
        }

        for term in document.counts.keys() {
            *self.document_frequency.entry(term.clone()).or_insert(0) += 1;
        }

        self.keys.insert(key, self.documents.len());
        self.documents.push(document);
    }

    pub fn idf(&self, term: &str) -> f64 {
        let docs_with_term = self.document_frequency.get(term).copied().unwrap_or(0);
        1.0 + (self.documents.len() as f64 / (1 + docs_with_term) as f64).ln()
    }

    /// Score `query` against the document stored under `key`.
    ///
    /// Returns `None` when nothing was added under `key`.
    pub fn tfidf(&self, query: &str, key: DocumentKey) -> Option<f64> {
        self.tfidf_terms(&tokenize(query), key)
    }

    /// Same as [`TfIdf::tfidf`] for an already tokenized query. Repeated
    /// query terms contribute once per occurrence.
    pub fn tfidf_terms(&self, terms: &[String], key: DocumentKey) -> Option<f64> {
        let document = self.documents.get(*self.keys.get(&key)?)?;

        Some(
            terms
                .iter()
                .map(|term| match document.tf(term) {
                    0 => 0.0,
                    tf => tf as f64 * self.idf(term),
                })
                .sum(),
        )
    }
}
