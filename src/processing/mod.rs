pub mod related;
pub mod tfidf;
