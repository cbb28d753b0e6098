pub mod api;
pub mod db;
pub mod domain;
pub mod errors;
pub mod models;
pub mod processing;
pub mod repository;
pub mod schema;

/// Minimum TF-IDF score a candidate needs to be reported as related.
pub const SIMILARITY_THRESHOLD: f64 = 1.0;

/// Upper bound on the number of related posts returned per request.
pub const MAX_RELATED_POSTS: usize = 5;

/// Upper bound on the number of candidate posts loaded into the model.
pub const CANDIDATE_LIMIT: u32 = 100;
