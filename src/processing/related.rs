use futures::future;

use crate::domain::post::{Post, PostId};
use crate::errors::RelatedPostsError;
use crate::models::config::RelatedConfig;
use crate::processing::tfidf::{DocumentKey, TfIdf, tokenize};
use crate::repository::PostReader;

/// A candidate paired with its similarity to the target post.
#[derive(Debug)]
struct ScoredPost {
    post: Post,
    similarity: f64,
}

/// Rank `candidates` by TF-IDF similarity to `target_text`.
///
/// Every candidate is added to the model before the target and before any
/// scoring happens, so all scores see the same corpus statistics. Equal
/// scores keep their candidate order.
pub fn rank_related_posts(
    target_text: &str,
    candidates: Vec<Post>,
    config: &RelatedConfig,
) -> Vec<Post> {
    let mut model = TfIdf::new();
    for (index, post) in candidates.iter().enumerate() {
        model.add_document(post.text(), DocumentKey::Index(index));
    }
    model.add_document(target_text, DocumentKey::Current);

    let query = tokenize(target_text);
    let mut scored = candidates
        .into_iter()
        .enumerate()
        .map(|(index, post)| ScoredPost {
            similarity: model
                .tfidf_terms(&query, DocumentKey::Index(index))
                .unwrap_or_default(),
            post,
        })
        .collect::<Vec<_>>();

    scored.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

    scored
        .into_iter()
        .filter(|item| item.similarity >= config.similarity_threshold)
        .take(config.max_results)
        .map(|item| item.post)
        .collect()
}

/// Look up `post_id` and return the posts most similar to it.
///
/// The target and the candidate list are read concurrently on the blocking
/// pool. A missing target is reported before any candidate read failure.
pub async fn find_related_posts<R>(
    repo: R,
    post_id: PostId,
    config: &RelatedConfig,
) -> Result<Vec<Post>, RelatedPostsError>
where
    R: PostReader + Clone + Send + 'static,
{
    let target_task = {
        let repo = repo.clone();
        let post_id = post_id.clone();
        tokio::task::spawn_blocking(move || repo.get_post_by_id(&post_id))
    };
    let candidates_task = {
        let post_id = post_id.clone();
        let limit = config.candidate_limit;
        tokio::task::spawn_blocking(move || repo.list_posts_excluding(&post_id, limit))
    };

    let (target, candidates) = future::try_join(target_task, candidates_task).await?;

    let target = target?.ok_or_else(|| RelatedPostsError::NotFound(post_id.clone()))?;
    let candidates = candidates?;
    let candidate_count = candidates.len();

    let related = rank_related_posts(target.text(), candidates, config);

    log::info!(
        "Related posts for {post_id}: candidates={candidate_count}, related={}",
        related.len()
    );

    Ok(related)
}
