//! Tag aggregation over a set of posts.
//!
//! Nothing here is cached; every call reflects the posts it is given.

use std::collections::{BTreeMap, BTreeSet};

use crate::post::Post;

/// Every distinct tag, ascending.
pub fn get_all_tags(posts: &[Post]) -> BTreeSet<String> {
    posts
        .iter()
        .flat_map(|post| post.tags.iter().cloned())
        .collect()
}

/// Occurrence count of each tag across `posts`.
pub fn tag_counts(posts: &[Post]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for tag in posts.iter().flat_map(|post| &post.tags) {
        *counts.entry(tag.clone()).or_default() += 1;
    }
    counts
}

/// The `k` most frequent tags, most frequent first.
///
/// Equal counts are ordered alphabetically. `k == 0` yields nothing.
pub fn get_top_k_tags(posts: &[Post], k: usize) -> Vec<String> {
    ranked_tags(posts)
        .into_iter()
        .take(k)
        .map(|(tag, _)| tag)
        .collect()
}

/// All tags with their counts, ordered as [`get_top_k_tags`] orders them.
pub fn ranked_tags(posts: &[Post]) -> Vec<(String, usize)> {
    let mut ranked: Vec<_> = tag_counts(posts).into_iter().collect();
    // BTreeMap iteration is already alphabetical; a stable sort keeps it for ties
    ranked.sort_by(|(_, a), (_, b)| b.cmp(a));
    ranked
}
