//! Post repository: enumerates a content bucket, parses every document and
//! serves cached, sorted and aggregated views of the result.
//!
//! # Data Flow
//!
//! ```text
//! ContentStore::list ──► ContentStore::read ──► parse_document ──► sort by date
//!                                                                      │
//!                                              cache (Arc<Vec<Post>>) ◄┘
//!                                                      │
//!                  get_all_tags / get_top_k_tags / posts_in_category
//! ```

mod posts;
mod store;
mod tags;

pub use posts::{PostRepository, Posts, posts_in_category, posts_with_tag};
pub use store::{ContentStore, FsContentStore};
pub use tags::{get_all_tags, get_top_k_tags, ranked_tags, tag_counts};
