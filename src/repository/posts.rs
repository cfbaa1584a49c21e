//! Cached post collection.
//!
//! Posts are read and parsed once, then served from memory until
//! [`PostRepository::invalidate`] is called.

use std::sync::Arc;

use parking_lot::RwLock;

use super::store::ContentStore;
use crate::{
    error::Result,
    log,
    post::{Post, parse_document},
};

/// Shared read-only view of the post collection.
pub type Posts = Arc<Vec<Post>>;

/// Post index over one bucket of a [`ContentStore`].
///
/// # Thread Safety
///
/// The cache sits behind an `RwLock`:
/// - Cache hits only take the read lock
/// - The first load takes the write lock and re-checks, so exactly one
///   thread scans the store while the others wait for its result
#[derive(Debug)]
pub struct PostRepository<S> {
    store: S,
    bucket: String,
    cache: RwLock<Option<Posts>>,
}

impl<S: ContentStore> PostRepository<S> {
    /// Create a repository over `bucket` (usually `"posts"`).
    pub fn new(store: S, bucket: impl Into<String>) -> Self {
        Self {
            store,
            bucket: bucket.into(),
            cache: RwLock::new(None),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// All posts, newest first.
    ///
    /// The first call lists, reads and parses every document; later calls
    /// return the cached collection. Any unreadable or malformed document
    /// fails the whole load and nothing is cached.
    pub fn load_all(&self) -> Result<Posts> {
        // Fast path: already loaded (read lock only)
        if let Some(posts) = self.cache.read().as_ref() {
            return Ok(Arc::clone(posts));
        }

        // Slow path: build under the write lock
        let mut cache = self.cache.write();
        // Double-check after acquiring write lock
        if let Some(posts) = cache.as_ref() {
            return Ok(Arc::clone(posts));
        }

        let posts = Arc::new(self.build()?);
        *cache = Some(Arc::clone(&posts));
        Ok(posts)
    }

    /// Drop the cached collection; the next [`load_all`](Self::load_all) rebuilds it.
    pub fn invalidate(&self) {
        *self.cache.write() = None;
    }

    /// Whether the collection is currently cached.
    pub fn is_loaded(&self) -> bool {
        self.cache.read().is_some()
    }

    /// Raw text of one document from any bucket.
    pub fn get_content(&self, bucket: &str, identifier: &str) -> Result<String> {
        self.store.read(bucket, identifier)
    }

    /// Read and parse a single post, bypassing the cache.
    pub fn get_post(&self, path_title: &str) -> Result<Post> {
        let raw = self.store.read(&self.bucket, path_title)?;
        parse_document(&raw, path_title)
    }

    /// Identifiers of all posts, newest first.
    pub fn path_titles(&self) -> Result<Vec<String>> {
        Ok(self
            .load_all()?
            .iter()
            .map(|post| post.path_title.clone())
            .collect())
    }

    fn build(&self) -> Result<Vec<Post>> {
        let mut posts = self
            .store
            .list(&self.bucket)?
            .into_iter()
            .map(|identifier| {
                let raw = self.store.read(&self.bucket, &identifier)?;
                parse_document(&raw, &identifier)
            })
            .collect::<Result<Vec<_>>>()?;

        // Stable: equal dates keep enumeration order
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        for post in posts.iter().filter(|p| p.published().is_none()) {
            log!("warn"; "`{}` has unparseable date `{}`", post.path_title, post.date);
        }
        log!("load"; "{} posts from `{}`", posts.len(), self.bucket);

        Ok(posts)
    }
}

/// Posts whose category equals `category`, order preserved.
pub fn posts_in_category<'a>(posts: &'a [Post], category: &str) -> Vec<&'a Post> {
    posts.iter().filter(|post| post.category == category).collect()
}

/// Posts carrying `tag`, order preserved.
pub fn posts_with_tag<'a>(posts: &'a [Post], tag: &str) -> Vec<&'a Post> {
    posts.iter().filter(|post| post.has_tag(tag)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContentError;
    use crate::repository::store::FsContentStore;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    /// In-memory store that counts how often it is enumerated.
    #[derive(Default)]
    struct MemoryStore {
        docs: BTreeMap<(String, String), String>,
        lists: AtomicUsize,
        reads: AtomicUsize,
    }

    impl MemoryStore {
        fn with(mut self, bucket: &str, identifier: &str, text: &str) -> Self {
            self.docs
                .insert((bucket.to_string(), identifier.to_string()), text.to_string());
            self
        }
    }

    impl ContentStore for MemoryStore {
        fn list(&self, bucket: &str) -> Result<Vec<String>> {
            self.lists.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .docs
                .keys()
                .filter(|(b, _)| b == bucket)
                .map(|(_, id)| id.clone())
                .collect())
        }

        fn read(&self, bucket: &str, identifier: &str) -> Result<String> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.docs
                .get(&(bucket.to_string(), identifier.to_string()))
                .cloned()
                .ok_or_else(|| ContentError::unavailable(format!("{bucket}/{identifier}"), None))
        }
    }

    fn doc(title: &str, date: &str, tags: &str, category: &str) -> String {
        format!("---\ntitle: {title}\ndate: {date}\ntags: {tags}\ncategory: {category}\n---\ncontent")
    }

    fn sample_store() -> MemoryStore {
        MemoryStore::default()
            .with("posts", "old", &doc("Old", "2023-05-01 08:00:00", "[\"rust\"]", "tech"))
            .with("posts", "new", &doc("New", "2024-03-01 09:30:00", "[\"rust\", \"web\"]", "tech"))
            .with("posts", "mid", &doc("Mid", "2023-12-24 18:00:00", "[]", "life"))
            .with("pages", "index", "# Welcome\n")
    }

    #[test]
    fn test_load_all_sorted_newest_first() {
        let repo = PostRepository::new(sample_store(), "posts");
        let posts = repo.load_all().unwrap();
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["New", "Mid", "Old"]);
        assert_eq!(posts[0].path_title, "new");
    }

    #[test]
    fn test_load_all_caches() {
        let repo = PostRepository::new(sample_store(), "posts");
        assert!(!repo.is_loaded());

        let first = repo.load_all().unwrap();
        let second = repo.load_all().unwrap();

        assert!(repo.is_loaded());
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(repo.store().lists.load(Ordering::SeqCst), 1);
        assert_eq!(repo.store().reads.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_invalidate_rebuilds() {
        let repo = PostRepository::new(sample_store(), "posts");
        repo.load_all().unwrap();
        repo.invalidate();
        assert!(!repo.is_loaded());
        repo.load_all().unwrap();
        assert_eq!(repo.store().lists.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_concurrent_first_load_scans_once() {
        let repo = PostRepository::new(sample_store(), "posts");
        thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| assert_eq!(repo.load_all().unwrap().len(), 3));
            }
        });
        assert_eq!(repo.store().lists.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_equal_dates_keep_enumeration_order() {
        let store = MemoryStore::default()
            .with("posts", "a", &doc("A", "2024-01-01 00:00:00", "[]", "x"))
            .with("posts", "b", &doc("B", "2024-01-01 00:00:00", "[]", "x"))
            .with("posts", "c", &doc("C", "2024-01-01 00:00:00", "[]", "x"));
        let repo = PostRepository::new(store, "posts");
        let titles: Vec<_> = repo
            .load_all()
            .unwrap()
            .iter()
            .map(|p| p.title.clone())
            .collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_malformed_post_aborts_load() {
        let store = sample_store().with("posts", "broken", "no header here");
        let repo = PostRepository::new(store, "posts");
        let err = repo.load_all().unwrap_err();
        assert!(matches!(err, ContentError::MalformedDocument { ref path_title, .. } if path_title == "broken"));
        assert!(!repo.is_loaded());
    }

    #[test]
    fn test_get_content_and_post() {
        let repo = PostRepository::new(sample_store(), "posts");
        assert_eq!(repo.get_content("pages", "index").unwrap(), "# Welcome\n");
        assert!(matches!(
            repo.get_content("pages", "about"),
            Err(ContentError::ContentUnavailable { .. })
        ));

        let post = repo.get_post("mid").unwrap();
        assert_eq!(post.category, "life");
        assert_eq!(post.content, "content");
        assert!(!repo.is_loaded());
    }

    #[test]
    fn test_path_titles() {
        let repo = PostRepository::new(sample_store(), "posts");
        assert_eq!(repo.path_titles().unwrap(), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_filters() {
        let repo = PostRepository::new(sample_store(), "posts");
        let posts = repo.load_all().unwrap();

        let tech: Vec<_> = posts_in_category(&posts, "tech")
            .iter()
            .map(|p| p.path_title.as_str())
            .collect();
        assert_eq!(tech, vec!["new", "old"]);

        let web: Vec<_> = posts_with_tag(&posts, "web")
            .iter()
            .map(|p| p.path_title.as_str())
            .collect();
        assert_eq!(web, vec!["new"]);
        assert!(posts_in_category(&posts, "none").is_empty());
    }

    #[test]
    fn test_filesystem_load() {
        let dir = tempfile::TempDir::new().unwrap();
        let posts_dir = dir.path().join("posts");
        std::fs::create_dir_all(&posts_dir).unwrap();
        let body = doc("Test", "2024-01-01 12:00:00", "[]", "default");
        std::fs::write(posts_dir.join("post1.md"), &body).unwrap();
        std::fs::write(posts_dir.join("post2.md"), &body).unwrap();
        std::fs::write(posts_dir.join(".DS_Store"), "junk").unwrap();
        std::fs::write(posts_dir.join("invalid.txt"), "junk").unwrap();

        let repo = PostRepository::new(FsContentStore::new(dir.path(), "md"), "posts");
        let posts = repo.load_all().unwrap();
        assert_eq!(posts.len(), 2);
        assert!(posts.iter().all(|p| p.title == "Test"));
    }

    #[test]
    fn test_missing_content_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let repo = PostRepository::new(FsContentStore::new(dir.path(), "md"), "posts");
        assert!(matches!(
            repo.load_all(),
            Err(ContentError::ContentUnavailable { .. })
        ));
    }
}
