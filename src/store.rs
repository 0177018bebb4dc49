//! Shared slot for the current feed document.

use crate::models::Rss;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Owns the single "current feed" slot shared between the background
/// refresher and the HTTP handlers.
///
/// The handle is cheap to clone. The write lock is held only for the
/// pointer swap and the read lock only for an `Arc` clone, so readers never
/// wait on fetch or parse work and always observe a complete document:
/// either the previous one or, once swapped, the new one.
#[derive(Clone, Default)]
pub struct FeedStore {
    inner: Arc<RwLock<Option<Arc<Rss>>>>,
}

impl FeedStore {
    /// An empty store; [`current`](Self::current) returns `None` until the
    /// first [`publish`](Self::publish).
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically replace the held document with a new one.
    pub async fn publish(&self, feed: Rss) {
        let mut slot = self.inner.write().await;
        *slot = Some(Arc::new(feed));
    }

    /// The current document, or `None` before the first publish.
    pub async fn current(&self) -> Option<Arc<Rss>> {
        self.inner.read().await.clone()
    }
}
