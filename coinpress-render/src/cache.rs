//! Injected preview cache.
//!
//! The engine itself never caches; callers that re-render the same template
//! repeatedly (thumbnail strips, template pickers) can inject a cache keyed
//! by template id and a version tag. Entries are invalidated purely by key
//! versioning, never by time.

use std::collections::HashMap;

/// Cache key: template identifier plus a caller-chosen version tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub template_id: String,
    pub version: String,
}

impl CacheKey {
    pub fn new(template_id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            template_id: template_id.into(),
            version: version.into(),
        }
    }
}

/// Get/put/invalidate interface the calling context implements or injects.
pub trait PreviewCache {
    fn get(&self, key: &CacheKey) -> Option<String>;
    fn put(&mut self, key: CacheKey, html: String);
    fn invalidate(&mut self, key: &CacheKey);
}

/// In-memory cache for the preview call site.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: HashMap<CacheKey, String>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreviewCache for MemoryCache {
    fn get(&self, key: &CacheKey) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: CacheKey, html: String) {
        self.entries.insert(key, html);
    }

    fn invalidate(&mut self, key: &CacheKey) {
        self.entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_bump_misses() {
        let mut cache = MemoryCache::new();
        cache.put(CacheKey::new("cosmic", "v1"), "<html>".into());

        assert!(cache.get(&CacheKey::new("cosmic", "v1")).is_some());
        assert!(cache.get(&CacheKey::new("cosmic", "v2")).is_none());
    }

    #[test]
    fn test_invalidate_removes_entry() {
        let mut cache = MemoryCache::new();
        let key = CacheKey::new("cosmic", "v1");
        cache.put(key.clone(), "<html>".into());
        cache.invalidate(&key);
        assert!(cache.is_empty());
    }
}
