//! Session-wide silhouette cache.
//!
//! Silhouettes are loaded through the injected [`SilhouetteStore`] the first
//! time an entity of a kind spawns, then served from memory — the original
//! point data never gets re-read per shot.

use std::collections::HashMap;

use skyfire_core::enums::AssetKey;
use skyfire_core::silhouette::{AssetError, Silhouette, SilhouetteStore};

pub struct SpriteCatalog {
    store: Box<dyn SilhouetteStore>,
    cache: HashMap<AssetKey, Silhouette>,
}

impl SpriteCatalog {
    pub fn new(store: Box<dyn SilhouetteStore>) -> Self {
        Self {
            store,
            cache: HashMap::new(),
        }
    }

    /// Unscaled bounding extents `(width, height)` for the given asset,
    /// loading and caching the silhouette on first use.
    pub fn measure(&mut self, key: AssetKey) -> Result<(f32, f32), AssetError> {
        if !self.cache.contains_key(&key) {
            let silhouette = self.store.load(key)?;
            self.cache.insert(key, silhouette);
        }
        let s = &self.cache[&key];
        Ok((s.width, s.height))
    }

    /// Full silhouette for rendering, if already cached or loadable.
    pub fn silhouette(&mut self, key: AssetKey) -> Result<&Silhouette, AssetError> {
        if !self.cache.contains_key(&key) {
            let silhouette = self.store.load(key)?;
            self.cache.insert(key, silhouette);
        }
        Ok(&self.cache[&key])
    }
}
