//! Level text storage.
//!
//! Raw level descriptions are registered by key and handed to the parser
//! at setup time. The store ships with one embedded demo level so the
//! binary runs without any asset on disk; additional levels are loaded
//! from plain text files.
//!
//! Level data is a build-time asset: a key that cannot be resolved, or a
//! file that cannot be read, is a fatal startup error for the caller.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use std::path::Path;

/// Key of the embedded demo level.
pub const DEMO_LEVEL: &str = "demo";

const DEMO_LEVEL_TEXT: &str = "\
xxxxxxxxxxxxxxxx\n\
x    x    s    x\n\
x s  x  xxxxx  x\n\
x    v     x 2 x\n\
xx xxxxxx  x   x\n\
x    x  s  xx xx\n\
x 1  x     x   x\n\
xxx xxx xx  s  x\n\
x   s      xx  x\n\
x  xx xxx      x\n\
x     x   v  f x\n\
xxxxxxxxxxxxxxxx";

/// Registry of raw level texts by key.
#[derive(Resource, Debug)]
pub struct LevelStore {
    map: FxHashMap<String, String>,
}

impl Default for LevelStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelStore {
    /// Create a store seeded with the embedded demo level.
    pub fn new() -> Self {
        let mut map = FxHashMap::default();
        map.insert(DEMO_LEVEL.to_string(), DEMO_LEVEL_TEXT.to_string());
        LevelStore { map }
    }

    /// Get a level's raw text by key.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&str> {
        self.map.get(key.as_ref()).map(String::as_str)
    }

    /// Insert a level text under a specific key.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.map.insert(key.into(), text.into());
    }

    /// Load a level file and register it under the file stem.
    ///
    /// Returns the key on success.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<String, String> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read level file {}: {e}", path.display()))?;
        let key = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .ok_or_else(|| format!("Level path {} has no file name", path.display()))?;
        self.insert(key.clone(), text);
        Ok(key)
    }
}
