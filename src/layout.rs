//! Staging tree layout.
//!
//! The fetcher works against a fixed directory layout rooted in the
//! invocation directory:
//!
//! - `references/` - clones land here, one directory per dependency
//! - `references/include/` - staged headers, one subdirectory per dependency
//! - `references/lib/` - compiled object files from `rf build`

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Layout {
    pub root: PathBuf,
    pub include_dir: PathBuf,
    pub lib_dir: PathBuf,
}

impl Layout {
    /// Layout rooted at `base/<root>`.
    pub fn new(base: &Path, root: &str) -> Self {
        let root = base.join(root);
        let include_dir = root.join("include");
        let lib_dir = root.join("lib");
        Self {
            root,
            include_dir,
            lib_dir,
        }
    }

    /// Create the staging tree if missing. Safe to call repeatedly.
    pub fn init(&self) -> Result<()> {
        for dir in [&self.root, &self.include_dir, &self.lib_dir] {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory {}", dir.display()))?;
        }
        Ok(())
    }

    /// Clone directory for a dependency.
    pub fn clone_dir(&self, dir_name: &str) -> PathBuf {
        self.root.join(dir_name)
    }

    /// A staging destination, relative to the root.
    pub fn dest(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    /// An object file under `lib/`.
    pub fn object(&self, name: &str) -> PathBuf {
        self.lib_dir.join(name)
    }
}
