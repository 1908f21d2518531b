//! Staging tree cleanup.
//!
//! - `rf clean` - remove the clone directories (disposable build residue)
//! - `rf clean --all` - remove the entire staging tree, headers included

use crate::config::RefsConfig;
use crate::layout::Layout;
use anyhow::{Context, Result};
use colored::*;
use std::fs;

pub fn clean(config: &RefsConfig, layout: &Layout, all: bool) -> Result<()> {
    if all {
        if layout.root.exists() {
            fs::remove_dir_all(&layout.root).with_context(|| {
                format!("Failed to remove staging tree {}", layout.root.display())
            })?;
            println!("{} Removed {}/", "🗑️".red(), layout.root.display());
        } else {
            println!("{} Nothing to clean", "!".yellow());
        }
        return Ok(());
    }

    let mut removed = 0;
    for (name, dep) in &config.deps {
        let clone_dir = layout.clone_dir(dep.dir_name(name));
        if clone_dir.exists() {
            fs::remove_dir_all(&clone_dir)
                .with_context(|| format!("Failed to remove clone {}", clone_dir.display()))?;
            println!("   {} Removed clone: {}", "🗑️".red(), name);
            removed += 1;
        }
    }

    if removed == 0 {
        println!("{} Nothing to clean", "!".yellow());
    } else {
        println!("{} Clean complete.", "✓".green());
    }
    Ok(())
}
