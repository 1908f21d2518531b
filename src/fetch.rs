//! Reference fetching and staging.
//!
//! Each enabled dependency runs a short pipeline, strictly in sequence:
//!
//! 1. Delete any previous clone (refetch is destructive, never incremental)
//! 2. Clone the repository at its default branch
//! 3. Copy the configured files into the staging tree
//!
//! The first failing step aborts the whole run. Clones are left in place
//! afterwards as build residue; `rf clean` removes them.

use crate::config::{Dependency, RefsConfig};
use crate::layout::Layout;
use crate::tools::Tools;
use anyhow::{Context, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

pub fn fetch_references(config: &RefsConfig, layout: &Layout, tools: &dyn Tools) -> Result<()> {
    layout.init()?;

    let enabled = config.deps.values().filter(|d| d.enabled()).count();
    if enabled == 0 {
        println!("{} No enabled dependencies in refs.toml", "!".yellow());
        return Ok(());
    }
    println!("{} Fetching {} references...", "📦".blue(), enabled);

    for (name, dep) in &config.deps {
        if !dep.enabled() {
            println!("   {} Skipping disabled: {}", "!".yellow(), name);
            continue;
        }
        fetch_one(name, dep, layout, tools)?;
    }

    println!("{} Fetch complete.", "✓".green());
    Ok(())
}

fn fetch_one(name: &str, dep: &Dependency, layout: &Layout, tools: &dyn Tools) -> Result<()> {
    let clone_dir = layout.clone_dir(dep.dir_name(name));

    tools
        .remove(&clone_dir)
        .with_context(|| format!("Failed to reset clone directory for '{}'", name))?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⣾⣽⣻⢿⡿⣟⣯⣷"),
    );
    pb.set_message(format!("Downloading {}...", name));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    match tools.clone_repo(dep.url(), &clone_dir) {
        Ok(()) => {
            pb.finish_with_message(format!("{} Downloaded {}", "✓".green(), name));
        }
        Err(err) => {
            pb.finish_with_message(format!("{} Failed {}", "x".red(), name));
            return Err(err.context(format!("Failed to fetch dependency '{}'", name)));
        }
    }

    for rule in dep.stage() {
        let src = clone_dir.join(&rule.src);
        let dest = layout.dest(&rule.dest);

        // Replace, never merge into, an earlier staging result.
        tools
            .remove(&dest)
            .with_context(|| format!("Failed to clear staging target {}", rule.dest))?;
        tools
            .copy(&src, &dest)
            .with_context(|| format!("Failed to stage {} for '{}'", rule.src, name))?;
        println!("   {} Staged {}", "+".green(), rule.dest);
    }

    Ok(())
}
