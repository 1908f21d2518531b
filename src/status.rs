//! Dependency listing (`rf list`).

use crate::config::{Dependency, RefsConfig};
use crate::layout::Layout;
use crate::ui;
use anyhow::Result;
use colored::*;
use walkdir::WalkDir;

#[derive(Debug, PartialEq, Eq)]
enum DepState {
    Disabled,
    NotFetched,
    Cloned,
    Staged,
}

pub fn list(config: &RefsConfig, layout: &Layout) -> Result<()> {
    if config.deps.is_empty() {
        println!("{} No dependencies in refs.toml", "ℹ".blue());
        return Ok(());
    }

    let mut table = ui::Table::new(&["Name", "State", "Staged", "Source"]);
    for (name, dep) in &config.deps {
        let state = dep_state(name, dep, layout);
        let state_cell = match state {
            DepState::Disabled => "disabled".dimmed().to_string(),
            DepState::NotFetched => "not fetched".to_string(),
            DepState::Cloned => "cloned".yellow().to_string(),
            DepState::Staged => "staged".green().to_string(),
        };
        let staged = match state {
            DepState::Staged => format!("{} files", staged_file_count(dep, layout)),
            _ => "-".to_string(),
        };
        table.add_row(vec![
            name.as_str().bold().to_string(),
            state_cell,
            staged,
            dep.url().to_string(),
        ]);
    }
    table.print();
    Ok(())
}

fn dep_state(name: &str, dep: &Dependency, layout: &Layout) -> DepState {
    if !dep.enabled() {
        return DepState::Disabled;
    }
    if !layout.clone_dir(dep.dir_name(name)).exists() {
        return DepState::NotFetched;
    }
    let rules = dep.stage();
    if !rules.is_empty() && rules.iter().all(|r| layout.dest(&r.dest).exists()) {
        return DepState::Staged;
    }
    DepState::Cloned
}

fn staged_file_count(dep: &Dependency, layout: &Layout) -> usize {
    dep.stage()
        .iter()
        .map(|rule| {
            WalkDir::new(layout.dest(&rule.dest))
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
                .count()
        })
        .sum()
}
