//! Optional native compile step (`rf build`).
//!
//! Compiles each enabled dependency's configured C source file into an
//! object file under `references/lib/`. This never runs as part of
//! `rf fetch`; the clone must already exist.

use crate::config::RefsConfig;
use crate::layout::Layout;
use crate::tools::Tools;
use anyhow::{Context, Result};
use colored::*;

pub fn build_objects(config: &RefsConfig, layout: &Layout, tools: &dyn Tools) -> Result<()> {
    layout.init()?;

    let targets: Vec<_> = config
        .deps
        .iter()
        .filter(|(_, dep)| dep.enabled())
        .filter_map(|(name, dep)| dep.build().map(|rule| (name, dep, rule)))
        .collect();

    if targets.is_empty() {
        println!("{} No build rules in refs.toml", "!".yellow());
        return Ok(());
    }

    for (name, dep, rule) in targets {
        let clone_dir = layout.clone_dir(dep.dir_name(name));
        if !clone_dir.exists() {
            return Err(anyhow::anyhow!(
                "Dependency '{}' is not fetched. Run 'rf fetch' first.",
                name
            ));
        }

        let source = clone_dir.join(&rule.source);
        let object = layout.object(&rule.object);

        // Stale objects are deleted, never overwritten in place.
        tools
            .remove(&object)
            .with_context(|| format!("Failed to remove stale object {}", rule.object))?;

        println!("   {} Building {}...", "🔨".yellow(), name);
        tools
            .compile_object(&source, &object)
            .with_context(|| format!("Failed to build '{}'", name))?;
        println!("   {} Built lib/{}", "✓".green(), rule.object);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::SystemTools;
    use std::fs;

    fn config(toml_str: &str) -> RefsConfig {
        toml::from_str(toml_str).unwrap()
    }

    #[test]
    fn test_no_build_rules_is_a_noop() {
        let temp = tempfile::tempdir().unwrap();
        let layout = Layout::new(temp.path(), "references");

        let config = config(
            r#"
[deps.json]
git = "https://example.com/json.git"
"#,
        );

        build_objects(&config, &layout, &SystemTools).unwrap();
        assert!(fs::read_dir(&layout.lib_dir).unwrap().next().is_none());
    }

    #[test]
    fn test_unfetched_dependency_errors() {
        let temp = tempfile::tempdir().unwrap();
        let layout = Layout::new(temp.path(), "references");

        let config = config(
            r#"
[deps.c_simple]
git = "https://example.com/c_simple.git"
build = { source = "json.c", object = "c_simple.o" }
"#,
        );

        let err = build_objects(&config, &layout, &SystemTools).unwrap_err();
        assert!(err.to_string().contains("rf fetch"));
    }

    #[test]
    fn test_compiles_object_into_lib() {
        let temp = tempfile::tempdir().unwrap();
        let layout = Layout::new(temp.path(), "references");
        layout.init().unwrap();

        let clone_dir = layout.clone_dir("c_simple");
        fs::create_dir_all(&clone_dir).unwrap();
        fs::write(clone_dir.join("json.c"), "int parse(void) { return 0; }\n").unwrap();

        let config = config(
            r#"
[deps.c_simple]
git = "https://example.com/c_simple.git"
build = { source = "json.c", object = "c_simple.o" }
"#,
        );

        build_objects(&config, &layout, &SystemTools).unwrap();
        assert!(layout.object("c_simple.o").exists());
    }

    #[test]
    fn test_missing_source_fails_and_writes_nothing() {
        let temp = tempfile::tempdir().unwrap();
        let layout = Layout::new(temp.path(), "references");
        layout.init().unwrap();

        // Clone dir exists but the configured source file does not.
        fs::create_dir_all(layout.clone_dir("c_simple")).unwrap();

        let config = config(
            r#"
[deps.c_simple]
git = "https://example.com/c_simple.git"
build = { source = "json.c", object = "c_simple.o" }
"#,
        );

        assert!(build_objects(&config, &layout, &SystemTools).is_err());
        assert!(!layout.object("c_simple.o").exists());
    }
}
